//! Conditional logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Each module that uses these defines its own switch:
//! ```rust
//! const ENABLE_LOGS: bool = true;
//! ```
//! and imports the macros from the crate root:
//! ```rust,ignore
//! use crate::{log_info, log_warn, log_error};
//! ```

/// Info-level logging, skipped when the calling module sets `ENABLE_LOGS` to false.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, skipped when the calling module sets `ENABLE_LOGS` to false.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level logging, skipped when the calling module sets `ENABLE_LOGS` to false.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
