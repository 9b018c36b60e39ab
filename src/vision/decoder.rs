use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::DynamicImage;
use serde::Serialize;

use crate::session::SessionError;

/// Strip an optional data-URI prefix (`data:image/...;base64,`) from a
/// transport payload and base64-decode the remainder into raw image bytes.
pub fn unwrap_transport_payload(payload: &str) -> Result<Vec<u8>, SessionError> {
    if payload.is_empty() {
        return Err(SessionError::EmptyFramePayload);
    }

    let encoded = match payload.split_once(',') {
        Some((_, rest)) => rest,
        None => payload,
    };

    BASE64
        .decode(encoded)
        .map_err(|_| SessionError::InvalidFramePayload)
}

/// Decode raw encoded image bytes into a pixel image. The format is guessed
/// from the header; empty buffers and corrupt data fail here.
pub fn decode_frame(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).context("failed to decode frame image")
}

/// Basic facts about a decodable frame, for diagnostic upload responses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

pub fn probe_frame(bytes: &[u8]) -> Result<FrameInfo> {
    let image = decode_frame(bytes)?;
    Ok(FrameInfo {
        width: image.width(),
        height: image.height(),
        size_bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn unwraps_data_uri_payload() {
        let bytes = encoded_png(2, 2);
        let payload = format!("data:image/png;base64,{}", BASE64.encode(&bytes));
        assert_eq!(unwrap_transport_payload(&payload).unwrap(), bytes);
    }

    #[test]
    fn unwraps_bare_base64_payload() {
        let bytes = encoded_png(2, 2);
        let payload = BASE64.encode(&bytes);
        assert_eq!(unwrap_transport_payload(&payload).unwrap(), bytes);
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(matches!(
            unwrap_transport_payload(""),
            Err(SessionError::EmptyFramePayload)
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            unwrap_transport_payload("data:image/png;base64,@@not-base64@@"),
            Err(SessionError::InvalidFramePayload)
        ));
    }

    #[test]
    fn decodes_valid_frame() {
        let bytes = encoded_png(4, 3);
        let frame = decode_frame(&bytes).unwrap();
        assert_eq!((frame.width(), frame.height()), (4, 3));
    }

    #[test]
    fn decode_fails_on_garbage() {
        assert!(decode_frame(b"definitely not an image").is_err());
        assert!(decode_frame(&[]).is_err());
    }

    #[test]
    fn probe_reports_dimensions_and_size() {
        let bytes = encoded_png(6, 2);
        let info = probe_frame(&bytes).unwrap();
        assert_eq!(info.width, 6);
        assert_eq!(info.height, 2);
        assert_eq!(info.size_bytes, bytes.len());
    }
}
