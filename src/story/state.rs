use serde::{Deserialize, Serialize};

use crate::session::SessionError;

pub(crate) const PAUSED_MESSAGE: &str = "Story is paused due to lack of attention";

/// One served page of story lines plus navigation facts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryPage {
    pub lines: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Outcome of a page fetch that did not error: either a page, or the paused
/// indicator carrying the current cursor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageFetch {
    Page(StoryPage),
    Paused {
        paused: bool,
        current_line: usize,
        message: String,
    },
}

/// Generated narrative plus the read cursor and the delivery gate.
///
/// Holds no synchronization of its own; the session controller owns it
/// behind a single lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryState {
    pub story_lines: Vec<String>,
    pub current_line: usize,
    pub paused: bool,
    pub lines_per_page: usize,
}

impl StoryState {
    pub fn new(lines_per_page: usize) -> Self {
        Self {
            story_lines: Vec::new(),
            current_line: 0,
            paused: false,
            lines_per_page,
        }
    }

    /// Replace the narrative wholesale and reset cursor and gate.
    pub fn set_story(&mut self, lines: Vec<String>) {
        self.story_lines = lines;
        self.current_line = 0;
        self.paused = false;
    }

    pub fn total_pages(&self) -> usize {
        self.story_lines.len().div_ceil(self.lines_per_page)
    }

    /// One-directional gate: monitoring only ever pauses; see [`resume`].
    ///
    /// [`resume`]: StoryState::resume
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Serve the requested page.
    ///
    /// While paused, returns the paused indicator without touching any
    /// state, so repeated calls are idempotent. On success the cursor always
    /// jumps to the served page's end index, even when the request skipped
    /// ahead of the previous cursor; pages in the gap are silently skipped.
    /// The pagination UI depends on this cursor behavior.
    pub fn fetch_page(&mut self, page_number: usize) -> Result<PageFetch, SessionError> {
        if self.story_lines.is_empty() {
            return Err(SessionError::NoStoryGenerated);
        }

        if self.paused {
            return Ok(PageFetch::Paused {
                paused: true,
                current_line: self.current_line,
                message: PAUSED_MESSAGE.to_string(),
            });
        }

        // Page indices arrive from the transport unvalidated; an index whose
        // start would overflow is out of range like any other past-the-end one.
        let Some(start) = page_number.checked_mul(self.lines_per_page) else {
            return Err(SessionError::PageOutOfRange);
        };
        if start >= self.story_lines.len() {
            return Err(SessionError::PageOutOfRange);
        }
        let end = start.saturating_add(self.lines_per_page);

        let lines = self.story_lines[start..end.min(self.story_lines.len())].to_vec();
        self.current_line = end;

        Ok(PageFetch::Page(StoryPage {
            lines,
            page: page_number,
            total_pages: self.total_pages(),
            has_next: end < self.story_lines.len(),
            has_previous: page_number > 0,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_line_story() -> StoryState {
        let mut state = StoryState::new(3);
        state.set_story((1..=7).map(|n| format!("line {n}")).collect());
        state
    }

    #[test]
    fn seven_lines_make_three_pages() {
        let state = seven_line_story();
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn last_page_is_partial_with_no_next() {
        let mut state = seven_line_story();
        let fetched = state.fetch_page(2).unwrap();

        let PageFetch::Page(page) = fetched else {
            panic!("expected a page");
        };
        assert_eq!(page.lines, vec!["line 7"]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn first_page_has_no_previous() {
        let mut state = seven_line_story();
        let PageFetch::Page(page) = state.fetch_page(0).unwrap() else {
            panic!("expected a page");
        };
        assert_eq!(page.lines, vec!["line 1", "line 2", "line 3"]);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn out_of_range_page_is_an_error_and_preserves_cursor() {
        let mut state = seven_line_story();
        state.fetch_page(0).unwrap();
        assert_eq!(state.current_line, 3);

        assert!(matches!(
            state.fetch_page(5),
            Err(SessionError::PageOutOfRange)
        ));
        assert_eq!(state.current_line, 3);
    }

    #[test]
    fn cursor_jumps_to_fetched_page_end() {
        let mut state = StoryState::new(3);
        state.set_story((1..=20).map(|n| format!("line {n}")).collect());

        state.fetch_page(0).unwrap();
        assert_eq!(state.current_line, 3);

        // Non-sequential fetch: the cursor lands on page 4's end, skipping
        // the gap.
        state.fetch_page(4).unwrap();
        assert_eq!(state.current_line, 15);
    }

    #[test]
    fn cursor_end_is_unclamped_on_partial_last_page() {
        let mut state = seven_line_story();
        state.fetch_page(2).unwrap();
        assert_eq!(state.current_line, 9);
    }

    #[test]
    fn absurd_page_number_is_out_of_range_not_a_panic() {
        let mut state = seven_line_story();
        state.fetch_page(0).unwrap();

        assert!(matches!(
            state.fetch_page(usize::MAX),
            Err(SessionError::PageOutOfRange)
        ));
        assert!(matches!(
            state.fetch_page(usize::MAX / 3 + 1),
            Err(SessionError::PageOutOfRange)
        ));
        assert_eq!(state.current_line, 3);
    }

    #[test]
    fn fetch_before_generation_is_an_error() {
        let mut state = StoryState::new(3);
        assert!(matches!(
            state.fetch_page(0),
            Err(SessionError::NoStoryGenerated)
        ));
    }

    #[test]
    fn paused_fetch_is_idempotent_and_keeps_cursor() {
        let mut state = seven_line_story();
        state.fetch_page(0).unwrap();
        state.pause();

        for _ in 0..3 {
            let fetched = state.fetch_page(1).unwrap();
            assert_eq!(
                fetched,
                PageFetch::Paused {
                    paused: true,
                    current_line: 3,
                    message: PAUSED_MESSAGE.to_string(),
                }
            );
        }
        assert_eq!(state.current_line, 3);
    }

    #[test]
    fn resume_reopens_delivery() {
        let mut state = seven_line_story();
        state.pause();
        assert!(matches!(state.fetch_page(0), Ok(PageFetch::Paused { .. })));

        state.resume();
        assert!(matches!(state.fetch_page(0), Ok(PageFetch::Page(_))));
    }

    #[test]
    fn set_story_resets_cursor_and_gate() {
        let mut state = seven_line_story();
        state.fetch_page(1).unwrap();
        state.pause();

        state.set_story(vec!["fresh line".to_string()]);
        assert_eq!(state.current_line, 0);
        assert!(!state.paused);
        assert_eq!(state.total_pages(), 1);
    }
}
