/// Sentence-ending punctuation recognized when splitting generated text:
/// the ASCII full stop plus the common CJK full-stop variants
/// (ideographic full stop, fullwidth full stop, halfwidth ideographic
/// full stop).
pub const SENTENCE_TERMINATORS: [char; 4] = ['.', '。', '．', '｡'];

/// Split generated narrative text into trimmed, non-empty story lines.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(&SENTENCE_TERMINATORS[..])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
