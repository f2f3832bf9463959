//! Normalization of raw request input before it reaches the engine.

/// Lowercase every whitespace-separated word, then uppercase its first
/// character: `"UNITED states"` becomes `"United States"`. Whitespace is kept
/// as-is; other punctuation does not start a new word.
pub fn capitalize_fully(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// `"y"` in any case means ascending; anything else means descending.
pub fn parse_ascending(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("y")
}
