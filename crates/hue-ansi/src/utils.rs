//! ANSI text processing utilities.
//!
//! Helpers for inspecting colorized output: stripping escape sequences
//! from text or raw bytes, and extracting them.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for basic ANSI escape sequences (SGR codes).
pub const ESCAPE: &str = r"\x1b\[[0-9;]*m";

/// Compiled regex for ESCAPE pattern.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ESCAPE).unwrap());

/// Compiled regex for ESCAPE pattern, over bytes.
static ESCAPE_BYTES_RE: LazyLock<regex::bytes::Regex> =
    LazyLock::new(|| regex::bytes::Regex::new(ESCAPE).unwrap());

/// Remove all SGR escape sequences from text.
///
/// # Example
///
/// ```
/// use hue_ansi::utils::visible;
/// let text = "\x1b[31;49mRed\x1b[0m text";
/// assert_eq!(visible(text), "Red text");
/// ```
pub fn visible(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").to_string()
}

/// [`visible`] over raw bytes.
pub fn visible_bytes(bytes: &[u8]) -> Vec<u8> {
    ESCAPE_BYTES_RE.replace_all(bytes, &b""[..]).into_owned()
}

/// Extract all SGR escape sequences from text.
///
/// # Example
///
/// ```
/// use hue_ansi::utils::extract_ansi_codes;
/// let text = "\x1b[32;49mok\x1b[0m";
/// let codes = extract_ansi_codes(text);
/// assert_eq!(codes, vec!["\x1b[32;49m", "\x1b[0m"]);
/// ```
pub fn extract_ansi_codes(text: &str) -> Vec<String> {
    ESCAPE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
