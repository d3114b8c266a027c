//! ANSI escape code constants.
//!
//! This module provides the raw ECMA-48 sequences used for
//! foreground/background colors and the fixed widths the encoding
//! relies on.

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Offset added to a foreground code to get the matching background code.
pub const BG_OFFSET: u8 = 10;

/// Width of an enter-color sequence: `ESC [ f f ; b b m`.
pub const PREFIX_LEN: usize = 8;

/// Width of the reset sequence: `ESC [ 0 m`.
pub const SUFFIX_LEN: usize = 4;

/// Shortest value [`decode`](crate::encode::decode) accepts.
pub const MIN_ENCODED_LEN: usize = PREFIX_LEN + SUFFIX_LEN;

/// Create an enter-color escape sequence from foreground base codes.
///
/// `bg` is given as a foreground base code (30..=39) and is shifted by
/// [`BG_OFFSET`] into the background range.
///
/// # Example
///
/// ```
/// use hue_ansi::codes::enter_color;
/// assert_eq!(enter_color(32, 39), "\x1b[32;49m");
/// ```
pub fn enter_color(fg: u8, bg: u8) -> String {
    format!("{}{};{}m", CSI, fg, u16::from(bg) + u16::from(BG_OFFSET))
}
