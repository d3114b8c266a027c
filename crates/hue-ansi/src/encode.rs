//! The reversible hue string encoding.
//!
//! An encoded value is `ESC[<fg>;<bg>m <payload> ESC[0m`. Every palette
//! code has two digits, so the prefix is always [`PREFIX_LEN`] bytes and
//! the suffix [`SUFFIX_LEN`] bytes. [`decode`] relies on those widths and
//! strips them without parsing the escape codes.

use std::fmt;

use hue_core::{HueError, Result};

use crate::codes::{MIN_ENCODED_LEN, PREFIX_LEN, RESET, SUFFIX_LEN};
use crate::color::ColorPair;

/// A string containing ECMA-48 color codes.
///
/// Only [`encode`] produces one, which keeps the fixed-width layout
/// [`HueString::decode`] depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HueString(String);

impl HueString {
    /// The encoded text, escape codes included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the encoded text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the encoded text is empty (never true for encoder output).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strip the color codes and return the payload.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_ansi::{encode, ColorPair};
    /// let hs = encode(&ColorPair::default(), "plain");
    /// assert_eq!(hs.decode().unwrap(), "plain");
    /// ```
    pub fn decode(&self) -> Result<&str> {
        decode_str(&self.0)
    }

    /// Consume the value, returning the encoded text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HueString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HueString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HueString> for String {
    fn from(hs: HueString) -> Self {
        hs.0
    }
}

/// Wrap the `Display` form of `text` in the pair's color codes.
///
/// # Example
///
/// ```
/// use hue_ansi::{encode, Color, ColorPair};
/// let hs = encode(&ColorPair::new(Color::Blue, Color::Default), 42);
/// assert_eq!(hs.as_str(), "\x1b[34;49m42\x1b[0m");
/// ```
pub fn encode<T: fmt::Display>(pair: &ColorPair, text: T) -> HueString {
    HueString(format!("{}{}{}", pair.enter_sequence(), text, RESET))
}

/// Wrap raw bytes in the pair's color codes.
///
/// The payload is copied verbatim, so it need not be UTF-8.
pub fn encode_bytes(pair: &ColorPair, payload: &[u8]) -> Vec<u8> {
    let enter = pair.enter_sequence();
    let mut out = Vec::with_capacity(enter.len() + payload.len() + RESET.len());
    out.extend_from_slice(enter.as_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(RESET.as_bytes());
    out
}

/// Strip the fixed-width prefix and suffix from an encoded value.
///
/// Fails with [`HueError::Length`] when `encoded` is shorter than
/// [`MIN_ENCODED_LEN`]. The escape codes are not inspected.
///
/// # Example
///
/// ```
/// use hue_ansi::decode;
/// assert_eq!(decode(b"\x1b[31;40mhi\x1b[0m").unwrap(), b"hi");
/// assert!(decode(b"short").is_err());
/// ```
pub fn decode(encoded: &[u8]) -> Result<&[u8]> {
    let len = encoded.len();
    if len < MIN_ENCODED_LEN {
        return Err(HueError::Length {
            len,
            min: MIN_ENCODED_LEN,
        });
    }
    Ok(&encoded[PREFIX_LEN..len - SUFFIX_LEN])
}

/// [`decode`] for text, failing with [`HueError::Utf8`] if the cut lands
/// inside a multi-byte character.
pub fn decode_str(encoded: &str) -> Result<&str> {
    Ok(std::str::from_utf8(decode(encoded.as_bytes())?)?)
}
