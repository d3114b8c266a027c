//! Hue ANSI
//!
//! This crate provides the ECMA-48 color vocabulary used by every hue
//! writer, and the reversible string encoding.
//!
//! # Overview
//!
//! - [`codes`] - Escape sequence constants and builders
//! - [`color`] - The color palette, [`ColorPair`] and the [`ColorTable`] name lookup
//! - [`encode`] - [`encode`](encode::encode)/[`decode`](encode::decode) and [`HueString`]
//! - [`utils`] - Text processing utilities (ANSI stripping, escape extraction)
//!
//! # Example
//!
//! ```
//! use hue_ansi::{encode, Color, ColorPair};
//!
//! let pair = ColorPair::new(Color::Red, Color::White);
//! let hs = encode(&pair, "alert");
//! assert_eq!(hs.as_str(), "\x1b[31;47malert\x1b[0m");
//! assert_eq!(hs.decode().unwrap(), "alert");
//! ```

pub mod codes;
pub mod color;
pub mod encode;
pub mod utils;

pub use codes::*;
pub use color::*;
pub use encode::*;
pub use utils::*;
