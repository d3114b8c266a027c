//! Hue Writer
//!
//! This crate colorizes output streams with ECMA-48 escape codes.
//!
//! # Overview
//!
//! - [`Hue`] - A mutable color pair with print helpers
//! - [`SolidWriter`] - Wraps a sink and colors every write with one pair
//! - [`RuleWriter`] - Wraps a sink and colors the spans matched by regex [`Rule`]s
//!
//! Every writer implements [`std::io::Write`], so they drop in wherever a
//! sink is expected.
//!
//! # Example
//!
//! ```
//! use hue_ansi::{Color, ColorPair};
//! use hue_writer::RuleWriter;
//!
//! let mut writer = RuleWriter::new(Vec::new());
//! writer
//!     .add_pattern(ColorPair::new(Color::Green, Color::Default), "X")
//!     .unwrap();
//! writer.write_str_colored("aXbXc").unwrap();
//!
//! let out = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(
//!     out,
//!     "a\x1b[32;49mX\x1b[0mb\x1b[32;49mX\x1b[0mc\x1b[0m"
//! );
//! ```

pub mod hue;
pub mod rules;
mod sink;
pub mod solid;

pub use hue::Hue;
pub use rules::{Rule, RuleWriter};
pub use solid::SolidWriter;
