//! Hue Core
//!
//! This crate provides the error taxonomy shared by every hue crate.
//!
//! # Overview
//!
//! - [`HueError`] - Error type for decoding, rule compilation and sink writes
//! - [`Result`] - Result alias over [`HueError`]

pub mod error;

pub use error::{HueError, Result};
