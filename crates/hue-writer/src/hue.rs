//! The direct colorizer.
//!
//! A [`Hue`] holds one mutable [`ColorPair`] and wraps print-style output
//! in its escape codes.

use std::fmt;
use std::io::{self, Write};

use hue_ansi::{encode, Color, ColorPair, HueString};

/// A foreground/background color used to print colorized text.
///
/// # Example
///
/// ```
/// use hue_ansi::Color;
/// use hue_writer::Hue;
///
/// let mut hue = Hue::new(Color::Red, Color::White);
/// assert_eq!(hue.sprint("hot").as_str(), "\x1b[31;47mhot\x1b[0m");
///
/// hue.set_fg(Color::Blue);
/// let hs = hue.sprintf(format_args!("{} degrees", 12));
/// assert_eq!(hs.decode().unwrap(), "12 degrees");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hue {
    pair: ColorPair,
}

impl Hue {
    /// Create a hue from a foreground and background color.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self::from_pair(ColorPair::new(fg, bg))
    }

    /// Create a hue from an existing pair.
    pub fn from_pair(pair: ColorPair) -> Self {
        Self { pair }
    }

    /// The current color pair.
    pub fn pair(&self) -> ColorPair {
        self.pair
    }

    /// Set the foreground color.
    pub fn set_fg(&mut self, fg: Color) {
        self.pair.fg = fg;
    }

    /// Set the background color.
    pub fn set_bg(&mut self, bg: Color) {
        self.pair.bg = bg;
    }

    /// Replace both colors.
    pub fn set_pair(&mut self, pair: ColorPair) {
        self.pair = pair;
    }

    /// Colorize the `Display` form of `value`.
    pub fn sprint<T: fmt::Display>(&self, value: T) -> HueString {
        encode(&self.pair, value)
    }

    /// Colorize preformatted arguments, as built by `format_args!`.
    pub fn sprintf(&self, args: fmt::Arguments<'_>) -> HueString {
        encode(&self.pair, args)
    }

    /// Write the colorized `Display` form of `value` to `writer`.
    pub fn write_to<W: Write, T: fmt::Display>(&self, writer: &mut W, value: T) -> io::Result<()> {
        writer.write_all(self.sprint(value).as_str().as_bytes())
    }

    /// Print `value` to stdout in color.
    pub fn print<T: fmt::Display>(&self, value: T) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), value)
    }

    /// Print `value` to stdout in color, followed by a newline.
    ///
    /// The newline is written after the reset code.
    pub fn println<T: fmt::Display>(&self, value: T) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, value)?;
        stdout.write_all(b"\n")
    }

    /// Print preformatted arguments to stdout in color.
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.print(args)
    }
}

impl From<ColorPair> for Hue {
    fn from(pair: ColorPair) -> Self {
        Self::from_pair(pair)
    }
}
