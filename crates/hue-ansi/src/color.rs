//! The color palette, color pairs and the color name table.
//!
//! Colors are the eight classic ECMA-48 foreground colors plus
//! [`Color::Default`], which asks the terminal for its native color.
//! Background codes are derived by adding [`BG_OFFSET`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use hue_core::{HueError, Result};

use crate::codes::{enter_color, BG_OFFSET};

/// A palette color.
///
/// Each color is identified by its foreground base code (30..=39).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Code 30
    Black,
    /// Code 31
    Red,
    /// Code 32
    Green,
    /// Code 33 (rendered as yellow by most terminals)
    Brown,
    /// Code 34
    Blue,
    /// Code 35
    Magenta,
    /// Code 36
    Cyan,
    /// Code 37
    White,
    /// Code 39, the terminal's own color
    #[default]
    Default,
}

impl Color {
    /// Every palette color, in code order.
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Brown,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
    ];

    /// Foreground code of this color.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Brown => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Default => 39,
        }
    }

    /// Background code of this color.
    pub fn bg_code(self) -> u8 {
        self.code() + BG_OFFSET
    }

    /// Canonical name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Brown => "Brown",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::White => "White",
            Color::Default => "Default",
        }
    }

    /// Convert a foreground code into a color.
    ///
    /// `0` is the unset sentinel and maps to [`Color::Default`], so a
    /// zero code is never emitted.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_ansi::Color;
    /// assert_eq!(Color::from_code(32).unwrap(), Color::Green);
    /// assert_eq!(Color::from_code(0).unwrap(), Color::Default);
    /// assert!(Color::from_code(38).is_err());
    /// ```
    pub fn from_code(code: u8) -> Result<Self> {
        if code == 0 {
            return Ok(Color::Default);
        }
        Color::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(HueError::InvalidColorCode(code))
    }
}

impl TryFrom<u8> for Color {
    type Error = HueError;

    fn try_from(code: u8) -> Result<Self> {
        Color::from_code(code)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses canonical names case-insensitively. Aliases live in a
/// [`ColorTable`].
impl FromStr for Color {
    type Err = HueError;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HueError::UnknownColor(s.to_string()))
    }
}

/// A foreground/background color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl ColorPair {
    /// Create a new color pair.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Create a pair from raw foreground base codes (0 = unset).
    pub fn from_codes(fg: u8, bg: u8) -> Result<Self> {
        Ok(Self::new(Color::from_code(fg)?, Color::from_code(bg)?))
    }

    /// The enter-color escape sequence for this pair.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_ansi::{Color, ColorPair};
    /// let pair = ColorPair::new(Color::Green, Color::Default);
    /// assert_eq!(pair.enter_sequence(), "\x1b[32;49m");
    /// ```
    pub fn enter_sequence(&self) -> String {
        enter_color(self.fg.code(), self.bg.code())
    }
}

impl fmt::Display for ColorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.fg, self.bg)
    }
}

/// Immutable name to color lookup.
///
/// Built once with [`ColorTable::standard`] (optionally extended with
/// [`ColorTable::with_aliases`]) and passed by reference to whatever needs
/// to resolve color names. Lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    names: HashMap<String, Color>,
}

impl ColorTable {
    /// The table of canonical palette names.
    pub fn standard() -> Self {
        let names = Color::ALL
            .into_iter()
            .map(|c| (c.name().to_ascii_lowercase(), c))
            .collect();
        Self { names }
    }

    /// Derive a new table with extra names.
    ///
    /// Each alias target is resolved against `self`, so an alias may point
    /// at any name already in the table but not at another new alias.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_ansi::{Color, ColorTable};
    /// let table = ColorTable::standard()
    ///     .with_aliases([("Yellow", "Brown")])
    ///     .unwrap();
    /// assert_eq!(table.lookup("yellow").unwrap(), Color::Brown);
    /// ```
    pub fn with_aliases<I, K, V>(&self, aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut names = self.names.clone();
        for (alias, target) in aliases {
            let color = self.lookup(target.as_ref())?;
            names.insert(alias.as_ref().trim().to_ascii_lowercase(), color);
        }
        Ok(Self { names })
    }

    /// Look up a color by name.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.names.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// Look up a color by name, failing with [`HueError::UnknownColor`].
    pub fn lookup(&self, name: &str) -> Result<Color> {
        self.get(name)
            .ok_or_else(|| HueError::UnknownColor(name.to_string()))
    }

    /// Resolve a foreground and background name into a pair.
    pub fn pair(&self, fg: &str, bg: &str) -> Result<ColorPair> {
        Ok(ColorPair::new(self.lookup(fg)?, self.lookup(bg)?))
    }

    /// All names in the table, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of names in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Color::Black.code(), 30);
        assert_eq!(Color::White.code(), 37);
        assert_eq!(Color::Default.code(), 39);
        assert_eq!(Color::Red.bg_code(), 41);
        assert_eq!(Color::Default.bg_code(), 49);
    }

    #[test]
    fn test_from_code_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()).unwrap(), color);
        }
    }

    #[test]
    fn test_from_code_unset_and_invalid() {
        assert_eq!(Color::try_from(0u8).unwrap(), Color::Default);
        assert!(matches!(
            Color::from_code(38),
            Err(HueError::InvalidColorCode(38))
        ));
        assert!(Color::from_code(40).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(" MAGENTA ".parse::<Color>().unwrap(), Color::Magenta);
        assert!(matches!(
            "Yellow".parse::<Color>(),
            Err(HueError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_pair_default() {
        let pair = ColorPair::default();
        assert_eq!(pair.fg, Color::Default);
        assert_eq!(pair.bg, Color::Default);
        assert_eq!(pair.enter_sequence(), "\x1b[39;49m");
    }

    #[test]
    fn test_pair_from_codes() {
        let pair = ColorPair::from_codes(0, 34).unwrap();
        assert_eq!(pair, ColorPair::new(Color::Default, Color::Blue));
        assert!(ColorPair::from_codes(31, 99).is_err());
    }

    #[test]
    fn test_pair_display() {
        let pair = ColorPair::new(Color::Red, Color::White);
        assert_eq!(pair.to_string(), "Red on White");
    }

    #[test]
    fn test_standard_table() {
        let table = ColorTable::standard();
        assert_eq!(table.len(), 9);
        assert_eq!(table.lookup("Cyan").unwrap(), Color::Cyan);
        assert_eq!(table.lookup("cyan").unwrap(), Color::Cyan);
        assert!(table.get("Pink").is_none());
        assert!(matches!(
            table.lookup("Pink"),
            Err(HueError::UnknownColor(name)) if name == "Pink"
        ));
    }

    #[test]
    fn test_aliases_do_not_touch_source() {
        let standard = ColorTable::standard();
        let table = standard
            .with_aliases([("Yellow", "Brown"), ("Alert", "red")])
            .unwrap();
        assert_eq!(table.len(), 11);
        assert_eq!(table.lookup("ALERT").unwrap(), Color::Red);
        assert!(standard.get("yellow").is_none());
    }

    #[test]
    fn test_alias_to_unknown_target() {
        let result = ColorTable::standard().with_aliases([("Sky", "Azure")]);
        assert!(matches!(result, Err(HueError::UnknownColor(_))));
    }

    #[test]
    fn test_table_pair() {
        let table = ColorTable::standard();
        let pair = table.pair("Green", "Default").unwrap();
        assert_eq!(pair, ColorPair::new(Color::Green, Color::Default));
        assert!(table.pair("Green", "Nope").is_err());
    }

    #[test]
    fn test_names_sorted() {
        let table = ColorTable::standard();
        let names = table.names();
        assert_eq!(names.first(), Some(&"black"));
        assert_eq!(names.last(), Some(&"white"));
    }
}
