//! Rule configuration.
//!
//! Each `[[rules]]` entry binds a color to a regular expression. Entries
//! keep file order, which is also their priority order: a later entry wins
//! where two patterns match the same text.

use hue_ansi::{ColorPair, ColorTable};
use hue_core::Result;
use serde::{Deserialize, Serialize};

use crate::hue::default_color;

/// One `[[rules]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleConfig {
    /// Regular expression source. Compiled when the rule is added to a
    /// writer, not when the config is parsed.
    pub pattern: String,

    /// Foreground color name.
    /// Default: "Default"
    #[serde(default = "default_color")]
    pub fg: String,

    /// Background color name.
    /// Default: "Default"
    #[serde(default = "default_color")]
    pub bg: String,
}

impl RuleConfig {
    /// Create a rule entry.
    pub fn new(pattern: impl Into<String>, fg: impl Into<String>, bg: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            fg: fg.into(),
            bg: bg.into(),
        }
    }

    /// Resolve the color names against `table`.
    pub fn color_pair(&self, table: &ColorTable) -> Result<ColorPair> {
        table.pair(&self.fg, &self.bg)
    }
}
