//! Solid color configuration.
//!
//! The `[hue]` section names the color used when no rules are configured.

use hue_ansi::{ColorPair, ColorTable};
use hue_core::Result;
use serde::{Deserialize, Serialize};

/// The `[hue]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HueConfig {
    /// Foreground color name.
    /// Default: "Default"
    #[serde(default = "default_color")]
    pub fg: String,

    /// Background color name.
    /// Default: "Default"
    #[serde(default = "default_color")]
    pub bg: String,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            fg: default_color(),
            bg: default_color(),
        }
    }
}

impl HueConfig {
    /// Resolve the color names against `table`.
    pub fn color_pair(&self, table: &ColorTable) -> Result<ColorPair> {
        table.pair(&self.fg, &self.bg)
    }

    /// Merge another HueConfig into this one.
    ///
    /// Both names are taken from `other`, since TOML can't tell an
    /// omitted key from one set to its default.
    pub fn merge(&mut self, other: &HueConfig) {
        self.fg = other.fg.clone();
        self.bg = other.bg.clone();
    }
}

pub(crate) fn default_color() -> String {
    "Default".to_string()
}
