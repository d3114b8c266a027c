//! Hue Config
//!
//! This crate handles configuration loading and management for the
//! `hue` command, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/hue/config.toml`
//! - macOS: `~/Library/Application Support/hue/config.toml`
//! - Windows: `%APPDATA%\hue\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use hue_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file or inline TOML
//! let config = Config::load_with_override(Some("[hue]\nFg = \"Red\"")).unwrap();
//! ```

mod hue;
mod rule;

pub use hue::HueConfig;
pub use rule::RuleConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hue_ansi::ColorTable;
use hue_core::{HueError, Result};
use serde::{Deserialize, Serialize};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"# Color used when no rules are configured.
[hue]
Fg = "Default"
Bg = "Default"

# Extra color names. Targets must be palette names:
# Black Red Green Brown Blue Magenta Cyan White Default
[aliases]
Yellow = "Brown"

# Later rules win where patterns overlap.
# [[rules]]
# Pattern = "ERROR"
# Fg      = "Red"
# Bg      = "Default"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Solid color configuration
    #[serde(default)]
    pub hue: HueConfig,

    /// Alias name to palette name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Color rules, lowest priority first
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[hue]"));
    /// assert!(toml.contains("[aliases]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "hue").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| HueError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Create `config.toml` with the defaults under `config_dir` unless it
    /// already exists. An existing file is never overwritten.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| HueError::Config(format!("{} in {}", e, path.display())))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_config::Config;
    /// let config = Config::parse("[[rules]]\nPattern = \"x\"\nFg = \"Red\"").unwrap();
    /// assert_eq!(config.rules.len(), 1);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HueError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        if override_path.exists() {
            Self::load_from(override_path)
        } else {
            Self::parse(override_str)
        }
    }

    /// Merge another config into this one.
    ///
    /// The `[hue]` section is taken from `other`, aliases from `other`
    /// replace same-named ones, and `other`'s rules are appended so they
    /// take priority over the existing ones.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::parse(r#"
    ///     [hue]
    ///     Fg = "Green"
    ///     [[rules]]
    ///     Pattern = "ok"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.hue.fg, "Green");
    /// assert_eq!(base.rules.len(), 1);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.hue.merge(&other.hue);
        self.aliases
            .extend(other.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.rules.extend(other.rules.iter().cloned());
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| HueError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The standard color table extended with this config's aliases.
    pub fn color_table(&self) -> Result<ColorTable> {
        ColorTable::standard().with_aliases(&self.aliases)
    }
}
