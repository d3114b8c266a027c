//! Command-line interface for hue.

use clap::Parser;
use std::path::PathBuf;

/// hue - colorize terminal text with ECMA-48 escape codes.
///
/// Colors every line of input with one color, or colors the parts of each
/// line that match regex rules.
#[derive(Parser, Debug)]
#[command(
    name = "hue",
    author = "Hue Contributors",
    version,
    about = "Colorize terminal text by color or by regex rules",
    after_help = "Colors: Black Red Green Brown Blue Magenta Cyan White Default\n\n\
                  Examples:\n  \
                  tail -f app.log | hue -r 'Red=ERROR' -r 'Brown=WARN(ING)?'\n  \
                  hue -f Green -b Black notes.txt\n  \
                  hue -r 'White,Red=\\bpanic\\b' -c '[aliases]\\nWarn = \"Brown\"'\n  \
                  hue --decode colored.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Color rule FG[,BG]=REGEX; repeatable, later rules win overlaps
    #[arg(short = 'r', long = "rule", value_name = "RULE")]
    pub rules: Vec<String>,

    /// Foreground color for solid mode; ignored when the command line or
    /// the config file defines rules
    #[arg(short = 'f', long = "fg", value_name = "COLOR")]
    pub fg: Option<String>,

    /// Background color for solid mode; ignored when the command line or
    /// the config file defines rules
    #[arg(short = 'b', long = "bg", value_name = "COLOR")]
    pub bg: Option<String>,

    /// Strip hue encoding from each line instead of adding it
    #[arg(short = 'd', long = "decode")]
    pub decode: bool,

    /// Create the config file if missing, show its path and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

/// A rule given on the command line, colors still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleArg {
    pub fg: String,
    pub bg: Option<String>,
    pub pattern: String,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Parse every `--rule` argument, in order.
    pub fn parse_rules(&self) -> Result<Vec<RuleArg>, String> {
        self.rules.iter().map(|r| parse_rule(r)).collect()
    }
}

/// Parse `FG[,BG]=REGEX`.
///
/// The first `=` separates colors from the pattern, so the pattern itself
/// may contain `=`.
pub fn parse_rule(arg: &str) -> Result<RuleArg, String> {
    let (colors, pattern) = arg
        .split_once('=')
        .ok_or_else(|| format!("rule {:?} is not of the form FG[,BG]=REGEX", arg))?;

    let (fg, bg) = match colors.split_once(',') {
        Some((fg, bg)) => (fg, Some(bg.trim().to_string())),
        None => (colors, None),
    };
    let fg = fg.trim();
    if fg.is_empty() {
        return Err(format!("rule {:?} has no foreground color", arg));
    }

    Ok(RuleArg {
        fg: fg.to_string(),
        bg,
        pattern: pattern.to_string(),
    })
}

/// Show paths information, creating the default config file if missing.
pub fn show_paths() -> hue_core::Result<()> {
    use hue_config::Config;

    let config_path = Config::ensure_config_file()?;

    println!("paths:");
    println!("  config                {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["hue"]);
        assert!(cli.files.is_empty());
        assert!(cli.rules.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.decode);
        assert!(cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "hue",
            "-l", "debug",
            "-f", "Green",
            "-b", "Black",
            "file.txt",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.fg.as_deref(), Some("Green"));
        assert_eq!(cli.bg.as_deref(), Some("Black"));
        assert_eq!(cli.files, vec![PathBuf::from("file.txt")]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_rules_keep_order() {
        let cli = Cli::parse_from(["hue", "-r", "Red=a", "--rule", "Blue,White=b"]);
        let rules = cli.parse_rules().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].fg, "Red");
        assert_eq!(rules[1].bg.as_deref(), Some("White"));
    }

    #[test]
    fn test_parse_rule() {
        assert_eq!(
            parse_rule("Red=ERROR").unwrap(),
            RuleArg {
                fg: "Red".into(),
                bg: None,
                pattern: "ERROR".into(),
            }
        );
        let rule = parse_rule(" Cyan , Black =key=value").unwrap();
        assert_eq!(rule.fg, "Cyan");
        assert_eq!(rule.bg.as_deref(), Some("Black"));
        assert_eq!(rule.pattern, "key=value");
    }

    #[test]
    fn test_parse_rule_errors() {
        assert!(parse_rule("RedERROR").is_err());
        assert!(parse_rule("=ERROR").is_err());
        assert!(parse_rule(",Blue=x").is_err());
    }
}
