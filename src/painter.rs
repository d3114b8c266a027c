//! Line painting for the hue binary.
//!
//! Picks the writer the command line asks for and feeds it one line at a
//! time. Lines are raw bytes; their terminators (`\n` or `\r\n`) go
//! straight to the sink so that every reset code lands before them.

use std::io::Write;

use hue_ansi::{decode, ColorTable};
use hue_config::Config;
use hue_core::{HueError, Result};
use hue_writer::{Hue, RuleWriter, SolidWriter};
use log::{debug, warn};

use crate::cli::Cli;

/// The active output mode.
#[derive(Debug)]
pub enum Painter<W: Write> {
    /// Color the spans matched by rules
    Rules(RuleWriter<W>),
    /// Color whole lines with one pair
    Solid(SolidWriter<W>),
    /// Strip the hue encoding from each line
    Decode(W),
}

impl<W: Write> Painter<W> {
    /// Build the painter selected by `cli`, falling back to `config`.
    ///
    /// Config rules come first so rules given on the command line take
    /// priority where both match.
    pub fn build(cli: &Cli, config: &Config, table: &ColorTable, writer: W) -> Result<Self> {
        if cli.decode {
            debug!("painter: decode");
            return Ok(Painter::Decode(writer));
        }

        let cli_rules = cli.parse_rules().map_err(HueError::Config)?;
        if config.rules.is_empty() && cli_rules.is_empty() {
            let mut pair = config.hue.color_pair(table)?;
            if let Some(ref fg) = cli.fg {
                pair.fg = table.lookup(fg)?;
            }
            if let Some(ref bg) = cli.bg {
                pair.bg = table.lookup(bg)?;
            }
            debug!("painter: solid {}", pair);
            return Ok(Painter::Solid(SolidWriter::new(writer, Hue::from_pair(pair))));
        }

        if cli.fg.is_some() || cli.bg.is_some() {
            warn!("--fg/--bg ignored: rules are configured");
        }

        let mut rule_writer = RuleWriter::new(writer);
        for rule in &config.rules {
            rule_writer.add_pattern(rule.color_pair(table)?, &rule.pattern)?;
        }
        for rule in &cli_rules {
            let pair = table.pair(&rule.fg, rule.bg.as_deref().unwrap_or("Default"))?;
            rule_writer.add_pattern(pair, &rule.pattern)?;
        }
        debug!("painter: {} rules", rule_writer.rules().len());
        Ok(Painter::Rules(rule_writer))
    }

    /// Paint one line of raw input.
    ///
    /// `line` may end with `\n` or `\r\n`; the terminator is written
    /// unchanged after the colored body. A line without one, such as the
    /// last line of a file, gets none added.
    pub fn paint_bytes(&mut self, line: &[u8]) -> Result<()> {
        let (body, ending) = split_line_ending(line);
        match self {
            Painter::Rules(writer) => {
                writer.write_colored(body)?;
                writer.get_mut().write_all(ending)?;
            }
            Painter::Solid(writer) => {
                writer.write_colored(body)?;
                writer.get_mut().write_all(ending)?;
            }
            Painter::Decode(writer) => {
                writer.write_all(decode(body)?)?;
                writer.write_all(ending)?;
            }
        }
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        match self {
            Painter::Rules(writer) => writer.flush()?,
            Painter::Solid(writer) => writer.flush()?,
            Painter::Decode(writer) => writer.flush()?,
        }
        Ok(())
    }

    /// Consume the painter, returning the sink.
    pub fn into_inner(self) -> W {
        match self {
            Painter::Rules(writer) => writer.into_inner(),
            Painter::Solid(writer) => writer.into_inner(),
            Painter::Decode(writer) => writer,
        }
    }
}

/// Split a line into its body and its `\n` or `\r\n` terminator.
fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    let body_len = match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest).len(),
        None => line.len(),
    };
    line.split_at(body_len)
}
