//! Regex-driven stream writer.
//!
//! A [`RuleWriter`] holds an ordered list of [`Rule`]s. On every write it
//! resolves which rule owns each input byte, then streams the input with
//! one escape sequence per change of owner.
//!
//! # Conflict resolution
//!
//! Rules are applied in the order they were added, each against the
//! original buffer. A rule paints every byte covered by any of its
//! matches, overwriting earlier rules, so the most recently added rule
//! wins wherever spans overlap.
//!
//! # Match semantics
//!
//! Patterns are [`regex::bytes::Regex`], which is leftmost-first: at the
//! earliest matching position, the first alternative that matches wins,
//! not necessarily the longest. Empty matches paint nothing.

use std::io::{self, Write};

use hue_ansi::{ColorPair, RESET};
use hue_core::Result;
use log::{debug, trace};
use regex::bytes::Regex;

use crate::sink::Counted;

/// Index into a color map meaning "no rule".
const NO_RULE: usize = 0;

/// A color bound to a pattern.
#[derive(Debug, Clone)]
pub struct Rule {
    pair: ColorPair,
    pattern: Regex,
}

impl Rule {
    /// Bind `pair` to an already compiled pattern.
    pub fn new(pair: ColorPair, pattern: Regex) -> Self {
        Self { pair, pattern }
    }

    /// Compile `pattern` and bind `pair` to it.
    ///
    /// Fails with [`HueError::Pattern`](hue_core::HueError::Pattern) on
    /// invalid syntax.
    pub fn compile(pair: ColorPair, pattern: &str) -> Result<Self> {
        Ok(Self::new(pair, Regex::new(pattern)?))
    }

    /// The color this rule paints.
    pub fn pair(&self) -> ColorPair {
        self.pair
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Colors the spans of each write that match its rules.
///
/// Every call to [`write_colored`](Self::write_colored) ends with a reset
/// code, so the sink is never left colored between writes. Matching is
/// done per call: a span split across two writes is not recognized.
///
/// # Example
///
/// ```
/// use hue_ansi::{Color, ColorPair};
/// use hue_writer::RuleWriter;
///
/// let mut writer = RuleWriter::new(Vec::new());
/// writer
///     .add_pattern(ColorPair::new(Color::Red, Color::Default), "ERROR")
///     .unwrap();
///
/// let n = writer.write_str_colored("1 ERROR").unwrap();
/// assert_eq!(writer.get_ref(), b"1 \x1b[31;49mERROR\x1b[0m");
/// assert_eq!(n, writer.get_ref().len());
/// ```
#[derive(Debug)]
pub struct RuleWriter<W: Write> {
    writer: W,
    rules: Vec<Rule>,
}

impl<W: Write> RuleWriter<W> {
    /// Create a writer with no rules.
    pub fn new(writer: W) -> Self {
        Self::with_rules(writer, Vec::new())
    }

    /// Create a writer with an initial rule list, lowest priority first.
    pub fn with_rules(writer: W, rules: Vec<Rule>) -> Self {
        Self { writer, rules }
    }

    /// Append a rule with a compiled pattern.
    pub fn add_rule(&mut self, pair: ColorPair, pattern: Regex) {
        self.push(Rule::new(pair, pattern));
    }

    /// Compile `pattern` and append it as a rule.
    ///
    /// On a syntax error the existing rules are left unchanged.
    pub fn add_pattern(&mut self, pair: ColorPair, pattern: &str) -> Result<()> {
        let rule = Rule::compile(pair, pattern)?;
        self.push(rule);
        Ok(())
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        debug!(
            "rule {}: /{}/ -> {}",
            self.rules.len() + 1,
            rule.pattern.as_str(),
            rule.pair
        );
        self.rules.push(rule);
    }

    /// Remove every rule.
    pub fn flush_rules(&mut self) {
        if !self.rules.is_empty() {
            debug!("flushing {} rules", self.rules.len());
        }
        self.rules.clear();
    }

    /// The rules, lowest priority first.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Resolve which rule owns each byte of `buf`.
    ///
    /// Entry `i` is `0` when no rule matched byte `i`, otherwise the
    /// 1-based index of the last added rule whose match covers it.
    ///
    /// # Example
    ///
    /// ```
    /// use hue_ansi::ColorPair;
    /// use hue_writer::RuleWriter;
    ///
    /// let mut writer = RuleWriter::new(std::io::sink());
    /// writer.add_pattern(ColorPair::default(), "abcde").unwrap();
    /// writer.add_pattern(ColorPair::default(), "defgh").unwrap();
    /// assert_eq!(
    ///     writer.color_map(b"abcdefghij"),
    ///     vec![1, 1, 1, 2, 2, 2, 2, 2, 0, 0]
    /// );
    /// ```
    pub fn color_map(&self, buf: &[u8]) -> Vec<usize> {
        let mut color_of = vec![NO_RULE; buf.len()];
        for (i, rule) in self.rules.iter().enumerate() {
            for m in rule.pattern.find_iter(buf) {
                color_of[m.range()].fill(i + 1);
            }
        }
        color_of
    }

    /// Colorize `buf` by the rules and write it to the sink.
    ///
    /// Returns the number of bytes the sink accepted, escape codes
    /// included. On a sink failure the write stops and the error carries
    /// the count written so far; nothing already written is undone.
    pub fn write_colored(&mut self, buf: &[u8]) -> Result<usize> {
        let color_of = self.color_map(buf);
        let escapes: Vec<String> = std::iter::once(RESET.to_string())
            .chain(self.rules.iter().map(|r| r.pair.enter_sequence()))
            .collect();

        let mut sink = Counted::new(&mut self.writer);
        let mut active = NO_RULE;
        let mut run_start = 0;
        let mut transitions = 0;

        for (i, &color) in color_of.iter().enumerate() {
            if color != active {
                sink.put(&buf[run_start..i])?;
                sink.put(escapes[color].as_bytes())?;
                active = color;
                run_start = i;
                transitions += 1;
            }
        }
        sink.put(&buf[run_start..])?;
        sink.put(RESET.as_bytes())?;

        trace!(
            "rule write: {} input bytes, {} output bytes, {} transitions, {} rules",
            buf.len(),
            sink.written(),
            transitions,
            self.rules.len()
        );
        Ok(sink.written())
    }

    /// [`write_colored`](Self::write_colored) for text.
    pub fn write_str_colored(&mut self, s: &str) -> Result<usize> {
        self.write_colored(s.as_bytes())
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer.
    ///
    /// Bytes written here bypass colorization.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume this writer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reports `buf.len()` on success, as `Write` requires. Each call is
/// colorized on its own, so `write!` with several arguments may split a
/// match.
impl<W: Write> Write for RuleWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_colored(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
