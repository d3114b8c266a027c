//! Rules example: highlight log lines read from stdin.
//!
//! Run with: `cat app.log | cargo run --example rules`

use std::io::{self, BufRead, Write};

use hue_ansi::{Color, ColorPair};
use hue_writer::RuleWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut writer = RuleWriter::new(stdout.lock());

    // Later rules win where patterns overlap
    writer.add_pattern(
        ColorPair::new(Color::Cyan, Color::Default),
        r"\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}",
    )?;
    writer.add_pattern(ColorPair::new(Color::Green, Color::Default), r"\bINFO\b")?;
    writer.add_pattern(ColorPair::new(Color::Brown, Color::Default), r"\bWARN(ING)?\b")?;
    writer.add_pattern(ColorPair::new(Color::White, Color::Red), r"\b(ERROR|FATAL)\b")?;

    for line in io::stdin().lock().lines() {
        writer.write_str_colored(&line?)?;
        writer.get_mut().write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
