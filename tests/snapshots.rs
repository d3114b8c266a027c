//! Snapshot tests for hue output.
//!
//! Escape codes are rendered as `{params}` so the snapshots stay readable:
//! `\x1b[32;49m` becomes `{32;49}` and the reset becomes `{0}`.

use std::sync::LazyLock;

use hue_ansi::{Color, ColorPair};
use hue_writer::{Hue, RuleWriter, SolidWriter};
use regex::Regex;

static SGR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[([0-9;]*)m").unwrap());

/// Make escape codes visible.
fn show(bytes: &[u8]) -> String {
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    SGR.replace_all(&text, "{$1}").to_string()
}

/// Render `input` through a rule writer.
fn render(rules: &[(Color, Color, &str)], input: &str) -> String {
    let mut writer = RuleWriter::new(Vec::new());
    for (fg, bg, pattern) in rules {
        writer
            .add_pattern(ColorPair::new(*fg, *bg), pattern)
            .unwrap();
    }
    writer.write_str_colored(input).unwrap();
    show(writer.get_ref())
}

// =============================================================================
// Rule Writer Snapshots
// =============================================================================

#[test]
fn test_snapshot_no_rules() {
    insta::assert_snapshot!(render(&[], "plain"), @"plain{0}");
}

#[test]
fn test_snapshot_each_match() {
    let output = render(&[(Color::Green, Color::Default, "X")], "aXbXc");
    insta::assert_snapshot!(output, @"a{32;49}X{0}b{32;49}X{0}c{0}");
}

#[test]
fn test_snapshot_log_line() {
    let rules = [
        (Color::Cyan, Color::Default, r"\d{2}:\d{2}:\d{2}"),
        (Color::Brown, Color::Default, "WARN"),
        (Color::Red, Color::White, "ERROR"),
    ];
    let output = render(&rules, "12:00:01 WARN disk 91% ERROR write failed");
    insta::assert_snapshot!(
        output,
        @"{36;49}12:00:01{0} {33;49}WARN{0} disk 91% {31;47}ERROR{0} write failed{0}"
    );
}

#[test]
fn test_snapshot_nested_override() {
    let rules = [
        (Color::Green, Color::Default, "[a-z]+"),
        (Color::Blue, Color::Default, "o"),
    ];
    let output = render(&rules, "hello world");
    insta::assert_snapshot!(
        output,
        @"{32;49}hell{34;49}o{0} {32;49}w{34;49}o{32;49}rld{0}"
    );
}

// =============================================================================
// Solid Output Snapshots
// =============================================================================

#[test]
fn test_snapshot_hue_sprint() {
    let hue = Hue::new(Color::Red, Color::White);
    let output = show(hue.sprint("Red string").as_str().as_bytes());
    insta::assert_snapshot!(output, @"{31;47}Red string{0}");
}

#[test]
fn test_snapshot_solid_writer_set_hue() {
    let mut writer = SolidWriter::new(Vec::new(), Hue::new(Color::Green, Color::Default));
    writer.write_str_colored("green").unwrap();
    writer.set_hue(Hue::new(Color::Blue, Color::Default));
    writer.write_str_colored("blue").unwrap();
    insta::assert_snapshot!(show(writer.get_ref()), @"{32;49}green{0}{34;49}blue{0}");
}
