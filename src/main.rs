//! hue - colorize terminal text.
//!
//! This binary provides the CLI interface to the hue libraries, painting
//! input from files or stdin with a solid color or with regex rules.

mod cli;
mod painter;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use hue_config::Config;
use hue_core::Result;
use painter::Painter;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("hue v{}", env!("CARGO_PKG_VERSION"));

    // Handle --paths flag
    let result = if cli.show_paths {
        cli::show_paths()
    } else {
        run(&cli)
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Map a `--loglevel` value to a filter, defaulting to warn.
fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config with {} rules", config.rules.len());

    let table = config.color_table()?;
    let stdout = io::stdout();
    let mut painter = Painter::build(cli, &config, &table, stdout.lock())?;

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        paint_lines(io::stdin().lock(), &mut painter)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let file = File::open(path)?;
            paint_lines(BufReader::new(file), &mut painter)?;
        }
    }

    painter.flush()
}

/// Paint every line from `reader`, byte for byte.
fn paint_lines<R: BufRead, W: Write>(mut reader: R, painter: &mut Painter<W>) -> Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        trace!("Input line: {} bytes", line.len());
        painter.paint_bytes(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level("bogus"), LevelFilter::Warn);
    }

    fn build_painter(args: &[&str]) -> Painter<Vec<u8>> {
        let cli = Cli::parse_from(args);
        let config = Config::parse("").unwrap();
        let table = config.color_table().unwrap();
        Painter::build(&cli, &config, &table, Vec::new()).unwrap()
    }

    #[test]
    fn test_paint_lines() {
        let mut painter = build_painter(&["hue", "-r", "Red=b"]);
        paint_lines(io::Cursor::new("ab\nb\n"), &mut painter).unwrap();

        let out = String::from_utf8(painter.into_inner()).unwrap();
        assert_eq!(
            out,
            "a\x1b[31;49mb\x1b[0m\n\x1b[31;49mb\x1b[0m\n"
        );
    }

    #[test]
    fn test_paint_lines_non_utf8_crlf_and_unterminated() {
        let mut painter = build_painter(&["hue", "-r", "Red=b"]);
        paint_lines(io::Cursor::new(&b"a\xffb\r\nab"[..]), &mut painter).unwrap();

        assert_eq!(
            painter.into_inner(),
            b"a\xff\x1b[31;49mb\x1b[0m\r\na\x1b[31;49mb\x1b[0m".to_vec()
        );
    }

    #[test]
    fn test_paint_lines_solid_keeps_endings() {
        let mut painter = build_painter(&["hue"]);
        paint_lines(io::Cursor::new("x\r\ny"), &mut painter).unwrap();

        let out = String::from_utf8(painter.into_inner()).unwrap();
        assert_eq!(out, "\x1b[39;49mx\x1b[0m\r\n\x1b[39;49my\x1b[0m");
    }
}
