//! Single-color stream writer.

use std::io::{self, Write};

use hue_ansi::encode_bytes;
use hue_core::Result;
use log::trace;

use crate::hue::Hue;
use crate::sink::Counted;

/// Colors everything written through it with one [`Hue`].
///
/// Each write wraps the whole buffer in one enter/reset pair.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use hue_ansi::Color;
/// use hue_writer::{Hue, SolidWriter};
///
/// let mut writer = SolidWriter::new(Vec::new(), Hue::new(Color::Green, Color::Default));
/// writer.write_all(b"ok").unwrap();
/// assert_eq!(writer.get_ref(), b"\x1b[32;49mok\x1b[0m");
/// ```
#[derive(Debug)]
pub struct SolidWriter<W: Write> {
    writer: W,
    hue: Hue,
}

impl<W: Write> SolidWriter<W> {
    /// Bind `hue` to `writer`.
    pub fn new(writer: W, hue: Hue) -> Self {
        Self { writer, hue }
    }

    /// Swap the hue used by subsequent writes.
    pub fn set_hue(&mut self, hue: Hue) {
        self.hue = hue;
    }

    /// The current hue.
    pub fn hue(&self) -> Hue {
        self.hue
    }

    /// Colorize `buf` and write it to the sink.
    ///
    /// Returns the number of bytes the sink accepted, which counts the
    /// escape codes too. Use the [`Write`] impl when the caller expects
    /// `buf.len()` back.
    pub fn write_colored(&mut self, buf: &[u8]) -> Result<usize> {
        let encoded = encode_bytes(&self.hue.pair(), buf);
        let mut sink = Counted::new(&mut self.writer);
        sink.put(&encoded)?;
        trace!(
            "solid write: {} input bytes, {} output bytes ({})",
            buf.len(),
            sink.written(),
            self.hue.pair()
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

/// Reports `buf.len()` on success, as `Write` requires.
impl<W: Write> Write for SolidWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_colored(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
