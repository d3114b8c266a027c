//! Counted writes to an output sink.

use std::io::{self, Write};

use hue_core::{HueError, Result};

/// A sink plus the number of bytes it has accepted during one colorized
/// write.
pub(crate) struct Counted<'a, W: Write> {
    writer: &'a mut W,
    written: usize,
}

impl<'a, W: Write> Counted<'a, W> {
    pub(crate) fn new(writer: &'a mut W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write all of `chunk`, stopping at the first sink error.
    ///
    /// Unlike `write_all`, a failure still reports how many bytes the sink
    /// took before it gave up, and `Interrupted` is returned like any other
    /// error instead of being retried.
    pub(crate) fn put(&mut self, mut chunk: &[u8]) -> Result<()> {
        while !chunk.is_empty() {
            match self.writer.write(chunk) {
                Ok(0) => {
                    return Err(self.fail(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted zero bytes",
                    )))
                }
                Ok(n) => {
                    self.written += n;
                    chunk = &chunk[n..];
                }
                Err(e) => return Err(self.fail(e)),
            }
        }
        Ok(())
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }

    fn fail(&self, source: io::Error) -> HueError {
        HueError::Sink {
            written: self.written,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts at most `limit` bytes per call, then fails once `budget` runs out.
    struct Trickle {
        out: Vec<u8>,
        limit: usize,
        budget: usize,
    }

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(self.limit).min(self.budget);
            self.out.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_put_handles_short_writes() {
        let mut sink = Trickle {
            out: Vec::new(),
            limit: 2,
            budget: usize::MAX,
        };
        let mut counted = Counted::new(&mut sink);
        counted.put(b"hello").unwrap();
        assert_eq!(counted.written(), 5);
        assert_eq!(sink.out, b"hello");
    }

    #[test]
    fn test_put_reports_partial_count() {
        let mut sink = Trickle {
            out: Vec::new(),
            limit: 4,
            budget: 3,
        };
        let mut counted = Counted::new(&mut sink);
        let err = counted.put(b"hello").unwrap_err();
        assert_eq!(err.written(), 3);
        assert!(matches!(err, HueError::Sink { .. }));
    }

    #[test]
    fn test_put_zero_write() {
        let mut sink = Trickle {
            out: Vec::new(),
            limit: 0,
            budget: usize::MAX,
        };
        let err = Counted::new(&mut sink).put(b"x").unwrap_err();
        assert_eq!(io::Error::from(err).kind(), io::ErrorKind::WriteZero);
    }

    /// Fails with `Interrupted` on its first call.
    struct Interrupting;

    impl Write for Interrupting {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::Interrupted))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_put_interrupted_is_not_retried() {
        let mut sink = Interrupting;
        let err = Counted::new(&mut sink).put(b"x").unwrap_err();
        match err {
            HueError::Sink { written, ref source } => {
                assert_eq!(written, 0);
                assert_eq!(source.kind(), io::ErrorKind::Interrupted);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
