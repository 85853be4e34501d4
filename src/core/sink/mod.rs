//=========================================================================
// Dump Sinks
//
// Explicit output capability for `dump`. The inspector never touches a
// global print stream; callers pass the sink that should receive lines.
//
// Implementations:
// - `Vec<String>`   collects lines in memory
// - `WriterSink`    any `io::Write` (stdout, files, buffers)
// - `LogSink`       forwards lines to the `log` facade
// - `ChannelSink`   sends lines to another thread (crossbeam)
//
//=========================================================================

//=== Submodules ==========================================================

mod channel;

//=== Standard Library Imports ============================================

use std::io::{self, Write};

//=== External Crates =====================================================

use log::Level;

//=== Internal Imports ====================================================

use crate::core::error::Result;

//=== Public API ==========================================================

pub use channel::ChannelSink;

//=== DumpSink ============================================================

/// Receives the lines produced by a dump, one call per line.
///
/// Lines never contain a trailing newline; sinks that need one add it.
pub trait DumpSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl DumpSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

impl<S: DumpSink + ?Sized> DumpSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

//=== WriterSink ==========================================================

/// Writes each line followed by `\n` to an [`io::Write`].
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes and returns the wrapped writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl WriterSink<io::Stdout> {
    /// Sink over the process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DumpSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

//=== LogSink =============================================================

/// Forwards each line to the `log` facade.
///
/// Defaults to `Level::Debug` under the `inspector` target.
#[derive(Debug, Clone)]
pub struct LogSink {
    level: Level,
    target: String,
}

impl LogSink {
    pub fn new(level: Level, target: impl Into<String>) -> Self {
        Self {
            level,
            target: target.into(),
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(Level::Debug, "inspector")
    }
}

impl DumpSink for LogSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        log::log!(target: self.target.as_str(), self.level, "{}", line);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_line("a: 1").unwrap();
        lines.write_line("b: ").unwrap();
        assert_eq!(lines, vec!["a: 1", "b: "]);
    }

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("x: 1").unwrap();
        sink.write_line("y: 2").unwrap();
        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "x: 1\ny: 2\n");
    }

    #[test]
    fn writer_sink_surfaces_io_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Broken);
        let err = sink.write_line("x").unwrap_err();
        assert!(matches!(err, crate::core::error::InspectError::Io(_)));
    }

    #[test]
    fn log_sink_accepts_lines_without_a_logger() {
        let mut sink = LogSink::default();
        assert!(sink.write_line("fps: 60.0").is_ok());
    }

    #[test]
    fn mutable_references_are_sinks() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut borrowed: &mut Vec<String> = &mut lines;
            DumpSink::write_line(&mut borrowed, "k: v").unwrap();
        }
        assert_eq!(lines.len(), 1);
    }
}
