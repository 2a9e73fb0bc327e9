//! io.rs
//! Input sources and output sinks for the command layer.
//!
//! Output has two explicit paths:
//! - `write_text`: envelope text. Stream sinks get a trailing newline when the
//!   text lacks one; files get the text verbatim.
//! - `write_bytes`: decoded content. Every sink gets the exact bytes.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::EnvelopeError;

/// Path argument meaning stdin or stdout.
pub const STD_STREAM_ARG: &str = "-";

/// Canonical input abstraction
#[derive(Debug)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Memory(Vec<u8>),
}

impl InputSource {
    /// `-` selects stdin; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STD_STREAM_ARG {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn read_all(self) -> Result<Vec<u8>, EnvelopeError> {
        let data = match self {
            InputSource::File(p) => {
                debug!(path = %p.display(), "reading input file");
                fs::read(p)?
            }
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                buf
            }
            InputSource::Memory(b) => b,
        };
        Ok(data)
    }

    /// Read envelope text. Non-UTF-8 input is an I/O `InvalidData` error.
    pub fn read_text(self) -> Result<String, EnvelopeError> {
        let bytes = self.read_all()?;
        String::from_utf8(bytes)
            .map_err(|e| EnvelopeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Canonical output abstraction
#[derive(Debug)]
pub enum OutputSink {
    File(PathBuf),
    Stdout,
    /// Captures exactly what stdout would receive.
    Memory(Vec<u8>),
}

impl OutputSink {
    /// Absent or `-` selects stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(STD_STREAM_ARG) => OutputSink::Stdout,
            Some(path) => OutputSink::File(PathBuf::from(path)),
        }
    }

    pub fn write_text(&mut self, text: &str) -> Result<(), EnvelopeError> {
        match self {
            OutputSink::File(p) => write_file(p, text.as_bytes()),
            OutputSink::Stdout => write_terminated(&mut io::stdout().lock(), text),
            OutputSink::Memory(buf) => write_terminated(buf, text),
        }
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), EnvelopeError> {
        match self {
            OutputSink::File(p) => write_file(p, data),
            OutputSink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)?;
                out.flush()?;
                Ok(())
            }
            OutputSink::Memory(buf) => {
                buf.extend_from_slice(data);
                Ok(())
            }
        }
    }

    /// Captured bytes of a `Memory` sink.
    pub fn captured(&self) -> Option<&[u8]> {
        match self {
            OutputSink::Memory(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), EnvelopeError> {
    debug!(path = %path.display(), len = data.len(), "writing output file");
    fs::write(path, data)?;
    Ok(())
}

fn write_terminated<W: Write>(w: &mut W, text: &str) -> Result<(), EnvelopeError> {
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}
