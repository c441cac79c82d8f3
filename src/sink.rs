// src/sink.rs
// =============================================================================
// Where discovered links end up.
//
// Output format: one absolute URL per line, in the order the links were
// found, no header and no deduplication. The same URL shows up once for
// every page that links to it.
// =============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SinkError;

/// A write-only destination for links.
pub trait LinkSink {
    fn write_link(&mut self, url: &str) -> Result<(), SinkError>;

    /// Pushes buffered links to the underlying storage
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Writes one link per line to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> LinkSink for WriterSink<W> {
    fn write_link(&mut self, url: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", url)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// The links file on disk.
pub type FileSink = WriterSink<BufWriter<File>>;

impl FileSink {
    // Creates (or truncates) the output file
    //
    // Failing here happens before any page is fetched, so the caller can
    // abort without having done any work.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = File::create(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(WriterSink::new(BufWriter::new(file)))
    }
}

// In-memory sink, handy for tests and for callers that want the links back
impl LinkSink for Vec<String> {
    fn write_link(&mut self, url: &str) -> Result<(), SinkError> {
        self.push(url.to_string());
        Ok(())
    }
}
