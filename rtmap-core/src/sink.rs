//! # Output Sinks
//!
//! Destinations for the mapper's `key:value` records. Stdout is the default;
//! a file sink is available when the caller wants the mapping persisted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Destination for one mapping record per line.
pub trait OutputSink {
  /// Write a single record followed by a newline.
  fn write_line(&mut self, line: &str) -> Result<()>;

  /// Flush any buffered records. Called once after the last record.
  fn flush(&mut self) -> Result<()> {
    Ok(())
  }
}

/// Writes records to standard output.
#[derive(Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
  fn write_line(&mut self, line: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("Failed to write to stdout")
  }
}

/// Writes records to a file, truncating any existing content.
pub struct FileSink {
  writer: BufWriter<File>,
}

impl FileSink {
  /// Create a sink writing to `path`.
  pub fn create(path: &Path) -> Result<Self> {
    let file = File::create(path).with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(Self {
      writer: BufWriter::new(file),
    })
  }
}

impl OutputSink for FileSink {
  fn write_line(&mut self, line: &str) -> Result<()> {
    writeln!(self.writer, "{line}").context("Failed to write to output file")
  }

  fn flush(&mut self) -> Result<()> {
    self.writer.flush().context("Failed to flush output file")
  }
}

/// Collects records in memory. Used by tests to assert on exact output.
#[derive(Default)]
pub struct VecSink {
  pub lines: Vec<String>,
}

impl OutputSink for VecSink {
  fn write_line(&mut self, line: &str) -> Result<()> {
    self.lines.push(line.to_string());
    Ok(())
  }
}
