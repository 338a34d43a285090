//! Report file persistence
//!
//! Ordinary I/O glue: one function that writes the rendered report with its
//! entry headers to the chosen directory and returns the path.

use crate::report::{build_filename, ReportMetadata};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use types::score::Priority;

/// Write one report file and return its full path.
pub fn persist(
    report_text: &str,
    metadata: &ReportMetadata,
    priority: Priority,
    dir: &Path,
) -> io::Result<PathBuf> {
    let path = dir.join(build_filename(metadata, priority));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "Entry Name: {}", metadata.entry_name)?;
    writeln!(writer, "Entry ID: {}", metadata.entry_id)?;
    writeln!(writer)?;
    writer.write_all(report_text.as_bytes())?;
    writer.flush()?;
    Ok(path)
}
