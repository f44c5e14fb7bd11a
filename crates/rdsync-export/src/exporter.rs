//! Writes fetched deals pages to disk as indented JSON files.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use rdsync_client::DealsPage;

use crate::ExportError;

/// Result of one export call: the file that was written, or a no-op because
/// the page carried no records.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    SkippedEmpty,
}

/// Persists deals pages under a fixed output directory.
///
/// One file per non-empty page, named `oportunidades_{date}_p{page}.json`.
/// Writes are unconditional overwrites, so re-running a range is idempotent:
/// identical input produces byte-identical files. Filesystem failures are
/// fatal for the run and never retried, since a silent gap in the export is
/// worse than a loud stop.
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes the entire original page body (not just the extracted records)
    /// as 4-space-indented UTF-8 JSON, non-ASCII characters preserved
    /// literally. Creates the output directory and parents on first use.
    ///
    /// An empty extracted record list skips the write and reports
    /// [`ExportOutcome::SkippedEmpty`].
    ///
    /// # Errors
    ///
    /// - [`ExportError::Io`] — directory creation or file write failure.
    /// - [`ExportError::Serialize`] — the body cannot be re-serialized.
    pub fn export(
        &self,
        page: &DealsPage,
        date: NaiveDate,
        page_number: u32,
    ) -> Result<ExportOutcome, ExportError> {
        if page.is_empty() {
            return Ok(ExportOutcome::SkippedEmpty);
        }

        let bytes = to_indented_json(page.body())?;

        fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::Io {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let path = self.export_path(date, page_number);
        fs::write(&path, bytes).map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(ExportOutcome::Written(path))
    }

    /// Deterministic target path for a (date, page) pair.
    fn export_path(&self, date: NaiveDate, page_number: u32) -> PathBuf {
        self.output_dir.join(format!(
            "oportunidades_{}_p{page_number}.json",
            date.format("%Y-%m-%d")
        ))
    }
}

/// Serializes `value` with 4-space indentation. `serde_json` writes UTF-8 and
/// leaves non-ASCII characters unescaped, matching the on-disk format the
/// downstream consumers expect.
fn to_indented_json(value: &serde_json::Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
