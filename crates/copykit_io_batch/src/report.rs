//! Run-log models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Ordered run log plus aggregate counters for one `run_batch` call.
#[derive(Debug, Default, Clone)]
pub struct ReportBatch {
    /// Human-readable status lines, in the order they were produced.
    pub lines: Vec<String>,
    /// Number of manifest entries copied successfully.
    pub cnt_copied: u64,
    /// Number of manifest entries whose source file was absent.
    pub cnt_missing: u64,
    /// Message of the I/O failure that aborted the run, if any.
    pub error_terminal: Option<String>,
}

impl ReportBatch {
    /// Whether the run was cut short by an unexpected I/O failure.
    pub fn has_terminal_error(&self) -> bool {
        self.error_terminal.is_some()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_missing".to_string(), self.cnt_missing);
        dict_counts.insert("cnt_lines".to_string(), self.lines.len() as u64);
        dict_counts.insert(
            "cnt_errors".to_string(),
            u64::from(self.has_terminal_error()),
        );
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} copied={} missing={} lines={} errors={}",
            dict_counts["cnt_copied"],
            dict_counts["cnt_missing"],
            dict_counts["cnt_lines"],
            dict_counts["cnt_errors"]
        )
    }

    /// Full log body: lines joined by a single newline, no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Persist [`Self::to_text`] to `path_file_log`, replacing previous content.
    pub fn write_to_file<P: AsRef<Path>>(&self, path_file_log: P) -> io::Result<()> {
        fs::write(path_file_log, self.to_text())
    }
}

impl fmt::Display for ReportBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[BATCH]"))
    }
}

/// Mutable accumulator for the run log.
///
/// Each `note_*` method appends the corresponding log line(s) and keeps the
/// counters in step, so call-sites never format log text themselves.
#[derive(Debug, Default, Clone)]
pub struct ReportBatchBuilder {
    lines: Vec<String>,
    cnt_copied: u64,
    cnt_missing: u64,
    error_terminal: Option<String>,
}

impl ReportBatchBuilder {
    /// Record creation of the destination directory.
    pub fn note_dir_created(&mut self, path_dir_dst: &Path) {
        self.lines
            .push(format!("Created directory {}", path_dir_dst.display()));
    }

    /// Record one successful file copy.
    pub fn note_copied(&mut self, path_file_src: &Path, path_file_dst: &Path) {
        self.lines.push(format!(
            "Copied {} to {}",
            path_file_src.display(),
            path_file_dst.display()
        ));
        self.cnt_copied += 1;
    }

    /// Record one absent source file (non-fatal).
    pub fn note_missing(&mut self, path_file_src: &Path) {
        self.lines
            .push(format!("Source file not found: {}", path_file_src.display()));
        self.cnt_missing += 1;
    }

    /// Record the final destination directory listing.
    pub fn note_listing(&mut self, l_names: &[String]) {
        self.lines.push("Destination contents:".to_string());
        self.lines.push(format!("{l_names:?}"));
    }

    /// Record the I/O failure that aborts the remaining run.
    pub fn note_error_terminal(&mut self, message: String) {
        self.lines.push(format!("Error: {message}"));
        self.error_terminal = Some(message);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportBatch {
        ReportBatch {
            lines: self.lines,
            cnt_copied: self.cnt_copied,
            cnt_missing: self.cnt_missing,
            error_terminal: self.error_terminal,
        }
    }
}
