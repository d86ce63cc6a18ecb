//! Batch manifest models and top-level error types.

use std::fmt;

////////////////////////////////////////////////////////////////////////////////
// #region ManifestModels

/// One manifest pair: a source filename mapped to a destination filename.
///
/// Entries are processed in listed order. Names are plain file names resolved
/// against the source/destination directories; they must stay a single path
/// component so a manifest can never write outside the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecBatchEntry {
    /// File name looked up under the source directory.
    pub name_file_src: String,
    /// File name written under the destination directory.
    pub name_file_dst: String,
}

impl SpecBatchEntry {
    /// Build an entry from a `(source, destination)` name pair.
    pub fn new(name_file_src: impl Into<String>, name_file_dst: impl Into<String>) -> Self {
        Self {
            name_file_src: name_file_src.into(),
            name_file_dst: name_file_dst.into(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// "Top-level call failed" errors (manifest validation stage).
///
/// Runtime I/O failures never surface here; they are recorded inside
/// [`crate::report::ReportBatch`] so the accumulated log always survives.
#[derive(Debug)]
pub enum BatchPlanError {
    /// Manifest name is empty, absolute, or not a single path component.
    InvalidEntryName {
        /// Offending manifest name.
        name: String,
        /// Reason the name was rejected.
        message: String,
    },
}

impl fmt::Display for BatchPlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntryName { name, message } => {
                write!(f, "Invalid manifest entry name {name:?}: {message}")
            }
        }
    }
}

impl std::error::Error for BatchPlanError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
