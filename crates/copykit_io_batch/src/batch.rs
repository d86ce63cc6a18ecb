//! Manifest processing and copy orchestration.

use std::fs;
use std::path::Path;

use crate::report::{ReportBatch, ReportBatchBuilder};
use crate::spec::{BatchPlanError, SpecBatchEntry};
use crate::util::{copy_file_with_metadata, list_directory_names, validate_manifest_name};

/// Copy a manifest of file pairs from `dir_source` into `dir_destination`.
///
/// This function performs:
/// 1. Manifest name validation (fails fast, nothing mutated).
/// 2. Destination directory creation when absent (logged once).
/// 3. Sequential per-entry copy; an absent source file is logged and skipped.
/// 4. Final sorted destination listing appended to the log.
///
/// Returns [`ReportBatch`] when the run completes. Unexpected I/O failures
/// (destination uncreatable, copy or listing failure) abort the remaining
/// steps but still return the report, with everything accumulated so far plus
/// one terminal `Error:` line. Returns [`BatchPlanError`] only for manifest
/// validation failures.
pub fn run_batch<P, Q>(
    dir_source: P,
    dir_destination: Q,
    manifest: &[SpecBatchEntry],
) -> Result<ReportBatch, BatchPlanError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref();
    let path_dir_dst = dir_destination.as_ref();

    for spec_entry in manifest {
        for name in [&spec_entry.name_file_src, &spec_entry.name_file_dst] {
            if let Err(message) = validate_manifest_name(name) {
                return Err(BatchPlanError::InvalidEntryName {
                    name: name.clone(),
                    message,
                });
            }
        }
    }

    let mut builder_report = ReportBatchBuilder::default();

    if !path_dir_dst.exists() {
        if let Err(e) = fs::create_dir_all(path_dir_dst) {
            builder_report.note_error_terminal(format!(
                "Failed to create directory {} ({e})",
                path_dir_dst.display()
            ));
            return Ok(builder_report.build());
        }
        builder_report.note_dir_created(path_dir_dst);
    }

    for spec_entry in manifest {
        let path_file_src = path_dir_src.join(&spec_entry.name_file_src);
        let path_file_dst = path_dir_dst.join(&spec_entry.name_file_dst);

        if !path_file_src.exists() {
            builder_report.note_missing(&path_file_src);
            continue;
        }

        if let Err(e) = copy_file_with_metadata(&path_file_src, &path_file_dst) {
            builder_report.note_error_terminal(format!(
                "Failed to copy {} to {} ({e})",
                path_file_src.display(),
                path_file_dst.display()
            ));
            return Ok(builder_report.build());
        }
        builder_report.note_copied(&path_file_src, &path_file_dst);
    }

    match list_directory_names(path_dir_dst) {
        Ok(l_names) => builder_report.note_listing(&l_names),
        Err(e) => builder_report.note_error_terminal(format!(
            "Failed to read directory {} ({e})",
            path_dir_dst.display()
        )),
    }

    Ok(builder_report.build())
}
