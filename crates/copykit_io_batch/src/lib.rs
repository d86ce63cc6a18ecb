//! `copykit_io_batch` v1:
//! Rust-side manifest batch-copy engine.
//!
//! Architecture:
//! - `batch`  : manifest processing and copy orchestration
//! - `spec`   : manifest models and errors
//! - `report` : run-log model
//! - `util`   : shared helper functions

pub mod batch;
pub mod report;
pub mod spec;
mod util;

pub use batch::run_batch;
pub use report::{ReportBatch, ReportBatchBuilder};
pub use spec::{BatchPlanError, SpecBatchEntry};
