use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use copykit_io_batch::run_batch;

mod conf;
mod logger;

use conf::ConfBatch;

/// Manifest-driven batch file copier.
///
/// Reads a TOML configuration naming a source directory, a destination
/// directory, and a list of file pairs, copies the pairs in order, and writes
/// a plain-text run log. Exit codes: 0 run completed (missing source files
/// included), 1 run aborted by an I/O error or the log could not be written,
/// 2 configuration unreadable or invalid.
#[derive(Debug, Parser)]
#[command(name = "copykit", version)]
struct CliArgs {
    /// Path to the TOML batch configuration.
    #[arg(short, long, default_value = "copykit.toml")]
    config: PathBuf,

    /// Write the run log here instead of the configured path.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    let conf = match ConfBatch::from_file(&args.config) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Configuration load failed: {e:#}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = conf.validate() {
        tracing::error!("Configuration validation failed: {e:#}");
        return ExitCode::from(2);
    }

    let manifest = conf.to_manifest();
    tracing::debug!(
        "Running batch: {} -> {} ({} entries)",
        conf.batch.dir_source,
        conf.batch.dir_destination,
        manifest.len()
    );

    let report = match run_batch(&conf.batch.dir_source, &conf.batch.dir_destination, &manifest) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Manifest rejected: {e}");
            return ExitCode::from(2);
        }
    };

    let path_file_log = args
        .log_file
        .unwrap_or_else(|| PathBuf::from(conf.path_file_log()));
    if let Err(e) = report.write_to_file(&path_file_log) {
        tracing::error!("Failed to write log {} ({e})", path_file_log.display());
        return ExitCode::from(1);
    }

    tracing::info!("{}", report.format("[BATCH]"));
    tracing::info!("Log written to {}", path_file_log.display());

    if report.has_terminal_error() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
