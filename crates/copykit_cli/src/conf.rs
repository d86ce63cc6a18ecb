//! TOML batch configuration: directories, log path, and the file manifest.

use std::path::Path;

use anyhow::{Context, Result, bail};
use copykit_io_batch::SpecBatchEntry;
use serde::{Deserialize, Serialize};

/// Log file written when the configuration does not name one.
pub const C_PATH_FILE_LOG_DEFAULT: &str = "copy_log.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfBatch {
    pub batch: BatchSectionConf,
    pub files: Vec<FilePairConf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSectionConf {
    pub dir_source: String,
    pub dir_destination: String,
    pub path_file_log: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePairConf {
    pub name_src: String,
    pub name_dst: String,
}

impl ConfBatch {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read configuration {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        toml::from_str(&processed_content).context("TOML parsing error")
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch.dir_source.trim().is_empty() {
            bail!("batch.dir_source must not be empty");
        }
        if self.batch.dir_destination.trim().is_empty() {
            bail!("batch.dir_destination must not be empty");
        }
        for pair in &self.files {
            if pair.name_src.trim().is_empty() || pair.name_dst.trim().is_empty() {
                bail!("files entries must carry non-empty name_src and name_dst");
            }
        }
        Ok(())
    }

    pub fn path_file_log(&self) -> &str {
        self.batch
            .path_file_log
            .as_deref()
            .unwrap_or(C_PATH_FILE_LOG_DEFAULT)
    }

    pub fn to_manifest(&self) -> Vec<SpecBatchEntry> {
        self.files
            .iter()
            .map(|pair| SpecBatchEntry::new(pair.name_src.clone(), pair.name_dst.clone()))
            .collect()
    }
}

/// Replace `${VAR}` references with environment values; unknown variables are
/// left in place.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
