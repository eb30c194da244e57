use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::storage::DEFAULT_OUTPUT_FILE;

pub const DEFAULT_INPUT_FILE: &str = "data.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Run configuration.
///
/// Every field is optional; command-line flags take precedence.
///
/// Example YAML:
/// ```yaml
/// input: rosters/carers.csv
/// output: rosters/sorted_carers.csv
/// log_level: warn
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Carer roster to rank (default: data.csv)
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Where the ranked roster is written (default: sorted_carers.csv)
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// `tracing` filter directive, e.g. "info" or "carer_rank=debug"
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
