// Configuration type definitions

use serde::Deserialize;

use crate::stats::StatKey;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration section
///
/// Stat names stay as strings here so that an unknown name in the config is
/// reported when the report is built rather than discarding the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_stats")]
    pub stats: Vec<String>,
    #[serde(default = "default_absent")]
    pub absent: String,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_stats() -> Vec<String> {
    [StatKey::Min, StatKey::Max, StatKey::Count, StatKey::Mean]
        .iter()
        .map(|key| key.as_str().to_string())
        .collect()
}

fn default_absent() -> String {
    "-".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            stats: default_stats(),
            absent: default_absent(),
            format: OutputFormat::Text,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
