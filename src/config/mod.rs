pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::BackfillWindow;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "processed_mock_data.json";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mock-listings")]
#[command(about = "Generate a shuffled, timestamped mock dataset of classified-ad listings")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    /// JSON array of listings to use instead of the embedded dataset
    #[arg(long)]
    pub source: Option<String>,

    /// Seed for shuffling and timestamp backfill
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "30")]
    pub max_days: i64,

    #[arg(long, default_value = "23")]
    pub max_hours: i64,

    #[arg(long, default_value = "59")]
    pub max_minutes: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        let window = BackfillWindow::default();
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            source: None,
            seed: None,
            max_days: window.max_days,
            max_hours: window.max_hours,
            max_minutes: window.max_minutes,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn source_path(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn backfill_window(&self) -> BackfillWindow {
        BackfillWindow {
            max_days: self.max_days,
            max_hours: self.max_hours,
            max_minutes: self.max_minutes,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_optional_path("source", self.source.as_deref())?;
        validate_window(&self.backfill_window(), "")
    }
}

/// 檢查回填時間範圍，prefix 用於錯誤訊息中的欄位名稱
pub(crate) fn validate_window(window: &BackfillWindow, prefix: &str) -> Result<()> {
    validation::validate_range(&format!("{}max_days", prefix), window.max_days, 0, 3650)?;
    validation::validate_range(&format!("{}max_hours", prefix), window.max_hours, 0, 23)?;
    validation::validate_range(&format!("{}max_minutes", prefix), window.max_minutes, 0, 59)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_matches_defaults() {
        let config = CliConfig::parse_from(["mock-listings"]);

        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
        assert_eq!(config.source_path(), None);
        assert_eq!(config.seed(), None);
        assert_eq!(config.backfill_window(), BackfillWindow::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_overrides() {
        let config = CliConfig::parse_from([
            "mock-listings",
            "--output-path",
            "fixtures/listings.json",
            "--seed",
            "42",
            "--max-days",
            "7",
            "--verbose",
        ]);

        assert_eq!(config.output_path(), "fixtures/listings.json");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.backfill_window().max_days, 7);
        assert!(config.verbose);
    }

    #[test]
    fn test_out_of_range_window_is_rejected() {
        let config = CliConfig {
            max_minutes: 60,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
