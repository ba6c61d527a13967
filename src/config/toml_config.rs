use crate::config::{validate_window, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::domain::model::BackfillWindow;
use crate::utils::error::{MockDataError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    pub source: Option<SourceConfig>,
    pub generator: Option<GeneratorConfig>,
    pub backfill: Option<BackfillConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackfillConfig {
    pub max_days: Option<i64>,
    pub max_hours: Option<i64>,
    pub max_minutes: Option<i64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MockDataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MockDataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MockDataError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.generator.get_or_insert_with(GeneratorConfig::default).seed = Some(seed);
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn source_path(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.path.as_str())
    }

    fn seed(&self) -> Option<u64> {
        self.generator.as_ref().and_then(|g| g.seed)
    }

    fn backfill_window(&self) -> BackfillWindow {
        let defaults = BackfillWindow::default();
        match &self.backfill {
            Some(b) => BackfillWindow {
                max_days: b.max_days.unwrap_or(defaults.max_days),
                max_hours: b.max_hours.unwrap_or(defaults.max_hours),
                max_minutes: b.max_minutes.unwrap_or(defaults.max_minutes),
            },
            None => defaults,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output.path", self.output_path())?;
        validation::validate_optional_path("source.path", self.source_path())?;
        validate_window(&self.backfill_window(), "backfill.")
    }
}
