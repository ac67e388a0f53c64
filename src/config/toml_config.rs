use crate::core::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://api.hh.ru/vacancies";
pub const DEFAULT_VACANCIES_FILE: &str = "data/my_vacancy.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// hh.ru region id; 1 is Moscow.
    pub area: u32,
    pub per_page: u32,
    pub order_by: String,
    pub only_with_salary: bool,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            area: 1,
            per_page: 100,
            order_by: "relevance".to_string(),
            only_with_salary: true,
            user_agent: concat!("hh-vacancies/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub vacancies_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            vacancies_file: DEFAULT_VACANCIES_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Used when the requested count cannot be parsed.
    pub default_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { default_count: 5 }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise falls back to the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("📁 Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            tracing::debug!("📁 {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // Expand ${VAR} before parsing
        let processed_content = Self::substitute_env_vars(content)?;

        // Missing sections and keys fall back to defaults
        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        // Search API
        validation::validate_url("api.endpoint", &self.api.endpoint)?;
        validation::validate_range("api.per_page", self.api.per_page, 1, 100)?;
        validation::validate_non_empty_string("api.order_by", &self.api.order_by)?;
        validation::validate_non_empty_string("api.user_agent", &self.api.user_agent)?;
        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_range("api.timeout_seconds", timeout, 1, u64::MAX)?;
        }

        // Vacancies file is always a JSON array
        validation::validate_path("storage.vacancies_file", &self.storage.vacancies_file)?;
        validation::validate_extension("storage.vacancies_file", &self.storage.vacancies_file, "json")?;

        validation::validate_positive_number("display.default_count", self.display.default_count, 1)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn area(&self) -> u32 {
        self.api.area
    }

    fn per_page(&self) -> u32 {
        self.api.per_page
    }

    fn order_by(&self) -> &str {
        &self.api.order_by
    }

    fn only_with_salary(&self) -> bool {
        self.api.only_with_salary
    }

    fn user_agent(&self) -> &str {
        &self.api.user_agent
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.api.timeout_seconds
    }

    fn vacancies_file(&self) -> &str {
        &self.storage.vacancies_file
    }

    fn default_count(&self) -> usize {
        self.display.default_count
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_hh_search() {
        let config = AppConfig::default();

        assert_eq!(config.api_endpoint(), "https://api.hh.ru/vacancies");
        assert_eq!(config.area(), 1);
        assert_eq!(config.per_page(), 100);
        assert_eq!(config.order_by(), "relevance");
        assert!(config.only_with_salary());
        assert_eq!(config.timeout_seconds(), None);
        assert_eq!(config.vacancies_file(), "data/my_vacancy.json");
        assert_eq!(config.default_count(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_content = r#"
[api]
area = 2
timeout_seconds = 15

[storage]
vacancies_file = "out/vacancies.json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.area(), 2);
        assert_eq!(config.timeout_seconds(), Some(15));
        assert_eq!(config.per_page(), 100);
        assert_eq!(config.vacancies_file(), "out/vacancies.json");
        assert_eq!(config.default_count(), 5);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HH_VACANCIES_TEST_AGENT", "my-agent/1.0 (me@example.com)");

        let toml_content = r#"
[api]
user_agent = "${HH_VACANCIES_TEST_AGENT}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.user_agent(), "my-agent/1.0 (me@example.com)");

        std::env::remove_var("HH_VACANCIES_TEST_AGENT");
    }

    #[test]
    fn test_config_validation() {
        let invalid_endpoint = AppConfig::from_toml_str("[api]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(invalid_endpoint.validate().is_err());

        let invalid_page = AppConfig::from_toml_str("[api]\nper_page = 500\n").unwrap();
        assert!(invalid_page.validate().is_err());

        let invalid_count = AppConfig::from_toml_str("[display]\ndefault_count = 0\n").unwrap();
        assert!(invalid_count.validate().is_err());

        let zero_timeout = AppConfig::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());

        let huge_timeout =
            AppConfig::from_toml_str("[api]\ntimeout_seconds = 9223372036854775807\n").unwrap();
        assert!(huge_timeout.validate().is_ok());

        let not_json = AppConfig::from_toml_str("[storage]\nvacancies_file = \"data/vacancies.csv\"\n").unwrap();
        assert!(not_json.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let result = AppConfig::from_toml_str("[api\nendpoint = 1");
        assert!(matches!(result, Err(AppError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\ndefault_count = 10\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_count(), 10);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig::load_or_default(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.per_page(), 100);
    }
}
