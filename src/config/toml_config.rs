use crate::config::{API_KEY_ENV, DEFAULT_API_ENDPOINT};
use crate::core::history::DEFAULT_HISTORY_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, WearcastError};
use crate::utils::validation::{
    validate_location, validate_non_empty_string, validate_path, validate_positive_number,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML-file-driven configuration, for running the same lookup repeatedly
/// without retyping flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    pub lookup: LookupConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    pub location: String,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            history_limit: default_history_limit(),
        }
    }
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WearcastError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| WearcastError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; names with no
    /// value stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// A `--location` flag beats the file's location.
    pub fn override_location(&mut self, location: String) {
        self.lookup.location = location;
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("provider.endpoint", &self.provider.endpoint)?;
        validate_path("output.path", &self.output.path)?;
        validate_positive_number("output.history_limit", self.output.history_limit, 1)?;
        validate_location(&self.lookup.location)?;

        if let Some(api_key) = &self.provider.api_key {
            validate_non_empty_string("provider.api_key", api_key)?;
        }

        Ok(())
    }
}

impl ConfigProvider for FileConfig {
    fn api_endpoint(&self) -> &str {
        &self.provider.endpoint
    }

    fn api_key(&self) -> Option<String> {
        self.provider
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
    }

    fn location(&self) -> &str {
        &self.lookup.location
    }

    fn style_override(&self) -> Option<&str> {
        self.lookup.style.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn history_limit(&self) -> usize {
        self.output.history_limit
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
