pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{ClothingStyle, TemperatureUnit};
#[cfg(feature = "cli")]
use crate::utils::error::{Result, WearcastError};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_location, validate_path, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wearcast")]
#[command(about = "Fetches current weather for a location and recommends what to wear")]
pub struct CliConfig {
    #[arg(long, help = "Location to look up, e.g. \"London\"")]
    pub location: Option<String>,

    #[arg(long, help = "Load settings from a TOML config file instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, help = "OpenWeather API key (falls back to OPENWEATHER_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(long, help = "One-shot clothing style override for this lookup")]
    pub style: Option<String>,

    #[arg(long, help = "Store a clothing style preference")]
    pub set_style: Option<String>,

    #[arg(long, help = "Store a temperature unit preference")]
    pub set_units: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "10")]
    pub history_limit: usize,

    #[arg(long, help = "Print recent search history and exit")]
    pub show_history: bool,

    #[arg(long, help = "Export search history as CSV into the output path")]
    pub export_history: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log CPU/memory stats per pipeline phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// True when the invocation asks for something beyond a weather lookup.
    pub fn has_auxiliary_action(&self) -> bool {
        self.set_style.is_some()
            || self.set_units.is_some()
            || self.show_history
            || self.export_history
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
    }

    fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    fn style_override(&self) -> Option<&str> {
        self.style.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn history_limit(&self) -> usize {
        self.history_limit
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("history_limit", self.history_limit, 1)?;

        if let Some(location) = &self.location {
            validate_location(location)?;
        }

        // Stored preferences are validated strictly; the one-shot --style
        // override is parsed leniently later, unknown values read as casual.
        if let Some(style) = &self.set_style {
            style.parse::<ClothingStyle>()?;
        }
        if let Some(units) = &self.set_units {
            units.parse::<TemperatureUnit>()?;
        }

        if self.location.is_none() && self.config.is_none() && !self.has_auxiliary_action() {
            return Err(WearcastError::MissingConfigError {
                field: "location".to_string(),
            });
        }

        Ok(())
    }
}
