use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::WearcastError;

/// Current weather for a location, as projected from the provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub conditions: String,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
}

/// Structured outfit recommendation. `outerwear` holds the literal
/// "None needed" entry when no outerwear item applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitResult {
    pub base_outfit: Vec<String>,
    pub outerwear: Vec<String>,
    pub accessories: Vec<String>,
    pub recommendation: String,
}

pub const VALID_STYLES: &[&str] = &["casual", "formal", "sporty", "business", "outdoor"];

/// Clothing-style preference. Stored values deserialize leniently: anything
/// unrecognized reads as `Casual`. Strict parsing (`FromStr`) is used at the
/// preference-update boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingStyle {
    #[default]
    Casual,
    Formal,
    Sporty,
    Business,
    Outdoor,
}

impl ClothingStyle {
    /// Maps unknown values to `Casual` instead of rejecting them.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "formal" => Self::Formal,
            "sporty" => Self::Sporty,
            "business" => Self::Business,
            "outdoor" => Self::Outdoor,
            _ => Self::Casual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sporty => "sporty",
            Self::Business => "business",
            Self::Outdoor => "outdoor",
        }
    }
}

impl FromStr for ClothingStyle {
    type Err = WearcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Self::Casual),
            "formal" => Ok(Self::Formal),
            "sporty" => Ok(Self::Sporty),
            "business" => Ok(Self::Business),
            "outdoor" => Ok(Self::Outdoor),
            other => Err(WearcastError::InvalidConfigValueError {
                field: "clothing_style".to_string(),
                value: other.to_string(),
                reason: format!("Clothing style must be one of: {}", VALID_STYLES.join(", ")),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ClothingStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

impl fmt::Display for ClothingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = WearcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(WearcastError::InvalidConfigValueError {
                field: "temperature_unit".to_string(),
                value: other.to_string(),
                reason: "Temperature unit must be \"celsius\" or \"fahrenheit\"".to_string(),
            }),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => f.write_str("celsius"),
            Self::Fahrenheit => f.write_str("fahrenheit"),
        }
    }
}

/// Per-user settings, defaulting to celsius/casual when nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    #[serde(default)]
    pub clothing_style: ClothingStyle,
}

/// One recorded weather lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub location: String,
    pub temperature: f64,
    pub conditions: String,
    pub recommendations: OutfitResult,
    pub created_at: DateTime<Utc>,
}

/// Output of the transform stage: the fetched weather plus the generated
/// recommendation, with the temperature converted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOutcome {
    pub report: WeatherReport,
    pub style: ClothingStyle,
    pub outfit: OutfitResult,
    pub display_temperature: f64,
    pub display_unit: TemperatureUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_maps_unknown_style_to_casual() {
        assert_eq!(ClothingStyle::parse_lenient("formal"), ClothingStyle::Formal);
        assert_eq!(ClothingStyle::parse_lenient("FORMAL"), ClothingStyle::Formal);
        // Unrecognized values are accepted as casual rather than rejected.
        assert_eq!(ClothingStyle::parse_lenient("gothic"), ClothingStyle::Casual);
        assert_eq!(ClothingStyle::parse_lenient(""), ClothingStyle::Casual);
    }

    #[test]
    fn strict_parse_rejects_unknown_style() {
        assert!("business".parse::<ClothingStyle>().is_ok());
        assert!("gothic".parse::<ClothingStyle>().is_err());
    }

    #[test]
    fn preferences_default_to_celsius_casual() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(prefs.clothing_style, ClothingStyle::Casual);
    }

    #[test]
    fn stored_style_deserializes_leniently() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"clothing_style": "steampunk"}"#).unwrap();
        assert_eq!(prefs.clothing_style, ClothingStyle::Casual);
    }
}
