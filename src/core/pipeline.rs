use crate::core::history::SearchHistory;
use crate::core::recommend::recommend;
use crate::core::units::convert_temperature;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    ClothingStyle, ForecastOutcome, Preferences, SearchRecord, TemperatureUnit, WeatherReport,
};
use crate::utils::error::{Result, WearcastError};
use crate::utils::validation::{validate_location, validate_required_field};
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub const PREFERENCES_FILE: &str = "preferences.json";
pub const HISTORY_FILE: &str = "history.json";
pub const FORECAST_FILE: &str = "forecast.json";

pub struct ForecastPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

/// Subset of the OpenWeather current-weather payload this tool reads.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    name: String,
    #[serde(default)]
    sys: ProviderSys,
    main: ProviderMain,
    weather: Vec<ProviderCondition>,
    #[serde(default)]
    wind: ProviderWind,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ProviderMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ProviderCondition {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderWind {
    #[serde(default)]
    speed: f64,
}

impl ProviderResponse {
    fn into_report(self) -> Result<WeatherReport> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WearcastError::ProcessingError {
                message: "Weather provider returned no condition data".to_string(),
            })?;

        Ok(WeatherReport {
            location: self.name,
            country: self.sys.country,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            conditions: condition.main,
            description: condition.description,
            icon: condition.icon,
            wind_speed: self.wind.speed,
        })
    }
}

/// Stored preferences, or the defaults when nothing has been saved yet.
pub async fn read_preferences<S: Storage>(storage: &S) -> Result<Preferences> {
    match storage.read_file(PREFERENCES_FILE).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(WearcastError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(Preferences::default())
        }
        Err(e) => Err(e),
    }
}

pub async fn write_preferences<S: Storage>(storage: &S, preferences: &Preferences) -> Result<()> {
    storage
        .write_file(PREFERENCES_FILE, &serde_json::to_vec_pretty(preferences)?)
        .await
}

pub async fn read_history<S: Storage>(storage: &S) -> Result<SearchHistory> {
    match storage.read_file(HISTORY_FILE).await {
        Ok(bytes) => SearchHistory::from_json(&bytes),
        Err(WearcastError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(SearchHistory::default())
        }
        Err(e) => Err(e),
    }
}

impl<S: Storage, C: ConfigProvider> ForecastPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_weather(&self, location: &str) -> Result<WeatherReport> {
        let key = self.config.api_key();
        let api_key = validate_required_field("api_key", &key)?;

        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self
            .client
            .get(self.config.api_endpoint())
            .query(&[("q", location), ("appid", api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        match response.status() {
            StatusCode::NOT_FOUND => Err(WearcastError::LocationNotFound {
                location: location.to_string(),
            }),
            StatusCode::UNAUTHORIZED => Err(WearcastError::InvalidApiKey),
            status if !status.is_success() => Err(WearcastError::ProcessingError {
                message: format!("Weather provider returned HTTP {}", status),
            }),
            _ => {
                let payload: ProviderResponse = response.json().await?;
                payload.into_report()
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ForecastPipeline<S, C> {
    async fn extract(&self) -> Result<WeatherReport> {
        let location = self.config.location();
        validate_location(location)?;
        self.fetch_weather(location.trim()).await
    }

    async fn transform(&self, report: WeatherReport) -> Result<ForecastOutcome> {
        let preferences = read_preferences(&self.storage).await?;

        let style = match self.config.style_override() {
            Some(raw) => ClothingStyle::parse_lenient(raw),
            None => preferences.clothing_style,
        };

        let outfit = recommend(report.temperature, &report.conditions, style);

        let display_unit = preferences.temperature_unit;
        let display_temperature =
            convert_temperature(report.temperature, TemperatureUnit::Celsius, display_unit);

        Ok(ForecastOutcome {
            report,
            style,
            outfit,
            display_temperature,
            display_unit,
        })
    }

    async fn load(&self, outcome: ForecastOutcome) -> Result<String> {
        let mut history = read_history(&self.storage).await?;
        history.push(SearchRecord {
            location: outcome.report.location.clone(),
            temperature: outcome.report.temperature,
            conditions: outcome.report.conditions.clone(),
            recommendations: outcome.outfit.clone(),
            created_at: Utc::now(),
        });
        self.storage
            .write_file(HISTORY_FILE, &history.to_json()?)
            .await?;
        tracing::debug!("History now holds {} records", history.len());

        let payload = serde_json::to_vec_pretty(&outcome)?;
        self.storage.write_file(FORECAST_FILE, &payload).await?;

        Ok(format!("{}/{}", self.config.output_path(), FORECAST_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self::default()
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                WearcastError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        api_endpoint: String,
        api_key: Option<String>,
        location: String,
        style_override: Option<String>,
        output_path: String,
    }

    impl MockConfig {
        fn new(api_endpoint: String, location: &str) -> Self {
            Self {
                api_endpoint,
                api_key: Some("test-key".to_string()),
                location: location.to_string(),
                style_override: None,
                output_path: "test_output".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn api_key(&self) -> Option<String> {
            self.api_key.clone()
        }

        fn location(&self) -> &str {
            &self.location
        }

        fn style_override(&self) -> Option<&str> {
            self.style_override.as_deref()
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn history_limit(&self) -> usize {
            10
        }
    }

    fn provider_body(temp: f64, conditions: &str) -> serde_json::Value {
        serde_json::json!({
            "name": "Testville",
            "sys": {"country": "GB"},
            "main": {"temp": temp, "feels_like": temp - 1.0, "humidity": 60},
            "weather": [{"main": conditions, "description": conditions.to_lowercase(), "icon": "01d"}],
            "wind": {"speed": 3.2}
        })
    }

    #[tokio::test]
    async fn extract_projects_provider_fields() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/weather")
                .query_param("q", "Testville")
                .query_param("units", "metric");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(provider_body(21.3, "Clouds"));
        });

        let config = MockConfig::new(server.url("/weather"), "Testville");
        let pipeline = ForecastPipeline::new(MockStorage::new(), config);

        let report = pipeline.extract().await.unwrap();
        mock.assert();
        assert_eq!(report.location, "Testville");
        assert_eq!(report.country, "GB");
        assert_eq!(report.temperature, 21.3);
        assert_eq!(report.conditions, "Clouds");
        assert_eq!(report.humidity, 60);
    }

    #[tokio::test]
    async fn extract_maps_404_to_location_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/weather");
            then.status(404).json_body(serde_json::json!({"cod": "404"}));
        });

        let config = MockConfig::new(server.url("/weather"), "Nowhereville");
        let pipeline = ForecastPipeline::new(MockStorage::new(), config);

        match pipeline.extract().await {
            Err(WearcastError::LocationNotFound { location }) => {
                assert_eq!(location, "Nowhereville")
            }
            other => panic!("expected LocationNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn extract_maps_401_to_invalid_api_key() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/weather");
            then.status(401).json_body(serde_json::json!({"cod": 401}));
        });

        let config = MockConfig::new(server.url("/weather"), "Testville");
        let pipeline = ForecastPipeline::new(MockStorage::new(), config);

        assert!(matches!(
            pipeline.extract().await,
            Err(WearcastError::InvalidApiKey)
        ));
    }

    #[tokio::test]
    async fn extract_rejects_blank_location_before_calling_out() {
        let config = MockConfig::new("http://127.0.0.1:9".to_string(), "   ");
        let pipeline = ForecastPipeline::new(MockStorage::new(), config);

        assert!(matches!(
            pipeline.extract().await,
            Err(WearcastError::ValidationError { .. })
        ));
    }

    #[tokio::test]
    async fn transform_uses_stored_style_and_unit() {
        let storage = MockStorage::new();
        storage
            .put_file(
                PREFERENCES_FILE,
                br#"{"temperature_unit": "fahrenheit", "clothing_style": "formal"}"#,
            )
            .await;

        let config = MockConfig::new("http://unused".to_string(), "Testville");
        let pipeline = ForecastPipeline::new(storage, config);

        let report = WeatherReport {
            location: "Testville".to_string(),
            country: "GB".to_string(),
            temperature: 20.0,
            feels_like: 19.0,
            humidity: 55,
            conditions: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            wind_speed: 1.0,
        };

        let outcome = pipeline.transform(report).await.unwrap();
        assert_eq!(outcome.style, ClothingStyle::Formal);
        assert_eq!(
            outcome.outfit.base_outfit,
            vec!["Dress shirt", "Chinos or slacks", "Dress shoes"]
        );
        assert_eq!(outcome.display_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(outcome.display_temperature, 68.0);
    }

    #[tokio::test]
    async fn transform_defaults_when_nothing_stored() {
        let config = MockConfig::new("http://unused".to_string(), "Testville");
        let pipeline = ForecastPipeline::new(MockStorage::new(), config);

        let report = WeatherReport {
            location: "Testville".to_string(),
            country: String::new(),
            temperature: 30.0,
            feels_like: 31.0,
            humidity: 40,
            conditions: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            wind_speed: 0.5,
        };

        let outcome = pipeline.transform(report).await.unwrap();
        assert_eq!(outcome.style, ClothingStyle::Casual);
        assert_eq!(outcome.display_unit, TemperatureUnit::Celsius);
        assert_eq!(outcome.outfit.outerwear, vec!["None needed"]);
    }

    #[tokio::test]
    async fn load_appends_history_and_writes_forecast() {
        let storage = MockStorage::new();
        let config = MockConfig::new("http://unused".to_string(), "Testville");
        let pipeline = ForecastPipeline::new(storage.clone(), config);

        let report = WeatherReport {
            location: "Testville".to_string(),
            country: "GB".to_string(),
            temperature: 5.0,
            feels_like: 2.0,
            humidity: 80,
            conditions: "Snow".to_string(),
            description: "light snow".to_string(),
            icon: "13d".to_string(),
            wind_speed: 4.0,
        };
        let outcome = pipeline.transform(report).await.unwrap();

        let path = pipeline.load(outcome).await.unwrap();
        assert_eq!(path, "test_output/forecast.json");

        let history_bytes = storage.get_file(HISTORY_FILE).await.unwrap();
        let history = SearchHistory::from_json(&history_bytes).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.recent(1)[0].location, "Testville");
        assert!(history.recent(1)[0]
            .recommendations
            .outerwear
            .iter()
            .any(|i| i == "Snow boots"));

        assert!(storage.get_file(FORECAST_FILE).await.is_some());
    }
}
