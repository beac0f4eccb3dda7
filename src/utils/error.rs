use thiserror::Error;

#[derive(Error, Debug)]
pub enum WearcastError {
    #[error("Weather API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Location not found: {location}")]
    LocationNotFound { location: String },

    #[error("Weather provider rejected the API key")]
    InvalidApiKey,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: \"{value}\" ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl WearcastError {
    /// Exit code for the CLI: 2 for configuration mistakes the user can fix
    /// locally, 3 for upstream/API failures, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ValidationError { .. } => 2,
            Self::ApiError(_) | Self::LocationNotFound { .. } | Self::InvalidApiKey => 3,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check network connectivity and the weather API endpoint",
            Self::LocationNotFound { .. } => "Check the spelling of the location name",
            Self::InvalidApiKey => {
                "Set a valid OpenWeather key via --api-key or the OPENWEATHER_API_KEY variable"
            }
            Self::CsvError(_) => "Check that the history file is not corrupted",
            Self::IoError(_) => "Check file permissions and that the output path is writable",
            Self::SerializationError(_) => "Check that stored JSON files are not corrupted",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the command-line flags or config file",
            Self::ProcessingError { .. } => "The weather provider returned an unexpected payload",
            Self::ValidationError { .. } => "Review the provided input values",
        }
    }
}

pub type Result<T> = std::result::Result<T, WearcastError>;
