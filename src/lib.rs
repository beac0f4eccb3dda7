pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::FileConfig};

pub use crate::core::engine::{ForecastEngine, ForecastRun};
pub use crate::core::pipeline::ForecastPipeline;
pub use crate::core::recommend::recommend;
pub use domain::model::{ClothingStyle, OutfitResult, Preferences, TemperatureUnit};
pub use utils::error::{Result, WearcastError};
