pub mod bands;
pub mod conditions;
pub mod engine;
pub mod history;
pub mod pipeline;
pub mod recommend;
pub mod style;
pub mod units;

pub use crate::domain::model::{ForecastOutcome, OutfitResult, WeatherReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
