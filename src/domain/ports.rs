use crate::domain::model::{ForecastOutcome, WeatherReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<String>;
    fn location(&self) -> &str;
    fn style_override(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn history_limit(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<WeatherReport>;
    async fn transform(&self, report: WeatherReport) -> Result<ForecastOutcome>;
    async fn load(&self, outcome: ForecastOutcome) -> Result<String>;
}
