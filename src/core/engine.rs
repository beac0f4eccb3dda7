use crate::core::Pipeline;
use crate::domain::model::ForecastOutcome;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Result of one full pipeline run.
#[derive(Debug, Clone)]
pub struct ForecastRun {
    pub outcome: ForecastOutcome,
    pub output_path: String,
}

pub struct ForecastEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ForecastEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ForecastRun> {
        tracing::info!("Starting forecast pipeline");

        let report = self.pipeline.extract().await?;
        tracing::info!(
            "Current weather for {}: {:.1}°C, {}",
            report.location,
            report.temperature,
            report.conditions
        );
        self.monitor.log_stats("Extract");

        let outcome = self.pipeline.transform(report).await?;
        tracing::info!("Generated {} outfit recommendation", outcome.style);
        self.monitor.log_stats("Transform");

        let run_outcome = outcome.clone();
        let output_path = self.pipeline.load(outcome).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(ForecastRun {
            outcome: run_outcome,
            output_path,
        })
    }
}
