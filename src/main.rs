use clap::Parser;
use wearcast::core::pipeline::{read_history, read_preferences, write_preferences};
use wearcast::core::{ConfigProvider, Storage};
use wearcast::utils::{logger, validation::Validate};
use wearcast::{
    CliConfig, FileConfig, ForecastEngine, ForecastPipeline, ForecastRun, LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting wearcast CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ wearcast failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> wearcast::Result<()> {
    let storage = LocalStorage::new(cli.output_path.clone());

    if cli.set_style.is_some() || cli.set_units.is_some() {
        update_preferences(&storage, cli).await?;
    }

    if cli.show_history {
        show_history(&storage, cli.history_limit()).await?;
    }

    if cli.export_history {
        export_history(&storage).await?;
    }

    if let Some(config_path) = &cli.config {
        let mut config = FileConfig::from_file(config_path)?;
        if let Some(location) = &cli.location {
            config.override_location(location.clone());
        }
        config.validate()?;

        let storage = LocalStorage::new(config.output_path().to_string());
        run_forecast(storage, config, cli.monitor).await?;
    } else if cli.location.is_some() {
        run_forecast(storage, cli.clone(), cli.monitor).await?;
    }

    Ok(())
}

async fn run_forecast<S, C>(storage: S, config: C, monitor: bool) -> wearcast::Result<()>
where
    S: Storage,
    C: ConfigProvider,
{
    let pipeline = ForecastPipeline::new(storage, config);
    let engine = ForecastEngine::new_with_monitoring(pipeline, monitor);
    let run = engine.run().await?;
    print_forecast(&run);
    Ok(())
}

fn print_forecast(run: &ForecastRun) {
    let outcome = &run.outcome;
    let report = &outcome.report;

    let place = if report.country.is_empty() {
        report.location.clone()
    } else {
        format!("{}, {}", report.location, report.country)
    };

    println!(
        "✅ {}: {:.1}{} ({})",
        place,
        outcome.display_temperature,
        outcome.display_unit.symbol(),
        report.description
    );
    println!("🧥 {}", outcome.outfit.recommendation);
    println!("   Base outfit: {}", outcome.outfit.base_outfit.join(", "));
    println!("   Outerwear:   {}", outcome.outfit.outerwear.join(", "));
    println!("   Accessories: {}", outcome.outfit.accessories.join(", "));
    println!("📁 Output saved to: {}", run.output_path);
}

async fn update_preferences(storage: &LocalStorage, cli: &CliConfig) -> wearcast::Result<()> {
    let mut preferences = read_preferences(storage).await?;

    // Values were already strictly validated by CliConfig::validate.
    if let Some(style) = &cli.set_style {
        preferences.clothing_style = style.parse()?;
    }
    if let Some(units) = &cli.set_units {
        preferences.temperature_unit = units.parse()?;
    }

    write_preferences(storage, &preferences).await?;
    tracing::info!("Preferences updated");
    println!(
        "✅ Preferences updated: style = {}, units = {}",
        preferences.clothing_style, preferences.temperature_unit
    );
    Ok(())
}

async fn show_history(storage: &LocalStorage, limit: usize) -> wearcast::Result<()> {
    let history = read_history(storage).await?;

    if history.is_empty() {
        println!("No searches recorded yet");
        return Ok(());
    }

    println!("🕑 Recent searches:");
    for record in history.recent(limit) {
        println!(
            "  {}  {}  {:.1}°C  {}",
            record.created_at.format("%Y-%m-%d %H:%M UTC"),
            record.location,
            record.temperature,
            record.conditions
        );
    }
    Ok(())
}

async fn export_history(storage: &LocalStorage) -> wearcast::Result<()> {
    let history = read_history(storage).await?;
    let csv = history.to_csv()?;
    storage.write_file("history.csv", csv.as_bytes()).await?;
    println!("📁 History exported to history.csv");
    Ok(())
}
