// Plot risk assessment CLI
//
// Purpose: Assess one plot against the species catalog and print the dashboard JSON
// Usage: PLANTATION_DATE=2024-03-01 \
//        CONDITIONS='{"month":"March","temperatureCelsius":30,"humidityPercent":75}' \
//        cargo run --features cli --bin assess_plot
//
// CONDITIONS may also be piped on stdin.

use anyhow::Context;
use crop_risk_rust::{EngineConfig, RawConditions};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_risk_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env().context("Invalid engine configuration")?;
    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {:?}", config.catalog_path);
    tracing::info!("  MATCH_MODE: {:?}", config.match_mode);
    tracing::info!("  REFERENCE_DATE: {:?}", config.reference_date);

    let engine = config.build_engine().context("Failed to load species catalog")?;

    let plantation_date = std::env::var("PLANTATION_DATE")
        .context("PLANTATION_DATE must be set (YYYY-MM-DD)")?;

    let conditions_json = match std::env::var("CONDITIONS") {
        Ok(json) => json,
        Err(_) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read conditions from stdin")?;
            buf
        }
    };
    let raw: RawConditions = serde_json::from_str(&conditions_json)
        .context("CONDITIONS must be {month, temperatureCelsius, humidityPercent}")?;

    let result = engine
        .assess_raw(&plantation_date, &raw)
        .context("Assessment rejected input")?;

    tracing::info!(
        "Stage '{}': {} of {} species classified",
        result.stage,
        result.classified_count(),
        engine.catalog().len()
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
