//! Products seed script - recreates the products table contents
//!
//! Run with:
//! ```
//! cargo run -p product-seed --bin seed
//! ```

use std::process::ExitCode;

use anyhow::Context;
use product_seed::config::SeedConfig;
use product_seed::db::SeedReport;
use tracing_subscriber::EnvFilter;

async fn seed() -> anyhow::Result<SeedReport> {
    let config = SeedConfig::from_env().context("loading seed configuration")?;
    let report = product_seed::run(&config)
        .await
        .context("initializing and seeding products")?;
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match seed().await {
        Ok(report) => {
            tracing::info!(
                "Products table created & {} generated rows inserted.",
                report.inserted
            );
            if let (Some(seed), Some(now)) = (report.seed, report.generated_at) {
                tracing::info!(
                    "  Seed: {} at {} (set SEED_RNG_SEED and SEED_NOW to reproduce)",
                    seed,
                    now.unix_timestamp()
                );
            }
            tracing::info!("  Generation: {} ms", report.generation_time_ms);
            tracing::info!("  Transaction: {} ms", report.seeding_time_ms);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Init/seed failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
