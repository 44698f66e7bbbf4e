//! Synthetic product data for development databases.
//!
//! This crate initializes a `products` table and fills it with a fresh batch of
//! generated catalog rows. Each run replaces the table contents atomically: the
//! schema is created if missing, existing rows are truncated with the identity
//! counter reset, and the new batch goes in with one bulk insert.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use product_seed::prelude::*;
//!
//! let seeder = Seeder::new(pool);
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = seeder
//!     .seed(&ProductGenerator::new(), 100, OffsetDateTime::now_utc(), &mut rng)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;
pub mod models;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::postgres::PgPoolOptions;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::SeedConfig;
use crate::db::{SeedError, SeedReport, Seeder};
use crate::generators::ProductGenerator;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{SeedError, SeedReport, Seeder};
    pub use crate::generators::{
        GeneratedProduct, ProductGenConfig, ProductGenerator, discounted_price,
    };
    pub use crate::models::{Currency, Product};
    pub use crate::run;
}

/// Connects, seeds the `products` table, and closes the pool.
///
/// The pool is closed on both the success and the failure path.
pub async fn run(config: &SeedConfig) -> Result<SeedReport, SeedError> {
    config.validate()?;
    debug!(?config, "Resolved seed configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await?;

    info!("Connected to database");

    let seeder = Seeder::new(pool);
    let result = seed_with(&seeder, config).await;

    seeder.pool().close().await;
    result
}

async fn seed_with(seeder: &Seeder, config: &SeedConfig) -> Result<SeedReport, SeedError> {
    let generator = ProductGenerator::with_config(config.generator.clone())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let now = config.now.unwrap_or_else(OffsetDateTime::now_utc);
    info!(
        "Generating {} products with seed {} relative to {}",
        config.row_count,
        seed,
        now.unix_timestamp()
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = seeder.seed(&generator, config.row_count, now, &mut rng).await?;
    report.seed = Some(seed);
    Ok(report)
}
