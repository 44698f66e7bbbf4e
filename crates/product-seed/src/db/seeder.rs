//! Database seeding for the `products` table.

use std::time::Instant;

use rand::Rng;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use super::schema::{
    COLUMNS_PER_ROW, COUNT_PRODUCTS, CREATE_PRODUCTS_TABLE, INSERT_PRODUCTS_PREFIX,
    MAX_BIND_PARAMS, SELECT_PRODUCTS, TRUNCATE_PRODUCTS,
};
use crate::config::ConfigError;
use crate::generators::{GeneratedProduct, ProductGenerator};
use crate::models::Product;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),
    #[error("Configuration error")]
    Config(#[from] ConfigError),
    #[error("Batch of {rows} rows needs {params} bind parameters, more than a single statement allows")]
    BatchTooLarge { rows: usize, params: usize },
}

/// Outcome of a committed seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    /// Rows inserted by the bulk statement.
    pub inserted: u64,
    /// RNG seed the batch was generated from, when known.
    pub seed: Option<u64>,
    /// Instant the generated timestamps were offset from, when known.
    pub generated_at: Option<OffsetDateTime>,
    /// Time spent generating data (milliseconds, 0 for caller-supplied rows).
    pub generation_time_ms: u64,
    /// Time spent in the transaction (milliseconds).
    pub seeding_time_ms: u64,
}

/// Database seeder for the `products` table.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Generates `count` products and replaces the table contents with them.
    pub async fn seed(
        &self,
        generator: &ProductGenerator,
        count: usize,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<SeedReport, SeedError> {
        let start = Instant::now();
        let products = generator.generate_batch(count, now, rng);
        let generation_time_ms = start.elapsed().as_millis() as u64;

        let mut report = self.seed_products(&products).await?;
        report.generation_time_ms = generation_time_ms;
        report.generated_at = Some(now);
        Ok(report)
    }

    /// Replaces the table contents with `products` in a single transaction.
    ///
    /// Creates the table if missing, truncates it with the identity reset, then
    /// inserts every row in one statement. Any failure rolls the whole
    /// transaction back, leaving the table as it was before the call.
    pub async fn seed_products(
        &self,
        products: &[GeneratedProduct],
    ) -> Result<SeedReport, SeedError> {
        let params = products.len() * COLUMNS_PER_ROW;
        if params > MAX_BIND_PARAMS {
            return Err(SeedError::BatchTooLarge {
                rows: products.len(),
                params,
            });
        }

        info!("Seeding {} products...", products.len());
        let start = Instant::now();

        let mut tx = self.pool.begin().await?;

        let inserted = match Self::replace_all(&mut tx, products).await {
            Ok(inserted) => inserted,
            Err(e) => {
                error!(error = ?e, "Seeding failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback failed: {rollback_err}");
                }
                return Err(e);
            }
        };

        tx.commit().await?;

        info!("Seeded {} products", inserted);
        Ok(SeedReport {
            inserted,
            seed: None,
            generated_at: None,
            generation_time_ms: 0,
            seeding_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Schema, truncate and insert, all on the open transaction.
    async fn replace_all(
        tx: &mut Transaction<'static, Postgres>,
        products: &[GeneratedProduct],
    ) -> Result<u64, SeedError> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&mut **tx)
            .await?;

        sqlx::query(TRUNCATE_PRODUCTS).execute(&mut **tx).await?;

        if products.is_empty() {
            return Ok(0);
        }

        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(INSERT_PRODUCTS_PREFIX);
        qb.push_values(products, |mut b, p| {
            b.push_bind(&p.sku)
                .push_bind(&p.name)
                .push_bind(&p.description)
                .push_bind(p.price)
                .push_bind(p.currency.as_str())
                .push_bind(p.discount_percent)
                .push_bind(p.discount_price)
                .push_bind(p.in_stock)
                .push_bind(p.created_at)
                .push_bind(p.updated_at);
        });

        let result = qb.build().execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows currently in the table.
    pub async fn count_products(&self) -> Result<i64, SeedError> {
        let (count,): (i64,) = sqlx::query_as(COUNT_PRODUCTS)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Returns every stored product ordered by id.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, SeedError> {
        let products = sqlx::query_as::<_, Product>(SELECT_PRODUCTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
