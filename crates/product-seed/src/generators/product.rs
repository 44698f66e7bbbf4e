//! Synthetic product generation.

use fake::faker::boolean::en::Boolean;
use fake::{Fake, StringFaker};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::config::ConfigError;
use crate::generators::commerce::ProductName;
use crate::models::Currency;

const SKU_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const SECONDS_PER_DAY: i64 = 86_400;

/// Widest accepted timestamp window, about a century.
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Longest accepted SKU.
pub const MAX_SKU_LENGTH: usize = 64;

/// Largest price a `NUMERIC(12, 2)` column holds, in cents.
pub const MAX_PRICE_CENTS: i64 = 999_999_999_999;

/// Generated product data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: Currency,
    pub discount_percent: Decimal,
    pub discount_price: Decimal,
    pub in_stock: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Configuration for product generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductGenConfig {
    /// Currencies a product is priced in, picked uniformly.
    pub currencies: Vec<Currency>,
    /// Lowest generated price, in cents.
    pub price_min_cents: i64,
    /// Highest generated price, in cents.
    pub price_max_cents: i64,
    /// Highest generated discount, in basis points (5000 = 50.00%).
    pub max_discount_basis_points: i64,
    /// Percentage of products generated as in stock.
    pub in_stock_percent: u8,
    /// `created_at` falls within this many days before now.
    pub created_within_days: i64,
    /// `updated_at` falls within this many days before now.
    pub updated_within_days: i64,
    /// Number of characters in a SKU.
    pub sku_length: usize,
}

impl Default for ProductGenConfig {
    fn default() -> Self {
        Self {
            currencies: Currency::ALL.to_vec(),
            price_min_cents: 300,
            price_max_cents: 99_900,
            max_discount_basis_points: 5_000,
            in_stock_percent: 80,
            created_within_days: 365,
            updated_within_days: 30,
            sku_length: 10,
        }
    }
}

impl ProductGenConfig {
    /// Rejects bounds the generator cannot sample from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currencies.is_empty() {
            return Err(ConfigError::Invalid("currencies must not be empty".into()));
        }
        if self.price_min_cents < 0
            || self.price_min_cents > self.price_max_cents
            || self.price_max_cents > MAX_PRICE_CENTS
        {
            return Err(ConfigError::Invalid(format!(
                "price range {}..={} cents is not within 0..={MAX_PRICE_CENTS}",
                self.price_min_cents, self.price_max_cents
            )));
        }
        if !(0..=10_000).contains(&self.max_discount_basis_points) {
            return Err(ConfigError::Invalid(format!(
                "max discount of {} basis points is outside 0..=10000",
                self.max_discount_basis_points
            )));
        }
        if self.in_stock_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "in-stock percentage {} exceeds 100",
                self.in_stock_percent
            )));
        }
        for (field, days) in [
            ("created_within_days", self.created_within_days),
            ("updated_within_days", self.updated_within_days),
        ] {
            if !(1..=MAX_WINDOW_DAYS).contains(&days) {
                return Err(ConfigError::Invalid(format!(
                    "{field} = {days} is outside 1..={MAX_WINDOW_DAYS}"
                )));
            }
        }
        if !(1..=MAX_SKU_LENGTH).contains(&self.sku_length) {
            return Err(ConfigError::Invalid(format!(
                "sku length {} is outside 1..={MAX_SKU_LENGTH}",
                self.sku_length
            )));
        }
        Ok(())
    }
}

/// Applies a percentage discount and rounds to cents.
///
/// Midpoints round away from zero. The result never exceeds `price` for a
/// discount in `0..=100`.
pub fn discounted_price(price: Decimal, discount_percent: Decimal) -> Decimal {
    let factor = (Decimal::ONE_HUNDRED - discount_percent) / Decimal::ONE_HUNDRED;
    (price * factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Generates synthetic catalog products.
pub struct ProductGenerator {
    config: ProductGenConfig,
    sku_faker: StringFaker<std::ops::Range<usize>>,
}

impl ProductGenerator {
    /// Creates a new product generator with default configuration.
    pub fn new() -> Self {
        Self::build(ProductGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    ///
    /// Fails when the configuration does not pass [`ProductGenConfig::validate`].
    pub fn with_config(config: ProductGenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ProductGenConfig) -> Self {
        let sku_faker = StringFaker::with(
            Vec::from(SKU_ALPHABET),
            config.sku_length..config.sku_length + 1,
        );
        Self { config, sku_faker }
    }

    /// Generates a single product with timestamps relative to `now`.
    pub fn generate(&self, now: OffsetDateTime, rng: &mut impl Rng) -> GeneratedProduct {
        let sku: String = self.sku_faker.fake_with_rng(rng);

        let name = ProductName::random(rng);
        let description = name.description(rng);

        let price = Decimal::new(
            rng.gen_range(self.config.price_min_cents..=self.config.price_max_cents),
            2,
        );
        let discount_percent =
            Decimal::new(rng.gen_range(0..=self.config.max_discount_basis_points), 2);
        let discount_price = discounted_price(price, discount_percent);

        let currency = self
            .config
            .currencies
            .choose(rng)
            .copied()
            .unwrap_or(Currency::Usd);
        let in_stock: bool = Boolean(self.config.in_stock_percent).fake_with_rng(rng);

        let created_at = self.random_past(now, self.config.created_within_days, rng);
        let updated_at = self.random_past(now, self.config.updated_within_days, rng);

        GeneratedProduct {
            sku,
            name: name.to_string(),
            description,
            price,
            currency,
            discount_percent,
            discount_price,
            in_stock,
            created_at,
            updated_at,
        }
    }

    /// Generates multiple products.
    pub fn generate_batch(
        &self,
        count: usize,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedProduct> {
        (0..count).map(|_| self.generate(now, rng)).collect()
    }

    /// A timestamp uniformly within `days` before `now`.
    fn random_past(&self, now: OffsetDateTime, days: i64, rng: &mut impl Rng) -> OffsetDateTime {
        let window = days.saturating_mul(SECONDS_PER_DAY).max(1);
        let offset = rng.gen_range(0..window);
        now.saturating_sub(Duration::seconds(offset))
    }
}

impl Default for ProductGenerator {
    fn default() -> Self {
        Self::new()
    }
}
