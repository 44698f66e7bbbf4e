//! Row types for the `products` table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Currencies a generated product may be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
    Twd,
}

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Jpy, Currency::Twd];

    /// Returns the ISO 4217 code stored in the `CHAR(3)` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Twd => "TWD",
        }
    }

    /// Parses a stored currency code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == code.trim())
    }
}

/// A product row as stored in the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub discount_percent: Decimal,
    pub discount_price: Decimal,
    pub in_stock: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Product {
    /// The stored currency code parsed back into a [`Currency`].
    pub fn currency(&self) -> Option<Currency> {
        Currency::from_code(&self.currency)
    }
}
