//! Database integration for seeding products.
//!
//! The [`Seeder`] creates the `products` table if needed, clears it, and
//! bulk-inserts a generated batch inside one transaction.

pub mod schema;
mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder};
