//! SQL for the `products` table.

/// Creates the table when it does not exist yet.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        sku TEXT UNIQUE,
        name TEXT NOT NULL,
        description TEXT,
        price NUMERIC(12, 2) NOT NULL DEFAULT 0,
        currency CHAR(3) NOT NULL DEFAULT 'USD',
        discount_percent NUMERIC(5, 2) NOT NULL DEFAULT 0,
        discount_price NUMERIC(12, 2) NOT NULL DEFAULT 0,
        in_stock BOOLEAN NOT NULL DEFAULT true,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Removes every row and restarts the `id` sequence at 1.
pub const TRUNCATE_PRODUCTS: &str = "TRUNCATE TABLE products RESTART IDENTITY";

/// Prefix of the bulk insert; `VALUES` tuples are appended per batch.
pub const INSERT_PRODUCTS_PREFIX: &str = r#"
    INSERT INTO products (
        sku, name, description, price, currency,
        discount_percent, discount_price, in_stock,
        created_at, updated_at
    ) "#;

/// Bind parameters per inserted row.
pub const COLUMNS_PER_ROW: usize = 10;

/// PostgreSQL's limit on bind parameters in a single statement.
pub const MAX_BIND_PARAMS: usize = u16::MAX as usize;

pub const COUNT_PRODUCTS: &str = "SELECT COUNT(*) FROM products";

pub const SELECT_PRODUCTS: &str = r#"
    SELECT id, sku, name, description, price, currency,
           discount_percent, discount_price, in_stock,
           created_at, updated_at
    FROM products
    ORDER BY id
"#;
