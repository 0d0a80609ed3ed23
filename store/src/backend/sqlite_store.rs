//! SqliteShopStore
//! ----------------
//! SQLite-backed implementation of the [`ShopStore`] trait. It owns:
//!
//!  - schema creation on startup (`users` and `orders` tables)
//!  - the point lookup over users and the filtered scan over orders
//!  - the explicit row → entity mapping, kept at this boundary so the rest
//!    of the pipeline only ever sees typed `User` / `Order` records
//!  - upsert-style seeding helpers used by the demo driver and tests

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::ShopStore;
use crate::error::StoreError;
use crate::model::{Order, User};

pub struct SqliteShopStore {
    pool: SqlitePool,
}

impl SqliteShopStore {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `url` and ensure the schema exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        // A pooled ":memory:" database would give every connection its own
        // empty database, so restrict those to a single connection.
        let options = if url.contains(":memory:") {
            SqlitePoolOptions::new().max_connections(1)
        } else {
            SqlitePoolOptions::new()
        };

        let store = Self {
            pool: options.connect(url).await?,
        };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create tables and the secondary index if they do not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                name TEXT PRIMARY KEY,
                password TEXT NOT NULL,
                email TEXT
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                amount INTEGER NOT NULL
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        // Secondary index backing the filtered scan by username.
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_username ON orders (username);")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert or replace one user record.
    pub async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, password, email)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                password = excluded.password,
                email = excluded.email
        "#,
        )
        .bind(&user.name)
        .bind(&user.password)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert or replace one order record.
    pub async fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, username, amount)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                username = excluded.username,
                amount = excluded.amount
        "#,
        )
        .bind(order.id.to_string())
        .bind(&order.username)
        .bind(order.amount)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ShopStore for SqliteShopStore {
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT name, password, email FROM users WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| row_to_user(&row)).transpose()
    }

    async fn find_orders_by_username(&self, username: &str) -> Result<Vec<Order>, StoreError> {
        let rows =
            sqlx::query("SELECT id, username, amount FROM orders WHERE username = ?1 ORDER BY id")
                .bind(username)
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(row_to_order).collect()
    }
}

/// Explicit mapping from a `users` row to the domain record.
fn row_to_user(row: &SqliteRow) -> Result<User, StoreError> {
    Ok(User {
        name: row.try_get("name")?,
        password: row.try_get("password")?,
        email: row.try_get("email")?,
    })
}

/// Explicit mapping from an `orders` row to the domain record.
fn row_to_order(row: &SqliteRow) -> Result<Order, StoreError> {
    let raw_id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&raw_id).map_err(|e| StoreError::Malformed {
        entity: "order",
        key: raw_id,
        reason: e.to_string(),
    })?;

    Ok(Order {
        id,
        username: row.try_get("username")?,
        amount: row.try_get("amount")?,
    })
}
