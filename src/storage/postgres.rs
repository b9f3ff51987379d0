//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresOrderStore` backed by a PostgreSQL database via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! order-service = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! One `orders` table whose columns mirror the `Order` fields. `id` is an
//! identity column, so the database assigns ids and never reissues them.

use crate::core::error::StorageError;
use crate::core::{Order, OrderStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Apply the `orders` table (idempotent, safe to call on every startup).
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS orders (
            id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            customer_name TEXT NOT NULL,
            order_date DATE NOT NULL,
            shipping_address TEXT NOT NULL,
            total NUMERIC(19, 2) NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create orders table: {}", e))?;

    Ok(())
}

type OrderRow = (i64, String, NaiveDate, String, Decimal);

const RETURNING: &str = "RETURNING id, customer_name, order_date, shipping_address, total";

fn reconstruct_order(row: OrderRow) -> Order {
    let (id, customer_name, order_date, shipping_address, total) = row;
    Order {
        id: Some(id),
        customer_name,
        order_date,
        shipping_address,
        total,
    }
}

/// Order store backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use orders::storage::PostgresOrderStore;
///
/// let store = PostgresOrderStore::connect("postgres://localhost/orders", 5).await?;
/// let saved = store.save(order).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Create a store on an existing pool. The schema must already exist.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect, then make sure the schema exists
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StorageError::ConnectionError {
                backend: "postgres".to_string(),
                message: e.to_string(),
            })?;

        ensure_schema(&pool).await?;

        Ok(Self::new(pool))
    }

    async fn insert(&self, order: &Order) -> Result<Order> {
        let sql = format!(
            "INSERT INTO orders (customer_name, order_date, shipping_address, total) \
             VALUES ($1, $2, $3, $4) {}",
            RETURNING
        );
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(&order.customer_name)
            .bind(order.order_date)
            .bind(&order.shipping_address)
            .bind(order.total)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to insert order: {}", e))?;

        Ok(reconstruct_order(row))
    }

    async fn upsert(&self, id: i64, order: &Order) -> Result<Order> {
        let sql = format!(
            "INSERT INTO orders (id, customer_name, order_date, shipping_address, total) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                customer_name = EXCLUDED.customer_name, \
                order_date = EXCLUDED.order_date, \
                shipping_address = EXCLUDED.shipping_address, \
                total = EXCLUDED.total \
             {}",
            RETURNING
        );
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(id)
            .bind(&order.customer_name)
            .bind(order.order_date)
            .bind(&order.shipping_address)
            .bind(order.total)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to save order {}: {}", id, e))?;

        // An explicit id bypasses the identity sequence; move it past that id
        // (never backwards) so generated ids cannot collide or repeat.
        sqlx::query(
            "SELECT setval(
                pg_get_serial_sequence('orders', 'id')::regclass,
                GREATEST(
                    $1,
                    COALESCE(pg_sequence_last_value(pg_get_serial_sequence('orders', 'id')::regclass), 0)
                )
            )",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to advance order id sequence: {}", e))?;

        Ok(reconstruct_order(row))
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, order: Order) -> Result<Order> {
        match order.id {
            Some(id) => self.upsert(id, &order).await,
            None => self.insert(&order).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_name, order_date, shipping_address, total \
             FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get order {}: {}", id, e))?;

        Ok(row.map(reconstruct_order))
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_name, order_date, shipping_address, total \
             FROM orders ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list orders: {}", e))?;

        Ok(rows.into_iter().map(reconstruct_order).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete order {}: {}", id, e))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        // DELETE rather than TRUNCATE ... RESTART IDENTITY: ids stay retired
        sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete orders: {}", e))?;

        Ok(())
    }
}
