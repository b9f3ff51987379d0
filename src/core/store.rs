//! Persistence gateway for orders

use crate::core::order::Order;
use anyhow::Result;
use async_trait::async_trait;

/// Keyed CRUD over a backing store of orders
///
/// Implementations must be safe to share across concurrent requests. They do
/// not serialize read-then-write sequences: a `find_by_id` followed by `save`
/// from one caller can interleave with another caller's writes, and the last
/// write wins.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist an order
    ///
    /// A transient order gets a fresh id that was never handed out before.
    /// An order carrying an id overwrites that row (or creates it).
    async fn save(&self, order: Order) -> Result<Order>;

    /// Get an order by id, `None` when no row has that id
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    /// List every order, ascending by id
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Delete a row by id; a missing row is a no-op
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Delete every row; ids handed out so far stay retired
    async fn delete_all(&self) -> Result<()>;

    /// Delete the row backing this order; transient orders are a no-op
    async fn delete(&self, order: &Order) -> Result<()> {
        match order.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(()),
        }
    }
}
