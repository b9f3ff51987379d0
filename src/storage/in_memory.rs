//! In-memory implementation of OrderStore for testing and development

use crate::core::{Order, OrderStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order store
///
/// Rows live in a `BTreeMap` keyed by id behind an `RwLock`, so listing is
/// naturally ascending by id. Ids come from a monotonic counter that is never
/// rewound, so a deleted id is never handed out again.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderStore {
    /// Create a new empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Keep the counter ahead of an id chosen by the caller
    fn reserve_id(&self, id: i64) {
        self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: Order) -> Result<Order> {
        let id = match order.id {
            Some(id) => {
                self.reserve_id(id);
                id
            }
            None => self.allocate_id(),
        };
        let order = order.with_id(id);

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.insert(id, order.clone());

        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.remove(&id);

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.clear();

        Ok(())
    }
}
