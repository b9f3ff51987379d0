//! Sample data inserted at startup for manual testing

use crate::core::order::today;
use crate::core::{Order, OrderStore};
use anyhow::Result;
use rust_decimal::Decimal;

/// The fixed sample orders, dated today
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new("Shrek", today(), "123 Swamp", Decimal::new(2345, 2)),
        Order::new("Donkey", today(), "456 Dragon's Den", Decimal::new(4532, 2)),
    ]
}

/// Save the sample orders and log every order in the store
pub async fn load_sample_orders(store: &dyn OrderStore) -> Result<Vec<Order>> {
    let mut saved = Vec::new();
    for order in sample_orders() {
        saved.push(store.save(order).await?);
    }

    for order in store.find_all().await? {
        tracing::info!(
            id = ?order.id,
            customer = %order.customer_name,
            total = %order.total,
            "Preloaded order"
        );
    }

    Ok(saved)
}
