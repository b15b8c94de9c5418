//! Orders and the append-only order history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::storage::{self, Storage, StorageError};
use crate::types::{OrderId, PaymentMethod, Price};

/// Storage key of the persisted order history.
pub const ORDERS_KEY: &str = "teaOrders";

/// Customer fields collected by the checkout form, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub customer_name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub payment: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A completed checkout. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub customer: CustomerDetails,
    /// Snapshot of the cart at submission time.
    pub items: Cart,
    pub total: Price,
}

/// The persisted list of orders, oldest first.
///
/// Holds no copy of the list: every call reads storage, so other tools
/// writing the same storage are seen immediately.
#[derive(Debug)]
pub struct OrderHistory<S> {
    storage: S,
}

impl<S: Storage> OrderHistory<S> {
    /// Bind a history to `storage`.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All recorded orders. Absent or malformed data reads as no orders.
    #[must_use]
    pub fn load(&self) -> Vec<Order> {
        storage::load_or_default(&self.storage, ORDERS_KEY)
    }

    /// Append `order` to the end of the history.
    ///
    /// The stored history is read strictly: a document that exists but
    /// cannot be read or decoded is left untouched and the append fails.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the existing history is unreadable or
    /// malformed, or if the history cannot be written.
    pub fn append(&self, order: &Order) -> Result<(), StorageError> {
        let mut orders: Vec<Order> = storage::load(&self.storage, ORDERS_KEY)?.unwrap_or_default();
        orders.push(order.clone());
        storage::save(&self.storage, ORDERS_KEY, &orders)?;
        tracing::debug!(order_id = %order.id, count = orders.len(), "Order history updated");
        Ok(())
    }

    /// Highest id recorded so far.
    #[must_use]
    pub fn last_id(&self) -> Option<OrderId> {
        self.load().iter().map(|order| order.id).max()
    }

    /// Find an order by id.
    #[must_use]
    pub fn find(&self, id: OrderId) -> Option<Order> {
        self.load().into_iter().find(|order| order.id == id)
    }
}
