//! Checkout: turn a non-empty cart into a recorded order.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::order::{CustomerDetails, Order, OrderHistory};
use crate::storage::{Storage, StorageError};
use crate::types::OrderId;

/// Why a checkout submission was not recorded.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart holds no items. Nothing was changed.
    #[error("cart is empty")]
    EmptyCart,

    /// Persisting the order or clearing the cart failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Record an order for the current cart and empty the cart.
///
/// The order gets a fresh time-based id, the submission time `now`, the
/// customer fields, a snapshot of the cart and its total against `catalog`.
/// The history is written before the cart is cleared, so a failed history
/// write leaves the cart as it was. If the history write succeeds but
/// clearing the cart fails, the order stays recorded and the cart keeps its
/// items both in memory and in storage; the caller sees the storage error,
/// and submitting again would record a second order for the same items.
///
/// # Errors
///
/// - `CheckoutError::EmptyCart` if the cart has no items; nothing is mutated.
/// - `CheckoutError::Storage` if a write fails.
#[instrument(skip_all, fields(items = cart.total_items()))]
pub fn place_order<C, H>(
    cart: &mut CartStore<C>,
    history: &OrderHistory<H>,
    catalog: &Catalog,
    customer: CustomerDetails,
    now: DateTime<Utc>,
) -> Result<Order, CheckoutError>
where
    C: Storage,
    H: Storage,
{
    if cart.total_items() == 0 {
        return Err(CheckoutError::EmptyCart);
    }

    let order = Order {
        id: OrderId::issue(now, history.last_id()),
        created_at: now,
        customer,
        items: cart.cart().clone(),
        total: cart.total_price(catalog),
    };

    history.append(&order)?;
    cart.clear()?;

    tracing::info!(order_id = %order.id, total = %order.total, "Order placed");
    Ok(order)
}
