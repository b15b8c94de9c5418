//! Shopping cart and its persisted store.
//!
//! The cart maps product slugs to positive quantities. An entry whose
//! quantity would drop to zero or below is removed, so no stored entry is ever
//! non-positive. Insertion order is kept: cart rows list products in the
//! order they were first added.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::{Catalog, Product};
use crate::storage::{self, Storage, StorageError};
use crate::types::{Price, ProductSlug};

/// Storage key of the persisted cart.
pub const CART_KEY: &str = "teaCart";

/// Mapping of product slug to quantity.
///
/// Serialized as a JSON object, e.g. `{"longjing":1,"tieguanyin":2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: IndexMap<ProductSlug, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `slug`. The slug is not checked against any catalog.
    pub fn add(&mut self, slug: &str) {
        if let Some(quantity) = self.items.get_mut(slug) {
            *quantity = quantity.saturating_add(1);
        } else {
            self.items.insert(ProductSlug::from(slug), 1);
        }
    }

    /// Add `delta` to the quantity of `slug` (0 if absent).
    ///
    /// A result of zero or less removes the entry; an absent slug with a
    /// non-positive delta leaves the cart unchanged.
    pub fn change_quantity(&mut self, slug: &str, delta: i64) {
        let next = i64::from(self.quantity(slug)).saturating_add(delta);
        if next <= 0 {
            self.items.shift_remove(slug);
            return;
        }

        let next = u32::try_from(next).unwrap_or(u32::MAX);
        if let Some(quantity) = self.items.get_mut(slug) {
            *quantity = next;
        } else {
            self.items.insert(ProductSlug::from(slug), next);
        }
    }

    /// Quantity of `slug`, 0 if absent.
    #[must_use]
    pub fn quantity(&self, slug: &str) -> u32 {
        self.items.get(slug).copied().unwrap_or(0)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Sum of quantity x price over entries that resolve in `catalog`.
    ///
    /// Entries with no matching product contribute nothing.
    #[must_use]
    pub fn total_price(&self, catalog: &Catalog) -> Price {
        self.lines(catalog)
            .map(|(product, quantity)| product.price.times(quantity))
            .sum()
    }

    /// Entries that resolve to a product, in cart order.
    pub fn lines<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = (&'a Product, u32)> {
        self.items
            .iter()
            .filter_map(|(slug, &quantity)| catalog.find(slug.as_str()).map(|p| (p, quantity)))
    }

    /// Slugs with no matching product in `catalog`.
    #[must_use]
    pub fn stale_slugs<'a>(&'a self, catalog: &Catalog) -> Vec<&'a ProductSlug> {
        self.items
            .keys()
            .filter(|slug| catalog.find(slug.as_str()).is_none())
            .collect()
    }

    /// All entries, in cart order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductSlug, u32)> {
        self.items.iter().map(|(slug, &quantity)| (slug, quantity))
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop zero-quantity entries a hand-edited or foreign document may carry.
    fn retain_positive(&mut self) {
        self.items.retain(|_, quantity| *quantity > 0);
    }
}

/// A cart bound to the storage it persists to.
///
/// Every mutation writes the whole cart back under [`CART_KEY`] before
/// returning. The in-memory cart only changes once that write succeeds, so
/// a failed mutation leaves memory and storage agreeing.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Restore the cart from `storage`.
    ///
    /// Absent or malformed data yields an empty cart.
    pub fn open(storage: S) -> Self {
        let mut cart: Cart = storage::load_or_default(&storage, CART_KEY);
        cart.retain_positive();
        tracing::debug!(entries = cart.len(), "Cart restored");
        Self { cart, storage }
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `slug` and persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    #[instrument(skip(self))]
    pub fn add(&mut self, slug: &str) -> Result<(), StorageError> {
        self.update(|cart| cart.add(slug))
    }

    /// Change the quantity of `slug` by `delta` and persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    #[instrument(skip(self))]
    pub fn change_quantity(&mut self, slug: &str, delta: i64) -> Result<(), StorageError> {
        self.update(|cart| cart.change_quantity(slug, delta))
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.update(Cart::clear)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Cart total against `catalog`.
    #[must_use]
    pub fn total_price(&self, catalog: &Catalog) -> Price {
        self.cart.total_price(catalog)
    }

    fn update(&mut self, mutate: impl FnOnce(&mut Cart)) -> Result<(), StorageError> {
        let mut next = self.cart.clone();
        mutate(&mut next);
        storage::save(&self.storage, CART_KEY, &next)?;
        self.cart = next;
        Ok(())
    }
}
