//! Application state shared across handlers.

use std::sync::Arc;

use tea_house_core::{CartStore, Catalog, OrderHistory, Storage, StorageError};
use tokio::sync::{Mutex, MutexGuard};

use crate::config::StorefrontConfig;
use crate::storage::FileStorage;

/// Storage handle shared by the cart store and the order history.
pub type SharedStorage = Arc<dyn Storage>;

/// The mutable half of the shop: the one cart and the order history.
pub struct Shop {
    pub cart: CartStore<SharedStorage>,
    pub history: OrderHistory<SharedStorage>,
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog and the category
/// list are immutable; the cart and history sit behind one async mutex, and
/// a handler holds it for its whole read-mutate-persist-render step so there
/// is never more than one mutation in flight.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    categories: Vec<String>,
    shop: Mutex<Shop>,
}

impl AppState {
    /// Create application state over an arbitrary storage backend.
    ///
    /// Restores the cart and derives the category list once. Cart entries
    /// whose product no longer exists are kept but reported.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: SharedStorage, catalog: Catalog) -> Self {
        let cart = CartStore::open(Arc::clone(&storage));
        let stale = cart.cart().stale_slugs(&catalog);
        if !stale.is_empty() {
            tracing::warn!(
                ?stale,
                "Cart holds products missing from the catalog; they are ignored in totals"
            );
        }

        let categories = catalog
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                categories,
                shop: Mutex::new(Shop {
                    cart,
                    history: OrderHistory::new(storage),
                }),
            }),
        }
    }

    /// Create application state over the configured data directory and the
    /// built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data directory cannot be created.
    pub fn open(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = FileStorage::open(&config.data_dir)?;
        tracing::info!(data_dir = %storage.root().display(), "Local storage opened");
        Ok(Self::new(config, Arc::new(storage), Catalog::tea_house()))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Distinct catalog categories, computed at startup.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.inner.categories
    }

    /// Lock the cart and order history.
    pub async fn shop(&self) -> MutexGuard<'_, Shop> {
        self.inner.shop.lock().await
    }
}

#[cfg(test)]
mod tests {
    use tea_house_core::{CART_KEY, MemoryStorage};

    use super::*;

    #[tokio::test]
    async fn test_restores_cart_from_storage() {
        let storage = MemoryStorage::with_entries([(CART_KEY, r#"{"baimudan":2,"gone":1}"#)]);
        let state = AppState::new(
            StorefrontConfig::default(),
            Arc::new(storage),
            Catalog::tea_house(),
        );

        let shop = state.shop().await;
        assert_eq!(shop.cart.total_items(), 3);
        assert_eq!(shop.cart.total_price(state.catalog()).amount(), 1240);
    }

    #[test]
    fn test_categories_computed_once() {
        let state = AppState::new(
            StorefrontConfig::default(),
            Arc::new(MemoryStorage::new()),
            Catalog::tea_house(),
        );
        assert_eq!(state.categories(), ["Зелений", "Улун", "Пуер", "Білий"]);
    }
}
