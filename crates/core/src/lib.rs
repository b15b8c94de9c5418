//! Tea House Core - catalog, cart and checkout domain.
//!
//! This crate holds everything the shop knows independent of how it is
//! served. It is shared by:
//! - `storefront` - Local web storefront rendering this domain
//! - `cli` - Command-line tools to inspect the local data
//!
//! # Architecture
//!
//! The core crate contains types, pure transforms, and the [`storage::Storage`]
//! trait. It performs no I/O itself; backends that touch the disk live in the
//! storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for slugs, order ids, prices, payment methods
//! - [`catalog`] - The fixed product list and its search filters
//! - [`cart`] - Cart mapping and its persisted store
//! - [`order`] - Orders and the append-only order history
//! - [`checkout`] - Turning a cart into an order
//! - [`storage`] - Keyed text storage abstraction

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod storage;
pub mod types;

pub use cart::{CART_KEY, Cart, CartStore};
pub use catalog::{ALL_CATEGORIES, Catalog, CategoryFilter, Product, ProductQuery};
pub use checkout::{CheckoutError, place_order};
pub use order::{CustomerDetails, ORDERS_KEY, Order, OrderHistory};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use types::*;
