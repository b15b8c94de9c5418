//! Core types for Tea House.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod payment;
pub mod price;

pub use id::{OrderId, ProductSlug};
pub use payment::PaymentMethod;
pub use price::Price;
