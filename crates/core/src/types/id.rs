//! Identifier newtypes for catalog products and orders.
//!
//! Products are addressed by a stable textual slug; orders by a time-based
//! numeric id. Keeping them as distinct types prevents passing one where the
//! other is expected.

use core::fmt;
use std::borrow::Borrow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable short textual identifier of a product (e.g. `longjing`).
///
/// Slugs are not checked against the catalog: a cart may hold a slug that no
/// longer resolves to a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductSlug(String);

impl ProductSlug {
    /// Create a slug from any string-like value.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductSlug {
    fn from(slug: &str) -> Self {
        Self(slug.to_owned())
    }
}

impl From<String> for ProductSlug {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

impl AsRef<str> for ProductSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows map lookups keyed by `&str`.
impl Borrow<str> for ProductSlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Order identifier: milliseconds since the Unix epoch at submission time.
///
/// Ids are strictly increasing within one order history, see [`OrderId::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Create an order ID from a raw value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Issue a fresh id for an order submitted at `now`.
    ///
    /// Two submissions inside the same millisecond (or a clock that moved
    /// backwards) still get distinct ids: the result is always greater than
    /// `last`.
    #[must_use]
    pub fn issue(now: DateTime<Utc>, last: Option<Self>) -> Self {
        let millis = now.timestamp_millis();
        match last {
            Some(last) if last.0 >= millis => Self(last.0.saturating_add(1)),
            _ => Self(millis),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
