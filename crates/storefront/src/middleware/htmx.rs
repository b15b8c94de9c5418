//! Fragment request detection and client event headers.
//!
//! The page script marks its requests with `HX-Request: true` and expects
//! just the fragment for one mount point back. Plain form posts (no script)
//! get a full page or a redirect instead. Handlers announce follow-up work
//! to the script through `HX-Trigger`.

use axum::{
    extract::FromRequestParts,
    http::{HeaderName, request::Parts},
};

/// Request header set by the page script.
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// Response header listing client events, comma separated.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Cart changed: the script refreshes the count badge.
pub const CART_UPDATED: &str = "cart-updated";

/// Order recorded: the script resets the checkout form and refreshes the cart.
pub const ORDER_PLACED: &str = "order-placed";

/// Whether the request asked for a fragment.
///
/// # Example
///
/// ```ignore
/// async fn handler(HxRequest(fragment): HxRequest) -> Response {
///     if fragment { /* fragment */ } else { /* full page */ }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let fragment = parts
            .headers
            .get(HX_REQUEST)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));
        Ok(Self(fragment))
    }
}
