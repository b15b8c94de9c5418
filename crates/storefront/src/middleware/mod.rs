//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame denial, etc.)
//!
//! [`htmx`] is not a layer: it holds the fragment-request extractor and the
//! client event names shared by the handlers.

pub mod htmx;
pub mod request_id;
pub mod security_headers;

pub use htmx::{CART_UPDATED, HX_TRIGGER, HxRequest, ORDER_PLACED};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
