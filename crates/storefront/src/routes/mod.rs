//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Full page (query: q, category)
//! GET  /health           - Health check
//!
//! # Catalog (fragment)
//! GET  /products         - Product grid (query: q, category)
//!
//! # Cart (fragments)
//! GET  /cart             - Cart panel
//! GET  /cart/count       - Cart count badge
//! POST /cart/add         - Add one unit (returns cart panel, triggers cart-updated)
//! POST /cart/change      - Change quantity by delta (returns cart panel, triggers cart-updated)
//!
//! # Checkout
//! POST /checkout         - Record an order (returns checkout message)
//!
//! # Assets
//! GET  /static/*         - CSS and JS
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Directory served under `/static`: stylesheets, scripts and the hashed
/// copies generated at build time.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/change", post(cart::change))
}

/// Create all page and fragment routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/products", get(products::grid))
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::submit))
}

/// Build the complete application: routes, health check, static assets and
/// the middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
