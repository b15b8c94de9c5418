//! Home page route handler.

use axum::extract::{Query, State};
use tracing::instrument;

use super::products::CatalogQuery;
use crate::state::AppState;
use crate::views::{self, CheckoutFormView, IndexTemplate, PageRequest};

/// Render the full storefront page.
///
/// Query parameters pre-apply the search and category filter, which is how
/// the catalog filter works when the page script is not running.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> IndexTemplate {
    let shop = state.shop().await;
    views::index_page(
        state.catalog(),
        state.categories(),
        shop.cart.cart(),
        PageRequest {
            search: query.search(),
            query: &query.to_product_query(),
            message: None,
            form: CheckoutFormView::blank(),
        },
    )
}
