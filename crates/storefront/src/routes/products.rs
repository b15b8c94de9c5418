//! Catalog route handlers.

use axum::extract::{Query, State};
use serde::Deserialize;
use tea_house_core::{CategoryFilter, ProductQuery};
use tracing::instrument;

use crate::state::AppState;
use crate::views::{self, ProductGridTemplate};

/// Search box and category selector values.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    /// Raw search text, as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// The catalog query these values describe.
    #[must_use]
    pub fn to_product_query(&self) -> ProductQuery {
        ProductQuery::new(
            self.search(),
            CategoryFilter::from_param(self.category.as_deref()),
        )
    }
}

/// Product grid fragment for the current search and category.
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> ProductGridTemplate {
    views::product_grid(state.catalog(), &query.to_product_query())
}
