//! The full single-page storefront.

use askama::Template;
use askama_web::WebTemplate;
use tea_house_core::{Cart, Catalog, ProductQuery};

use super::cart::CartView;
use super::catalog::{CategoryOptionView, ProductCardView, category_options};
use super::checkout::{CheckoutFormView, CheckoutMessageView};
use crate::filters;

/// Full page template.
///
/// Field names match the partials it includes (`products`, `cart`, `count`,
/// `message`), so every fragment renders identically on its own and inside
/// the page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub search: String,
    pub categories: Vec<CategoryOptionView>,
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
    pub count: u64,
    pub message: Option<CheckoutMessageView>,
    pub form: CheckoutFormView,
}

/// Inputs to a full-page render beyond the shop state.
pub struct PageRequest<'a> {
    /// Raw search text, echoed back into the search box.
    pub search: &'a str,
    pub query: &'a ProductQuery,
    pub message: Option<CheckoutMessageView>,
    pub form: CheckoutFormView,
}

/// Project catalog, cart and request into the full page.
#[must_use]
pub fn index_page(
    catalog: &Catalog,
    categories: &[String],
    cart: &Cart,
    request: PageRequest<'_>,
) -> IndexTemplate {
    IndexTemplate {
        search: request.search.to_owned(),
        categories: category_options(categories, request.query.category()),
        products: catalog
            .search(request.query)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        cart: CartView::project(cart, catalog),
        count: cart.total_items(),
        message: request.message,
        form: request.form,
    }
}
