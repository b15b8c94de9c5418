//! Cart panel and cart count projections.

use askama::Template;
use askama_web::WebTemplate;
use tea_house_core::{Cart, Catalog};

/// Cart row display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub slug: String,
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
///
/// Rows only exist for entries whose product is in the catalog; `is_empty`
/// reflects the cart itself, so a cart of stale entries still renders a
/// (row-less) table rather than the empty notice.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u64,
    pub is_empty: bool,
}

impl CartView {
    /// Project `cart` against `catalog`.
    #[must_use]
    pub fn project(cart: &Cart, catalog: &Catalog) -> Self {
        Self {
            lines: cart
                .lines(catalog)
                .map(|(product, quantity)| CartLineView {
                    slug: product.slug.to_string(),
                    name: product.name.clone(),
                    quantity,
                    line_total: product.price.times(quantity).to_string(),
                })
                .collect(),
            total: cart.total_price(catalog).to_string(),
            item_count: cart.total_items(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Cart panel fragment (`#cart-content`).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment (`#cart-count`).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Project the cart into the panel fragment.
#[must_use]
pub fn cart_panel(cart: &Cart, catalog: &Catalog) -> CartPanelTemplate {
    CartPanelTemplate {
        cart: CartView::project(cart, catalog),
    }
}

/// Project the cart into the count badge.
#[must_use]
pub fn cart_count(cart: &Cart) -> CartCountTemplate {
    CartCountTemplate {
        count: cart.total_items(),
    }
}
