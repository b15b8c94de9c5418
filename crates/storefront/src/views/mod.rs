//! Render layer: pure projections of catalog, cart and request state into
//! askama templates.
//!
//! Each fragment template fills one mount point of the page:
//!
//! ```text
//! #products-grid     ProductGridTemplate
//! #cart-content      CartPanelTemplate
//! #cart-count        CartCountTemplate
//! #checkout-message  CheckoutMessageTemplate
//! ```
//!
//! `IndexTemplate` includes the same partials to render the whole page.
//! Nothing here touches storage or the request; handlers lock the shop, call
//! a projection, and return the template.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod page;

pub use cart::{CartCountTemplate, CartPanelTemplate, CartView, cart_count, cart_panel};
pub use catalog::{ProductGridTemplate, category_options, product_grid};
pub use checkout::{
    CheckoutFormView, CheckoutMessageTemplate, CheckoutMessageView, EMPTY_CART_MESSAGE,
};
pub use page::{IndexTemplate, PageRequest, index_page};
