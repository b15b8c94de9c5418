//! Cart route handlers.
//!
//! Every mutation is persisted before the response is built. Fragment
//! requests get the re-rendered cart panel plus a `cart-updated` trigger;
//! plain form posts are redirected back to the page.

use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::{CART_UPDATED, HX_TRIGGER, HxRequest};
use crate::state::AppState;
use crate::views::{self, CartCountTemplate, CartPanelTemplate};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub slug: String,
}

/// Change quantity form data.
#[derive(Debug, Deserialize)]
pub struct ChangeQuantityForm {
    pub slug: String,
    pub delta: i64,
}

/// Cart panel fragment.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CartPanelTemplate {
    let shop = state.shop().await;
    views::cart_panel(shop.cart.cart(), state.catalog())
}

/// Cart count badge fragment.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> CartCountTemplate {
    let shop = state.shop().await;
    views::cart_count(shop.cart.cart())
}

/// Add one unit of a product to the cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let mut shop = state.shop().await;
    shop.cart.add(&form.slug)?;
    add_breadcrumb("cart", "Added to cart", Some(&[("slug", form.slug.as_str())]));

    Ok(cart_updated(fragment, views::cart_panel(shop.cart.cart(), state.catalog())))
}

/// Change the quantity of a cart entry by `delta`.
#[instrument(skip(state))]
pub async fn change(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    Form(form): Form<ChangeQuantityForm>,
) -> Result<Response> {
    let mut shop = state.shop().await;
    shop.cart.change_quantity(&form.slug, form.delta)?;

    Ok(cart_updated(fragment, views::cart_panel(shop.cart.cart(), state.catalog())))
}

/// Response after a cart mutation.
fn cart_updated(fragment: bool, panel: CartPanelTemplate) -> Response {
    if fragment {
        (AppendHeaders([(HX_TRIGGER, CART_UPDATED)]), panel).into_response()
    } else {
        Redirect::to("/#cart").into_response()
    }
}
