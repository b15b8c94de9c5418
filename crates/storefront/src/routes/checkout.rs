//! Checkout route handler.
//!
//! Two outcomes, both rendered into `#checkout-message`:
//! - empty cart: rejection notice, nothing changes, the form keeps its values
//! - otherwise: order recorded, cart emptied, form reset, success notice
//!
//! Fragment requests get only the message (plus `order-placed` and
//! `cart-updated` triggers on success); plain form posts get the whole page.

use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tea_house_core::{CheckoutError, CustomerDetails, PaymentMethod, ProductQuery, place_order};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{CART_UPDATED, HX_TRIGGER, HxRequest, ORDER_PLACED};
use crate::state::AppState;
use crate::views::{self, CheckoutFormView, CheckoutMessageTemplate, CheckoutMessageView, PageRequest};

/// Checkout form data. Every field is optional and taken verbatim.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub payment: PaymentMethod,
    pub comment: String,
}

impl From<CheckoutForm> for CustomerDetails {
    fn from(form: CheckoutForm) -> Self {
        Self {
            customer_name: form.customer_name,
            phone: form.phone,
            city: form.city,
            address: form.address,
            payment: form.payment,
            comment: Some(form.comment).filter(|c| !c.is_empty()),
        }
    }
}

/// Submit the checkout form.
#[instrument(skip(state))]
pub async fn submit(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let customer = CustomerDetails::from(form);
    let mut guard = state.shop().await;
    let shop = &mut *guard;

    let (message, form) = match place_order(
        &mut shop.cart,
        &shop.history,
        state.catalog(),
        customer.clone(),
        Utc::now(),
    ) {
        Ok(order) => (CheckoutMessageView::placed(&order), CheckoutFormView::blank()),
        Err(CheckoutError::EmptyCart) => {
            tracing::info!("Checkout rejected: cart is empty");
            (
                CheckoutMessageView::empty_cart(),
                CheckoutFormView::from_details(&customer),
            )
        }
        Err(CheckoutError::Storage(e)) => return Err(e.into()),
    };

    if fragment {
        let template = CheckoutMessageTemplate {
            message: Some(message.clone()),
        };
        return Ok(if message.is_success() {
            let events = format!("{ORDER_PLACED}, {CART_UPDATED}");
            (AppendHeaders([(HX_TRIGGER, events)]), template).into_response()
        } else {
            template.into_response()
        });
    }

    let query = ProductQuery::default();
    Ok(views::index_page(
        state.catalog(),
        state.categories(),
        shop.cart.cart(),
        PageRequest {
            search: "",
            query: &query,
            message: Some(message),
            form,
        },
    )
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_customer_details() {
        let details = CustomerDetails::from(CheckoutForm {
            customer_name: "Оксана".to_owned(),
            phone: "0501234567".to_owned(),
            city: "Одеса".to_owned(),
            address: "Дерибасівська, 5".to_owned(),
            payment: PaymentMethod::CardOnDelivery,
            comment: String::new(),
        });
        assert_eq!(details.customer_name, "Оксана");
        assert_eq!(details.payment, PaymentMethod::CardOnDelivery);
        assert!(details.comment.is_none());
    }

    #[test]
    fn test_comment_kept_verbatim() {
        let details = CustomerDetails::from(CheckoutForm {
            comment: "  без цукру ".to_owned(),
            ..CheckoutForm::default()
        });
        assert_eq!(details.comment.as_deref(), Some("  без цукру "));
    }
}
