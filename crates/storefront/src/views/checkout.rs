//! Checkout form and status message projections.

use askama::Template;
use askama_web::WebTemplate;
use tea_house_core::{CustomerDetails, Order, PaymentMethod};

/// Shown when checkout is submitted with an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Додайте товари в кошик перед оформленням.";

/// Status message display data for templates.
#[derive(Clone)]
pub struct CheckoutMessageView {
    /// Alert modifier class (`success` / `error`).
    pub class: &'static str,
    pub text: String,
}

impl CheckoutMessageView {
    /// Success notice for a recorded order.
    #[must_use]
    pub fn placed(order: &Order) -> Self {
        Self {
            class: "success",
            text: format!("Замовлення #{} прийнято. Сума: {}.", order.id, order.total),
        }
    }

    /// Rejection notice for an empty cart.
    #[must_use]
    pub fn empty_cart() -> Self {
        Self {
            class: "error",
            text: EMPTY_CART_MESSAGE.to_owned(),
        }
    }

    /// Whether this reports a recorded order.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.class == "success"
    }
}

/// Status message fragment (`#checkout-message`).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_message.html")]
pub struct CheckoutMessageTemplate {
    pub message: Option<CheckoutMessageView>,
}

/// One `<option>` of the payment selector.
#[derive(Clone)]
pub struct PaymentOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Checkout form field values for templates.
#[derive(Clone)]
pub struct CheckoutFormView {
    pub customer_name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub comment: String,
    pub payment_options: Vec<PaymentOptionView>,
}

impl CheckoutFormView {
    /// An empty form.
    #[must_use]
    pub fn blank() -> Self {
        Self::from_details(&CustomerDetails::default())
    }

    /// A form re-filled with previously submitted values.
    #[must_use]
    pub fn from_details(details: &CustomerDetails) -> Self {
        Self {
            customer_name: details.customer_name.clone(),
            phone: details.phone.clone(),
            city: details.city.clone(),
            address: details.address.clone(),
            comment: details.comment.clone().unwrap_or_default(),
            payment_options: PaymentMethod::ALL
                .iter()
                .map(|method| PaymentOptionView {
                    value: method.as_str(),
                    label: method.label(),
                    selected: *method == details.payment,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use tea_house_core::{Cart, OrderId, Price};

    use super::*;

    #[test]
    fn test_placed_message_contains_id_and_total() {
        let order = Order {
            id: OrderId::new(1_720_000_000_000),
            created_at: chrono::Utc.timestamp_millis_opt(1_720_000_000_000).unwrap(),
            customer: CustomerDetails::default(),
            items: Cart::new(),
            total: Price::new(2170),
        };
        let message = CheckoutMessageView::placed(&order);
        assert!(message.is_success());
        assert_eq!(message.text, "Замовлення #1720000000000 прийнято. Сума: 2170 грн.");
    }

    #[test]
    fn test_message_fragment() {
        let html = CheckoutMessageTemplate {
            message: Some(CheckoutMessageView::empty_cart()),
        }
        .render()
        .unwrap();
        assert!(html.contains("alert error"));
        assert!(html.contains(EMPTY_CART_MESSAGE));

        let html = CheckoutMessageTemplate { message: None }.render().unwrap();
        assert!(html.trim().is_empty());
    }

    #[test]
    fn test_form_refill_selects_payment() {
        let details = CustomerDetails {
            customer_name: "Ірина".to_owned(),
            payment: PaymentMethod::CardOnline,
            comment: Some("дзвоніть".to_owned()),
            ..CustomerDetails::default()
        };
        let form = CheckoutFormView::from_details(&details);
        assert_eq!(form.customer_name, "Ірина");
        assert_eq!(form.comment, "дзвоніть");
        let selected: Vec<&str> = form
            .payment_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["card_online"]);
    }

    #[test]
    fn test_blank_form() {
        let form = CheckoutFormView::blank();
        assert!(form.customer_name.is_empty());
        assert_eq!(form.payment_options.len(), 3);
    }
}
