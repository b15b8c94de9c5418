//! Payment method offered on the checkout form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the customer intends to pay.
///
/// Orders only record the choice; no payment is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
    CardOnDelivery,
    CardOnline,
}

impl PaymentMethod {
    /// Every method, in the order the form lists them.
    pub const ALL: [Self; 3] = [Self::CashOnDelivery, Self::CardOnDelivery, Self::CardOnline];

    /// Form / storage value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash_on_delivery",
            Self::CardOnDelivery => "card_on_delivery",
            Self::CardOnline => "card_online",
        }
    }

    /// Human-readable label shown to the customer.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Готівкою при отриманні",
            Self::CardOnDelivery => "Карткою при отриманні",
            Self::CardOnline => "Карткою онлайн",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
