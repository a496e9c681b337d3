//! The fixed shipping option table and the buyer's selection.

use crate::domain::foundation::Money;

/// A delivery choice the merchant offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    Free,
    Express,
}

impl ShippingMethod {
    /// Every method, in the order the platform displays them.
    pub const ALL: [ShippingMethod; 2] = [ShippingMethod::Free, ShippingMethod::Express];

    /// Option id shared with the platform.
    pub fn id(&self) -> &'static str {
        match self {
            ShippingMethod::Free => "1",
            ShippingMethod::Express => "2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Free => "Free Shipping",
            ShippingMethod::Express => "Express Shipping",
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            ShippingMethod::Free => Money::from_cents(0),
            ShippingMethod::Express => Money::from_cents(1000),
        }
    }
}

/// What the buyer has chosen, resolved once from the optional option id.
///
/// Any id other than the free option's counts as express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingSelection {
    /// No option in the payload yet (first callback of a session).
    NotSelected,
    Free,
    Express,
}

impl ShippingSelection {
    pub fn from_option_id(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            None | Some("") => ShippingSelection::NotSelected,
            Some(id) if id == ShippingMethod::Free.id() => ShippingSelection::Free,
            Some(_) => ShippingSelection::Express,
        }
    }

    /// The method that will be charged.
    pub fn method(&self) -> ShippingMethod {
        match self {
            ShippingSelection::Free => ShippingMethod::Free,
            ShippingSelection::Express | ShippingSelection::NotSelected => ShippingMethod::Express,
        }
    }
}

/// One row of the option list returned to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingOption {
    pub method: ShippingMethod,
    pub selected: bool,
}

impl ShippingOption {
    pub fn id(&self) -> &'static str {
        self.method.id()
    }

    pub fn label(&self) -> &'static str {
        self.method.label()
    }

    pub fn amount(&self) -> Money {
        self.method.amount()
    }
}

/// Builds the full option list with exactly `charged` flagged as selected.
pub fn shipping_options(charged: ShippingMethod) -> Vec<ShippingOption> {
    ShippingMethod::ALL
        .iter()
        .map(|&method| ShippingOption {
            method,
            selected: method == charged,
        })
        .collect()
}
