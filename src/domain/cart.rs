use crate::error::{CheckoutError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Currency symbol used when formatting money for display.
pub const CURRENCY_SYMBOL: &str = "S/";

/// Represents a monetary value (unit prices, subtotals and totals).
///
/// This is a wrapper around `rust_decimal::Decimal` so that cart arithmetic never
/// goes through floating point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Formats the amount with exactly two decimal places, rounding half away from zero.
    pub fn to_fixed(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", CURRENCY_SYMBOL, self.to_fixed())
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A purchasable line item. Read-only once it is in a cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    name: String,
    quantity: u32,
    unit_price: Money,
}

impl CartItem {
    /// Creates a line item, rejecting a zero quantity or a negative price.
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Result<Self> {
        let name = name.into();
        if quantity == 0 {
            return Err(CheckoutError::InvalidItem(format!(
                "{name}: quantity must be at least 1"
            )));
        }
        if unit_price < Decimal::ZERO {
            return Err(CheckoutError::InvalidItem(format!(
                "{name}: unit price must not be negative"
            )));
        }
        Ok(Self {
            name,
            quantity,
            unit_price: Money::new(unit_price),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// quantity × unit price
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Ordered collection of line items pending checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of every line subtotal. Recomputed on each call; the cart is the only source of truth.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
