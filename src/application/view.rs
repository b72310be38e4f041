use crate::domain::cart::{Cart, Money};
use crate::domain::coordinate::Coordinate;
use serde::Serialize;

pub const EMPTY_CART_MESSAGE: &str = "You have not added any products yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    pub name: String,
    pub quantity: u32,
    pub subtotal: Money,
}

/// Everything the checkout screen shows, derived from the cart and the picked point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutView {
    pub lines: Vec<LineView>,
    /// `None` when the cart is empty; the placeholder is shown instead.
    pub total: Option<Money>,
    pub placeholder: Option<&'static str>,
    pub marker: Coordinate,
    pub submit_enabled: bool,
}

impl CheckoutView {
    pub fn build(cart: &Cart, marker: Coordinate) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| LineView {
                name: item.name().to_string(),
                quantity: item.quantity(),
                subtotal: item.subtotal(),
            })
            .collect();

        if cart.is_empty() {
            Self {
                lines,
                total: None,
                placeholder: Some(EMPTY_CART_MESSAGE),
                marker,
                submit_enabled: false,
            }
        } else {
            Self {
                lines,
                total: Some(cart.total()),
                placeholder: None,
                marker,
                submit_enabled: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartItem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_cart_view() {
        let view = CheckoutView::build(&Cart::default(), Coordinate::DEFAULT);
        assert!(view.lines.is_empty());
        assert_eq!(view.total, None);
        assert_eq!(view.placeholder, Some(EMPTY_CART_MESSAGE));
        assert!(!view.submit_enabled);
    }

    #[test]
    fn test_itemized_view() {
        let cart = Cart::new(vec![
            CartItem::new("A", 2, dec!(10.00)).unwrap(),
            CartItem::new("B", 1, dec!(0.5)).unwrap(),
        ]);
        let view = CheckoutView::build(&cart, Coordinate::DEFAULT);

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].subtotal.to_fixed(), "20.00");
        assert_eq!(view.lines[1].subtotal.to_fixed(), "0.50");
        assert_eq!(view.total, Some(Money::new(dec!(20.5))));
        assert!(view.placeholder.is_none());
        assert!(view.submit_enabled);
    }
}
