use crate::application::view::CheckoutView;
use std::fmt::Write;

/// Renders the checkout screen as plain text, one cart line per row.
pub fn render_text(view: &CheckoutView) -> String {
    let mut out = String::from("Checkout\n\nReview your cart\n");

    for line in &view.lines {
        let _ = writeln!(
            out,
            "  {} x{}  {}",
            line.name, line.quantity, line.subtotal
        );
    }
    match (view.total, view.placeholder) {
        (Some(total), _) => {
            let _ = writeln!(out, "  TOTAL:  {total}");
        }
        (None, Some(placeholder)) => {
            let _ = writeln!(out, "  {placeholder}");
        }
        (None, None) => {}
    }

    let _ = writeln!(
        out,
        "\nDelivery point: {}, {}",
        view.marker.latitude, view.marker.longitude
    );
    if !view.submit_enabled {
        out.push_str("Purchase unavailable: the cart is empty\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view::EMPTY_CART_MESSAGE;
    use crate::domain::cart::{Cart, CartItem};
    use crate::domain::coordinate::Coordinate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_items_and_total() {
        let cart = Cart::new(vec![CartItem::new("A", 2, dec!(10)).unwrap()]);
        let text = render_text(&CheckoutView::build(&cart, Coordinate::DEFAULT));

        assert!(text.contains("  A x2  S/ 20.00\n"));
        assert!(text.contains("  TOTAL:  S/ 20.00\n"));
        assert!(text.contains("Delivery point: -12.0433, -77.028"));
        assert!(!text.contains("Purchase unavailable"));
    }

    #[test]
    fn test_render_empty_cart() {
        let text = render_text(&CheckoutView::build(&Cart::default(), Coordinate::DEFAULT));

        assert!(text.contains(EMPTY_CART_MESSAGE));
        assert!(!text.contains("TOTAL"));
        assert!(text.contains("Purchase unavailable"));
    }
}
