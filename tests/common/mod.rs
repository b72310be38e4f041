#![allow(dead_code)]

use checkout_flow::domain::cart::{Cart, CartItem};
use checkout_flow::domain::contact::ContactInfo;
use checkout_flow::domain::form::{CheckoutForm, Field};
use rand::Rng;
use rust_decimal::Decimal;

pub fn contact() -> ContactInfo {
    ContactInfo {
        full_name: "Juan Perez".to_string(),
        phone: "926384679".to_string(),
        email: "jperez@tecsup.edu.pe".to_string(),
        address: Some("Los123".to_string()),
    }
}

pub fn valid_form() -> CheckoutForm {
    CheckoutForm::new()
        .with(Field::FullName, "Juan Perez")
        .with(Field::Phone, "926384679")
        .with(Field::Email, "jperez@tecsup.edu.pe")
        .with(Field::Address, "Los123")
}

/// A cart of 1..=20 items with quantities 1..=9 and prices in cents up to 999.99.
pub fn random_cart(rng: &mut impl Rng) -> Cart {
    let len = rng.gen_range(1..=20);
    (0..len)
        .map(|i| {
            let cents: i64 = rng.gen_range(0..100_000);
            CartItem::new(
                format!("item-{i}"),
                rng.gen_range(1..=9),
                Decimal::new(cents, 2),
            )
            .expect("generated item is valid")
        })
        .collect()
}
