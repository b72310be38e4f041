use crate::domain::cart::{Cart, CartItem};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of the cart CSV, before the item invariants are checked.
#[derive(Debug, Deserialize)]
struct CartRecord {
    name: String,
    quantity: u32,
    unit_price: Decimal,
}

/// Reads cart line items from a CSV source with a `name, quantity, unit_price` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<CartItem>`.
/// It handles whitespace trimming automatically.
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    /// Creates a new `CartReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates cart items.
    pub fn items(self) -> impl Iterator<Item = Result<CartItem>> {
        self.reader.into_deserialize().map(|result| {
            let record: CartRecord = result.map_err(CheckoutError::from)?;
            CartItem::new(record.name, record.quantity, record.unit_price)
        })
    }

    /// Reads the whole source into a cart, failing on the first bad row.
    pub fn into_cart(self) -> Result<Cart> {
        self.items().collect::<Result<Vec<_>>>().map(Cart::new)
    }
}
