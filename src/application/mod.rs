//! Application layer orchestrating the checkout screen.
//!
//! This module defines the `CheckoutFlow`, which owns the delivery coordinate,
//! derives the cart total, and sends validated orders through the `OrderService`
//! port. `CheckoutView` is the render model it exposes.

pub mod checkout;
pub mod view;
