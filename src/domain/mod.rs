//! Domain model of the checkout screen: the cart, the contact form, the delivery
//! coordinate picked on the map, and the ports to the outside world.

pub mod cart;
pub mod contact;
pub mod coordinate;
pub mod form;
pub mod map;
pub mod order;
pub mod ports;
