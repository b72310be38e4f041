//! Input and output surfaces: the cart CSV reader and the text renderer.

pub mod csv;
pub mod text;
