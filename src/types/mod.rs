//! Core domain types for hexatlas.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - Ordered colour lists loaded from `.hex` files

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::Palette;
