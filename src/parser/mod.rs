//! Parsers for palette input files.
//!
//! # Usage
//!
//! ```ignore
//! use hexatlas::parser::parse_hex_palette;
//!
//! let source = std::fs::read_to_string("palettes/endesga-32.hex")?;
//! let palette = parse_hex_palette(&source)?;
//! println!("{} colours", palette.len());
//! ```

pub mod hex;

pub use hex::parse_hex_palette;
