//! Output stage for hexatlas.
//!
//! Persists finished atlases as PNG images and optional JSON layout
//! manifests.

mod manifest;
mod png;

pub use manifest::{manifest_json, write_manifest};
pub use png::write_atlas_png;
