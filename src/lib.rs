//! hexatlas - Gradient texture atlases from hex palettes
//!
//! A library for laying out a palette of colours as swatches and gradient
//! ramps on a fixed-size square canvas, for use as a texture atlas.
//!
//! The pipeline runs strictly forward: palette text is parsed into a
//! `Palette`, a `GridPlan` assigns canvas regions, the gradient synthesizer
//! picks a fill per region, and the rasterizer paints a `Canvas` that the
//! render stage writes out as PNG.

pub mod atlas;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod gradient;
pub mod layout;
pub mod output;
pub mod parser;
pub mod raster;
pub mod render;
pub mod rng;
pub mod types;

pub use atlas::{compose, compose_source, compose_with, Atlas, AtlasOptions, MAX_ATLAS_SIZE};
pub use discovery::{find_palettes, output_path};
pub use error::{AtlasError, Result};
pub use gradient::{Axis, EndpointPolicy, Fill, GradientOptions, GradientSynthesizer, PaintJob, Ramp};
pub use layout::{plan, plan_classic, plan_grid, Cell, CellRole, GridPlan, LayoutStyle, Rect, ATLAS_SIZE};
pub use parser::parse_hex_palette;
pub use raster::{Canvas, ProcessingMode, Rasterizer};
pub use render::{manifest_json, write_atlas_png, write_manifest};
pub use rng::{RandomSource, SplitMix64};
pub use types::{Colour, Palette};
