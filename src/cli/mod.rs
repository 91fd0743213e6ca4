pub mod build;
pub mod completions;
pub mod validate;

use clap::{Args, Parser, Subcommand};

use crate::atlas::AtlasOptions;
use crate::error::Result;
use crate::gradient::{EndpointPolicy, GradientOptions};
use crate::layout::{LayoutStyle, ATLAS_SIZE};
use crate::raster::ProcessingMode;
use crate::types::Colour;

/// hexatlas - Gradient texture atlases from hex palettes
#[derive(Parser, Debug)]
#[command(name = "hexatlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose atlases from palette files
    Build(build::BuildArgs),

    /// Check palette files without writing images
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Atlas composition settings shared by commands.
#[derive(Args, Debug, Clone)]
pub struct AtlasArgs {
    /// Canvas edge in pixels
    #[arg(long, default_value_t = ATLAS_SIZE)]
    pub size: u32,

    /// Layout style
    #[arg(long, value_enum, default_value_t = LayoutStyle::Grid)]
    pub layout: LayoutStyle,

    /// Second endpoint for grid cells
    #[arg(long, value_enum, default_value_t = EndpointPolicy::Shade)]
    pub endpoints: EndpointPolicy,

    /// Maximum lightness shift for synthesized shades (0 < shade <= 1)
    #[arg(long, default_value_t = 0.35)]
    pub shade: f32,

    /// Random seed for reproducible gradients
    #[arg(long)]
    pub seed: Option<u64>,

    /// Colour for padding areas
    #[arg(long, default_value = "#FFFFFF")]
    pub background: String,

    /// Use the full shade amount and top-to-bottom ramps in grid cells
    #[arg(long)]
    pub no_jitter: bool,

    /// Rasterize on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl AtlasArgs {
    /// Convert to validated library options.
    pub fn to_options(&self) -> Result<AtlasOptions> {
        let options = AtlasOptions {
            size: self.size,
            layout: self.layout,
            gradient: GradientOptions {
                endpoints: self.endpoints,
                shade: self.shade,
                jitter: !self.no_jitter,
                background: Colour::from_hex(&self.background)?,
            },
            seed: self.seed,
            mode: if self.sequential {
                ProcessingMode::Sequential
            } else {
                ProcessingMode::Parallel
            },
        };
        options.validate()?;
        Ok(options)
    }
}
