//! Atlas composition: palette in, finished canvas out.
//!
//! Runs the pipeline stages in order: plan the layout, synthesize a fill for
//! every cell, rasterize, and check coverage. Nothing here touches the file
//! system.

use crate::error::{AtlasError, Result};
use crate::gradient::{GradientOptions, GradientSynthesizer, PaintJob};
use crate::layout::{plan, GridPlan, LayoutStyle, ATLAS_SIZE};
use crate::parser::parse_hex_palette;
use crate::raster::{Canvas, ProcessingMode, Rasterizer};
use crate::rng::{RandomSource, SplitMix64};
use crate::types::Palette;

/// Largest accepted canvas edge. A canvas holds `size * size` colours plus a
/// coverage byte per pixel, about 1.25 GiB at this size.
pub const MAX_ATLAS_SIZE: u32 = 16384;

/// Settings for one atlas run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasOptions {
    /// Canvas edge in pixels.
    pub size: u32,
    pub layout: LayoutStyle,
    pub gradient: GradientOptions,
    /// Fixed random seed. `None` draws a fresh one per run.
    pub seed: Option<u64>,
    pub mode: ProcessingMode,
}

impl Default for AtlasOptions {
    fn default() -> Self {
        Self {
            size: ATLAS_SIZE,
            layout: LayoutStyle::default(),
            gradient: GradientOptions::default(),
            seed: None,
            mode: ProcessingMode::default(),
        }
    }
}

impl AtlasOptions {
    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_ATLAS_SIZE {
            return Err(AtlasError::Config {
                message: format!("canvas size {} is out of range", self.size),
                help: Some(format!("Use a size between 1 and {}", MAX_ATLAS_SIZE)),
            });
        }
        let shade = self.gradient.shade;
        if !(shade > 0.0 && shade <= 1.0) {
            return Err(AtlasError::Config {
                message: format!("shade amount {} is out of range", shade),
                help: Some("Use a value greater than 0 and at most 1, e.g. 0.35".to_string()),
            });
        }
        Ok(())
    }
}

/// A composed atlas.
#[derive(Debug, Clone)]
pub struct Atlas {
    pub plan: GridPlan,
    pub jobs: Vec<PaintJob>,
    pub canvas: Canvas,
    /// Whether the source palette carried alpha; decides RGB vs RGBA output.
    pub has_alpha: bool,
}

/// Compose an atlas, seeding randomness from `options.seed`.
pub fn compose(palette: &Palette, options: &AtlasOptions) -> Result<Atlas> {
    compose_with(palette, options, SplitMix64::from_seed(options.seed))
}

/// Compose an atlas with an explicit random source.
pub fn compose_with<R: RandomSource>(
    palette: &Palette,
    options: &AtlasOptions,
    rng: R,
) -> Result<Atlas> {
    options.validate()?;

    let plan = plan(options.layout, palette.len(), options.size)?;
    let jobs = GradientSynthesizer::new(palette, options.gradient, rng).synthesize(&plan);

    let mut rasterizer = Rasterizer::new(options.size, options.mode);
    rasterizer.paint(&jobs);
    let canvas = rasterizer.finish()?;

    Ok(Atlas {
        plan,
        jobs,
        canvas,
        has_alpha: palette.has_alpha(),
    })
}

/// Parse hex palette text and compose it.
pub fn compose_source(source: &str, options: &AtlasOptions) -> Result<Atlas> {
    let palette = parse_hex_palette(source)?;
    compose(&palette, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{Fill, GradientOptions};
    use crate::layout::{CellRole, Rect};
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    fn options(size: u32) -> AtlasOptions {
        AtlasOptions {
            size,
            seed: Some(7),
            ..AtlasOptions::default()
        }
    }

    #[test]
    fn test_rgb_palette_example() {
        let atlas = compose_source("#FF0000\n#00FF00\n#0000FF\n", &AtlasOptions::default()).unwrap();

        assert_eq!(atlas.canvas.size(), 2048);
        assert_eq!((atlas.plan.rows, atlas.plan.cols), (2, 2));

        let colours = [
            Colour::rgb(255, 0, 0),
            Colour::rgb(0, 255, 0),
            Colour::rgb(0, 0, 255),
        ];
        for (i, job) in atlas.jobs.iter().take(3).enumerate() {
            assert_eq!(job.cell.role, CellRole::Gradient { index: i });
            assert_eq!(job.cell.rect.width, 1024);
            assert_eq!(job.cell.rect.height, 1024);
            assert!(job.fill.stops().contains(&colours[i]));
        }
        assert_eq!(atlas.jobs[3].cell.rect, Rect::new(1024, 1024, 1024, 1024));
        assert_eq!(atlas.jobs[3].fill, Fill::Solid(Colour::WHITE));
        assert_eq!(atlas.canvas.get(2047, 2047), Some(Colour::WHITE));
    }

    #[test]
    fn test_every_pixel_written() {
        for layout in [LayoutStyle::Grid, LayoutStyle::Classic] {
            let opts = AtlasOptions {
                layout,
                ..options(512)
            };
            let atlas = compose_source("1a1c2c\n5d275d\nb13e53\nef7d57\nffcd75\n", &opts).unwrap();
            assert!(atlas
                .canvas
                .pixels()
                .iter()
                .all(|&c| c != Colour::TRANSPARENT));
        }
    }

    #[test]
    fn test_same_seed_identical_canvas() {
        let source = "1a1c2c\n5d275d\nb13e53\nef7d57\nffcd75\na7f070\n";
        for layout in [LayoutStyle::Grid, LayoutStyle::Classic] {
            let opts = AtlasOptions {
                layout,
                ..options(256)
            };
            let a = compose_source(source, &opts).unwrap();
            let b = compose_source(source, &opts).unwrap();
            assert_eq!(a.canvas, b.canvas);
        }
    }

    #[test]
    fn test_different_seeds_keep_geometry() {
        let source = "1a1c2c\n5d275d\nb13e53\nef7d57\n";
        let a = compose_source(source, &options(128)).unwrap();
        let b = compose_source(
            source,
            &AtlasOptions {
                seed: Some(8),
                ..options(128)
            },
        )
        .unwrap();
        assert_eq!(a.plan, b.plan);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let source = "1a1c2c\n5d275d\nb13e53\nef7d57\nffcd75\n";
        let par = compose_source(source, &options(300)).unwrap();
        let seq = compose_source(
            source,
            &AtlasOptions {
                mode: ProcessingMode::Sequential,
                ..options(300)
            },
        )
        .unwrap();
        assert_eq!(par.canvas, seq.canvas);
    }

    #[test]
    fn test_single_colour_is_full_canvas_gradient() {
        let opts = AtlasOptions {
            gradient: GradientOptions {
                jitter: false,
                ..GradientOptions::default()
            },
            ..options(64)
        };
        let atlas = compose_source("336699\n", &opts).unwrap();
        assert_eq!(atlas.jobs.len(), 1);
        assert_eq!(atlas.canvas.get(0, 0), Some(Colour::rgb(0x33, 0x66, 0x99)));
        assert_ne!(atlas.canvas.get(0, 63), atlas.canvas.get(0, 0));
    }

    #[test]
    fn test_classic_fixture_spectrum_and_swatches() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("sweetie-16.hex");
        let source = std::fs::read_to_string(path).unwrap();
        let opts = AtlasOptions {
            layout: LayoutStyle::Classic,
            ..options(2048)
        };
        let atlas = compose_source(&source, &opts).unwrap();

        // Spectrum strip runs first colour to last colour, top to bottom
        assert_eq!(atlas.canvas.get(2047, 0), Some(Colour::rgb(0x1a, 0x1c, 0x2c)));
        assert_eq!(atlas.canvas.get(1944, 2047), Some(Colour::rgb(0x33, 0x3c, 0x57)));

        // 16 swatches fit one row of 121/122px squares
        assert_eq!((atlas.plan.cols, atlas.plan.rows), (16, 1));
        assert_eq!(atlas.canvas.get(0, 0), Some(Colour::rgb(0x1a, 0x1c, 0x2c)));
        assert_eq!(atlas.canvas.get(1943, 100), Some(Colour::rgb(0x33, 0x3c, 0x57)));

        // Below the swatches is padding
        assert_eq!(atlas.canvas.get(10, 599), Some(Colour::WHITE));

        // Extremes ramp: lightest at the top, darkest at the bottom
        assert_eq!(atlas.canvas.get(0, 600), Some(Colour::rgb(0xf4, 0xf4, 0xf4)));
        assert_eq!(atlas.canvas.get(0, 1323), Some(Colour::rgb(0x1a, 0x1c, 0x2c)));
    }

    #[test]
    fn test_alpha_flag_carried() {
        let atlas = compose_source("ff000080\n", &options(16)).unwrap();
        assert!(atlas.has_alpha);
    }

    #[test]
    fn test_malformed_input_aborts() {
        let err = compose_source("ff0000\nzzzzzz\n", &options(16)).unwrap_err();
        assert!(matches!(err, AtlasError::MalformedPaletteEntry { line: 2, .. }));
    }

    #[test]
    fn test_too_large_palette() {
        let source = "000000\n".repeat(17);
        let err = compose_source(&source, &options(4)).unwrap_err();
        assert!(matches!(err, AtlasError::PaletteTooLarge { colours: 17, .. }));
    }

    #[test]
    fn test_size_bounds() {
        for size in [0, MAX_ATLAS_SIZE + 1, 70_000] {
            assert!(matches!(
                options(size).validate(),
                Err(AtlasError::Config { .. })
            ));
        }
        assert!(options(MAX_ATLAS_SIZE).validate().is_ok());
    }

    #[test]
    fn test_invalid_shade_rejected() {
        for shade in [0.0, -0.5, 1.5, f32::NAN] {
            let opts = AtlasOptions {
                gradient: GradientOptions {
                    shade,
                    ..GradientOptions::default()
                },
                ..options(16)
            };
            assert!(matches!(
                compose_source("ffffff\n", &opts),
                Err(AtlasError::Config { .. })
            ));
        }
    }
}
