//! Gradient synthesizer.
//!
//! Turns a layout plan into one `Fill` per cell. This is the only place
//! randomness enters an atlas: the random source picks shade amounts, ramp
//! directions, and the colours used by neighbour and mixed ramps. Geometry
//! and swatch assignment never depend on it.

use clap::ValueEnum;
use serde::Serialize;

use crate::layout::{Cell, CellRole, GridPlan};
use crate::rng::RandomSource;
use crate::types::{Colour, Palette};

use super::{Axis, Fill, Ramp};

/// How a grid cell picks its second endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointPolicy {
    /// Lighter or darker shade of the cell's own colour
    #[default]
    Shade,
    /// The next colour in the palette (wrapping)
    Neighbour,
}

/// Tunables for gradient synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientOptions {
    pub endpoints: EndpointPolicy,
    /// Maximum lightness shift for synthesized shades, in `0.0..=1.0`.
    pub shade: f32,
    /// Randomize shade amount and ramp direction.
    pub jitter: bool,
    /// Colour for padding cells.
    pub background: Colour,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            endpoints: EndpointPolicy::Shade,
            shade: 0.35,
            jitter: true,
            background: Colour::WHITE,
        }
    }
}

/// A cell paired with the fill that paints it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintJob {
    pub cell: Cell,
    pub fill: Fill,
}

/// Chooses fills for cells, drawing on a random source.
pub struct GradientSynthesizer<'a, R: RandomSource> {
    palette: &'a Palette,
    options: GradientOptions,
    rng: R,
}

impl<'a, R: RandomSource> GradientSynthesizer<'a, R> {
    pub fn new(palette: &'a Palette, options: GradientOptions, rng: R) -> Self {
        Self {
            palette,
            options,
            rng,
        }
    }

    /// Fill every cell of a plan, in plan order.
    pub fn synthesize(&mut self, plan: &GridPlan) -> Vec<PaintJob> {
        plan.cells
            .iter()
            .map(|&cell| PaintJob {
                cell,
                fill: self.fill_for(cell.role),
            })
            .collect()
    }

    /// Choose the fill for a cell role.
    pub fn fill_for(&mut self, role: CellRole) -> Fill {
        match role {
            CellRole::Padding => Fill::Solid(self.options.background),
            CellRole::Swatch { index } => Fill::Solid(self.colour(index)),
            CellRole::Gradient { index } => Fill::Ramp(self.grid_ramp(index)),
            CellRole::Spectrum => {
                let stops = self.palette.colours().to_vec();
                Fill::Ramp(self.ramp_or_shade(stops, Axis::Vertical))
            }
            CellRole::Extremes => {
                let (darkest, lightest) = self.palette.extremes();
                Fill::Ramp(self.ramp_or_shade(vec![lightest, darkest], Axis::Vertical))
            }
            CellRole::Neighbours { .. } => Fill::Ramp(self.neighbour_ramp()),
            CellRole::Mixed { .. } => Fill::Ramp(self.mixed_ramp()),
        }
    }

    fn colour(&self, index: usize) -> Colour {
        self.palette.get(index).unwrap_or(self.options.background)
    }

    /// Ramp for a grid cell: the palette colour and a second endpoint.
    fn grid_ramp(&mut self, index: usize) -> Ramp {
        let base = self.colour(index);
        let end = match self.options.endpoints {
            EndpointPolicy::Neighbour if self.palette.next_after(index) != base => {
                self.palette.next_after(index)
            }
            _ => self.shade_of(base),
        };

        if !self.options.jitter {
            return Ramp::pair(base, end, Axis::Vertical);
        }

        let axis = if self.rng.coin() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        if self.rng.coin() {
            Ramp::pair(base, end, axis)
        } else {
            Ramp::pair(end, base, axis)
        }
    }

    /// Ramp from a random colour through some of its near neighbours.
    ///
    /// Skips the 2-4 nearest colours so the ramp has some contrast, then
    /// takes one or two of the next 1-3.
    fn neighbour_ramp(&mut self) -> Ramp {
        let pick = self.rng.below(self.palette.len());
        let start = self.colour(pick);
        let max_neighbours = self.rng.range_inclusive(1, 3);
        let skip = self.rng.range_inclusive(2, 4);
        let neighbours = self.palette.neighbours(start, skip, max_neighbours);

        let mut stops = vec![start];
        if !neighbours.is_empty() {
            let take = self.rng.range_inclusive(1, neighbours.len().min(2));
            stops.extend_from_slice(&neighbours[..take]);
        }
        self.ramp_or_shade(stops, Axis::Vertical)
    }

    /// Ramp through two or three distinct palette entries.
    fn mixed_ramp(&mut self) -> Ramp {
        let count = self.rng.range_inclusive(2, 3);
        let stops = self
            .rng
            .sample_indices(self.palette.len(), count)
            .into_iter()
            .map(|i| self.colour(i))
            .collect();
        self.ramp_or_shade(stops, Axis::Vertical)
    }

    /// Use `stops` as a ramp, or fall back to a shade ramp when they would
    /// paint a flat cell.
    fn ramp_or_shade(&mut self, stops: Vec<Colour>, axis: Axis) -> Ramp {
        let first = stops[0];
        if stops.iter().all(|&c| c == first) {
            let end = self.shade_of(first);
            return Ramp::pair(first, end, axis);
        }
        Ramp::new(stops, axis)
    }

    /// A lighter or darker variant of `base`.
    ///
    /// With jitter the amount is drawn from the upper half of the configured
    /// maximum and the direction is random. If the shift does nothing (white
    /// lightened, black darkened) the other direction is used. If neither
    /// direction changes the colour, it is nudged one channel step.
    fn shade_of(&mut self, base: Colour) -> Colour {
        let max = self.options.shade.clamp(0.0, 1.0);
        let (amount, lighten) = if self.options.jitter {
            (max * (0.5 + 0.5 * self.rng.unit_f32()), self.rng.coin())
        } else {
            (max, base.luma() < 128.0)
        };

        let signed = if lighten { amount } else { -amount };
        let shaded = base.shade(signed);
        if shaded != base {
            return shaded;
        }
        let flipped = base.shade(-signed);
        if flipped != base {
            return flipped;
        }
        base.nudge(lighten)
    }
}
