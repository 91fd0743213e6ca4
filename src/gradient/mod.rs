//! Gradient ramps and per-cell fills.
//!
//! A `Fill` is a pure function from a pixel coordinate inside its cell to a
//! colour. Ramps interpolate linearly per channel, including alpha, along one
//! axis of the cell. The `synth` module decides which fill each cell gets.

mod synth;

use serde::Serialize;

use crate::layout::Rect;
use crate::types::Colour;

pub use synth::{EndpointPolicy, GradientOptions, GradientSynthesizer, PaintJob};

/// Axis a ramp runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A multi-stop linear ramp.
///
/// Stops are spaced evenly: with `n` stops the span splits into `n - 1`
/// segments, each a two-colour interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    pub stops: Vec<Colour>,
    pub axis: Axis,
}

impl Ramp {
    pub fn new(stops: Vec<Colour>, axis: Axis) -> Self {
        debug_assert!(!stops.is_empty());
        Self { stops, axis }
    }

    /// Two-stop ramp.
    pub fn pair(start: Colour, end: Colour, axis: Axis) -> Self {
        Self::new(vec![start, end], axis)
    }

    /// Colour at normalized position `t` in `0.0..=1.0`.
    pub fn sample(&self, t: f32) -> Colour {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (n - 1) as f32;
        let segment = (scaled as usize).min(n - 2);
        let local = scaled - segment as f32;
        lerp(self.stops[segment], self.stops[segment + 1], local)
    }

    /// Colour for pixel `(x, y)` of `rect`.
    ///
    /// The first pixel along the axis gets the first stop and the last pixel
    /// the last stop exactly. A one-pixel span gets the first stop.
    pub fn colour_at(&self, rect: &Rect, x: u32, y: u32) -> Colour {
        let (offset, span) = match self.axis {
            Axis::Vertical => (y.saturating_sub(rect.y), rect.height),
            Axis::Horizontal => (x.saturating_sub(rect.x), rect.width),
        };
        let t = if span > 1 {
            offset.min(span - 1) as f32 / (span - 1) as f32
        } else {
            0.0
        };
        self.sample(t)
    }
}

/// How a cell is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Colour),
    Ramp(Ramp),
}

impl Fill {
    /// Colour for pixel `(x, y)` of `rect`.
    pub fn colour_at(&self, rect: &Rect, x: u32, y: u32) -> Colour {
        match self {
            Fill::Solid(colour) => *colour,
            Fill::Ramp(ramp) => ramp.colour_at(rect, x, y),
        }
    }

    /// Colours this fill draws from, in order.
    pub fn stops(&self) -> &[Colour] {
        match self {
            Fill::Solid(colour) => std::slice::from_ref(colour),
            Fill::Ramp(ramp) => &ramp.stops,
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            Fill::Solid(_) => None,
            Fill::Ramp(ramp) => Some(ramp.axis),
        }
    }
}

/// Interpolate one channel, rounding to nearest.
pub fn lerp_channel(start: u8, end: u8, t: f32) -> u8 {
    let v = start as f32 + t * (end as f32 - start as f32);
    v.round().clamp(0.0, 255.0) as u8
}

/// Interpolate every channel of two colours.
pub fn lerp(start: Colour, end: Colour, t: f32) -> Colour {
    Colour::new(
        lerp_channel(start.r, end.r, t),
        lerp_channel(start.g, end.g, t),
        lerp_channel(start.b, end.b, t),
        lerp_channel(start.a, end.a, t),
    )
}
