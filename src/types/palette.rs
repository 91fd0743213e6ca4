//! Ordered colour palette.

use crate::error::{AtlasError, Result};

use super::Colour;

/// An ordered, non-empty list of colours.
///
/// Order is significant: it drives swatch placement and which colours count
/// as adjacent. Duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
    has_alpha: bool,
}

impl Palette {
    /// Create a palette from parsed colours.
    ///
    /// `has_alpha` records whether the source spelled out an alpha channel,
    /// which decides between RGB and RGBA output.
    pub fn new(colours: Vec<Colour>, has_alpha: bool) -> Result<Self> {
        if colours.is_empty() {
            return Err(AtlasError::EmptyPalette);
        }
        Ok(Self { colours, has_alpha })
    }

    /// Build an opaque palette from colours. Used by tests and benches.
    pub fn from_colours(colours: impl IntoIterator<Item = Colour>) -> Result<Self> {
        Self::new(colours.into_iter().collect(), false)
    }

    /// Get a colour by position.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// All colours in file order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Whether the source palette carried an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// The colour following `index`, wrapping to the start.
    pub fn next_after(&self, index: usize) -> Colour {
        self.colours[(index + 1) % self.colours.len()]
    }

    /// Darkest and lightest colours by luma.
    ///
    /// Ties keep the earliest entry for the darkest and the latest entry for
    /// the lightest, matching a stable sort.
    pub fn extremes(&self) -> (Colour, Colour) {
        let mut sorted = self.colours.clone();
        sorted.sort_by(|a, b| a.luma().total_cmp(&b.luma()));
        (sorted[0], sorted[sorted.len() - 1])
    }

    /// Colours ranked by distance from `target`, excluding exact matches.
    ///
    /// Skips the `skip` nearest and returns up to `take` of the rest, nearest
    /// first.
    pub fn neighbours(&self, target: Colour, skip: usize, take: usize) -> Vec<Colour> {
        let mut ranked: Vec<(f32, Colour)> = self
            .colours
            .iter()
            .filter(|&&c| c != target)
            .map(|&c| (c.distance(target), c))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        ranked
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|(_, c)| c)
            .collect()
    }

    /// Serialize back to one hex code per line.
    pub fn to_hex_lines(&self) -> Vec<String> {
        self.colours
            .iter()
            .map(|c| c.to_hex(self.has_alpha))
            .collect()
    }
}
