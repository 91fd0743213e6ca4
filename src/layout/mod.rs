//! Atlas layout planning.
//!
//! Splits a square canvas into non-overlapping rectangular cells and tags each
//! with the role it plays in the atlas. Plans are pure geometry: they depend
//! only on the palette length and canvas size, never on colours or
//! randomness, so the same palette always lands in the same cells.
//!
//! Two styles are available:
//! - `grid` - a near-square grid with one gradient cell per palette colour
//! - `classic` - a swatch band, a full-height spectrum strip, and two rows of
//!   mixed gradients

mod classic;
mod grid;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

pub use classic::plan_classic;
pub use grid::plan_grid;

/// Reference canvas edge, in pixels.
pub const ATLAS_SIZE: u32 = 2048;

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Clip to a `size`x`size` canvas anchored at the origin.
    pub fn clip(&self, size: u32) -> Rect {
        let x = self.x.min(size);
        let y = self.y.min(size);
        Rect::new(x, y, self.right().min(size) - x, self.bottom().min(size) - y)
    }
}

/// What a cell is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellRole {
    /// Gradient seeded by the palette entry at `index` (grid layout).
    Gradient { index: usize },
    /// Flat fill of the palette entry at `index` (classic layout).
    Swatch { index: usize },
    /// Multi-stop ramp through every palette colour in order.
    Spectrum,
    /// Lightest to darkest ramp.
    Extremes,
    /// Ramp from a random colour through some of its near neighbours.
    Neighbours { slot: usize },
    /// Ramp through a few randomly sampled colours.
    Mixed { slot: usize },
    /// Unassigned area, filled with the background colour.
    Padding,
}

/// A rectangular region of the canvas and its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub rect: Rect,
    pub role: CellRole,
}

impl Cell {
    pub fn new(rect: Rect, role: CellRole) -> Self {
        Self { rect, role }
    }
}

/// Available layout styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Near-square grid, one gradient cell per colour
    #[default]
    Grid,
    /// Swatch band, spectrum strip, and gradient rows
    Classic,
}

/// The computed geometry of an atlas. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridPlan {
    /// Canvas edge in pixels.
    pub canvas: u32,
    pub style: LayoutStyle,
    /// Rows in the palette grid.
    pub rows: u32,
    /// Columns in the palette grid.
    pub cols: u32,
    /// Nominal palette cell width (some classic swatches are one pixel wider).
    pub cell_width: u32,
    /// Palette cell height.
    pub cell_height: u32,
    /// Every region of the canvas, palette cells first in palette order.
    pub cells: Vec<Cell>,
}

impl GridPlan {
    /// Cells tied to a palette entry, with that entry's index.
    pub fn palette_cells(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().filter_map(|cell| match cell.role {
            CellRole::Gradient { index } | CellRole::Swatch { index } => Some((index, cell)),
            _ => None,
        })
    }

    /// Total area of all cells.
    pub fn covered_area(&self) -> u64 {
        self.cells.iter().map(|c| c.rect.area()).sum()
    }

    /// Area left to padding.
    pub fn padding_area(&self) -> u64 {
        self.cells
            .iter()
            .filter(|c| c.role == CellRole::Padding)
            .map(|c| c.rect.area())
            .sum()
    }
}

/// Plan a layout in the given style.
pub fn plan(style: LayoutStyle, colours: usize, canvas: u32) -> Result<GridPlan> {
    match style {
        LayoutStyle::Grid => plan_grid(colours, canvas),
        LayoutStyle::Classic => plan_classic(colours, canvas),
    }
}

/// Test helper: assert that a plan's cells tile the canvas exactly.
#[cfg(test)]
pub(crate) fn assert_partition(plan: &GridPlan) {
    let size = plan.canvas as usize;
    let mut hits = vec![0u8; size * size];
    for cell in &plan.cells {
        assert_eq!(cell.rect, cell.rect.clip(plan.canvas), "cell out of bounds: {:?}", cell);
        for y in cell.rect.y..cell.rect.bottom() {
            for x in cell.rect.x..cell.rect.right() {
                hits[y as usize * size + x as usize] += 1;
            }
        }
    }
    assert!(hits.iter().all(|&h| h == 1), "cells do not tile the canvas");
}
