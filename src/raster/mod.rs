//! Rasterization of paint jobs onto a canvas.
//!
//! Work is split by canvas row. Each worker owns its rows outright, so cells
//! can be painted in parallel without locks, and the output is identical to a
//! sequential pass. Every write is counted; `finish` rejects a canvas where
//! any pixel was written zero times or more than once.

mod canvas;

use rayon::prelude::*;

use crate::error::{AtlasError, Result};
use crate::gradient::{Axis, PaintJob};
use crate::layout::Rect;
use crate::types::Colour;

pub use canvas::Canvas;

/// Processing mode for rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing using the rayon global pool
    #[default]
    Parallel,
}

/// Paints jobs onto a canvas it owns.
pub struct Rasterizer {
    canvas: Canvas,
    coverage: Vec<u8>,
    mode: ProcessingMode,
}

impl Rasterizer {
    /// Allocate an empty `size`x`size` canvas.
    pub fn new(size: u32, mode: ProcessingMode) -> Self {
        Self {
            canvas: Canvas::new(size),
            coverage: vec![0; size as usize * size as usize],
            mode,
        }
    }

    /// Paint every job. Cell rects are clipped to the canvas.
    pub fn paint(&mut self, jobs: &[PaintJob]) {
        let size = self.canvas.size();
        if size == 0 {
            return;
        }

        let clipped: Vec<(Rect, &PaintJob)> = jobs
            .iter()
            .map(|job| (job.cell.rect.clip(size), job))
            .filter(|(rect, _)| !rect.is_empty())
            .collect();

        let width = size as usize;
        match self.mode {
            ProcessingMode::Sequential => {
                let rows = self
                    .canvas
                    .pixels_mut()
                    .chunks_mut(width)
                    .zip(self.coverage.chunks_mut(width));
                for (y, (row, hits)) in rows.enumerate() {
                    paint_row(y as u32, row, hits, &clipped);
                }
            }
            ProcessingMode::Parallel => {
                self.canvas
                    .pixels_mut()
                    .par_chunks_mut(width)
                    .zip(self.coverage.par_chunks_mut(width))
                    .enumerate()
                    .for_each(|(y, (row, hits))| paint_row(y as u32, row, hits, &clipped));
            }
        }
    }

    /// Check coverage and hand over the finished canvas.
    pub fn finish(self) -> Result<Canvas> {
        let unwritten = self.coverage.iter().filter(|&&h| h == 0).count();
        let overwritten = self.coverage.iter().filter(|&&h| h > 1).count();
        if unwritten > 0 || overwritten > 0 {
            return Err(AtlasError::IncompleteCoverage {
                unwritten,
                overwritten,
            });
        }
        Ok(self.canvas)
    }
}

fn paint_row(y: u32, row: &mut [Colour], hits: &mut [u8], jobs: &[(Rect, &PaintJob)]) {
    for (clip, job) in jobs {
        if y < clip.y || y >= clip.bottom() {
            continue;
        }
        let span = clip.x as usize..clip.right() as usize;
        let rect = &job.cell.rect;

        match job.fill.axis() {
            Some(Axis::Horizontal) => {
                for x in span.clone() {
                    row[x] = job.fill.colour_at(rect, x as u32, y);
                }
            }
            _ => {
                // Constant across the row
                row[span.clone()].fill(job.fill.colour_at(rect, clip.x, y));
            }
        }

        for hit in &mut hits[span] {
            *hit = hit.saturating_add(1);
        }
    }
}
