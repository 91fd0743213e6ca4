//! Classic atlas layout.
//!
//! ```text
//! +--------------------------------+---+
//! | swatches (top band)            | s |
//! |                                | p |
//! +---+---+---+-- ... --+---+------+ e |
//! | E | N | N |         | N | N    | c |
//! +---+---+---+-- ... --+---+------+ t |
//! | M | M | M |         | M | M    | r |
//! +---+---+---+-- ... --+---+------+ um|
//! ```
//!
//! `E` is the lightest-to-darkest ramp, `N` neighbour ramps, `M` mixed ramps.
//! Measurements are nominal for a 2048 canvas and scale linearly otherwise.

use crate::error::{AtlasError, Result};

use super::{Cell, CellRole, GridPlan, LayoutStyle, Rect, ATLAS_SIZE};

/// Nominal width of the spectrum strip.
const SPECTRUM_WIDTH: u32 = 100;
/// Height of the swatch band.
const SWATCH_BAND: u32 = 600;
/// Preferred swatch edge.
const TARGET_SWATCH: u32 = 100;
/// Gradient columns per bottom row.
pub const GRADIENT_COLUMNS: u32 = 12;

fn scaled(nominal: u32, canvas: u32) -> u32 {
    (nominal as u64 * canvas as u64 / ATLAS_SIZE as u64) as u32
}

/// Plan the classic layout for `colours` swatches.
pub fn plan_classic(colours: usize, canvas: u32) -> Result<GridPlan> {
    if colours == 0 {
        return Err(AtlasError::EmptyPalette);
    }

    let too_large = |detail: String| AtlasError::PaletteTooLarge {
        colours,
        canvas,
        detail,
    };

    let band = scaled(SWATCH_BAND, canvas);
    let target = scaled(TARGET_SWATCH, canvas).max(1);
    let gradient_width = canvas.saturating_sub(scaled(SPECTRUM_WIDTH, canvas)) / GRADIENT_COLUMNS;
    let gradient_height = (canvas - band) / 2;
    if gradient_width == 0 || gradient_height == 0 || band == 0 {
        return Err(too_large("canvas is too small for the classic layout".to_string()));
    }
    let content_width = gradient_width * GRADIENT_COLUMNS;

    // Swatch grid
    let cols = (content_width / target).min(colours.min(u32::MAX as usize) as u32);
    if cols == 0 {
        return Err(too_large("no room for a swatch column".to_string()));
    }
    let rows = (colours as u64).div_ceil(cols as u64);
    if rows > band as u64 {
        return Err(too_large(format!(
            "{} swatch rows do not fit in a {}px band",
            rows, band
        )));
    }
    let rows = rows as u32;
    let square_width = content_width / cols;
    let extra = content_width % cols;
    let square_height = square_width.min(band / rows);

    let mut cells = Vec::with_capacity(colours + 2 * GRADIENT_COLUMNS as usize + 4);
    for slot in 0..(rows * cols) as usize {
        let row = slot as u32 / cols;
        let col = slot as u32 % cols;
        let x = col * square_width + col.min(extra);
        let width = square_width + u32::from(col < extra);
        let rect = Rect::new(x, row * square_height, width, square_height);
        let role = if slot < colours {
            CellRole::Swatch { index: slot }
        } else {
            CellRole::Padding
        };
        cells.push(Cell::new(rect, role));
    }

    let swatch_bottom = rows * square_height;
    if swatch_bottom < band {
        cells.push(Cell::new(
            Rect::new(0, swatch_bottom, content_width, band - swatch_bottom),
            CellRole::Padding,
        ));
    }

    cells.push(Cell::new(
        Rect::new(content_width, 0, canvas - content_width, canvas),
        CellRole::Spectrum,
    ));

    for col in 0..GRADIENT_COLUMNS {
        let role = if col == 0 {
            CellRole::Extremes
        } else {
            CellRole::Neighbours { slot: col as usize }
        };
        cells.push(Cell::new(
            Rect::new(col * gradient_width, band, gradient_width, gradient_height),
            role,
        ));
    }
    for col in 0..GRADIENT_COLUMNS {
        cells.push(Cell::new(
            Rect::new(
                col * gradient_width,
                band + gradient_height,
                gradient_width,
                gradient_height,
            ),
            CellRole::Mixed { slot: col as usize },
        ));
    }

    let gradients_bottom = band + 2 * gradient_height;
    if gradients_bottom < canvas {
        cells.push(Cell::new(
            Rect::new(0, gradients_bottom, content_width, canvas - gradients_bottom),
            CellRole::Padding,
        ));
    }

    Ok(GridPlan {
        canvas,
        style: LayoutStyle::Classic,
        rows,
        cols,
        cell_width: square_width,
        cell_height: square_height,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::assert_partition;
    use pretty_assertions::assert_eq;

    fn find(plan: &GridPlan, role: CellRole) -> Rect {
        plan.cells
            .iter()
            .find(|c| c.role == role)
            .map(|c| c.rect)
            .unwrap()
    }

    #[test]
    fn test_reference_geometry() {
        let plan = plan_classic(32, 2048).unwrap();

        // 12 columns of 162px leave a 104px spectrum strip
        assert_eq!(find(&plan, CellRole::Spectrum), Rect::new(1944, 0, 104, 2048));
        assert_eq!(find(&plan, CellRole::Extremes), Rect::new(0, 600, 162, 724));
        assert_eq!(
            find(&plan, CellRole::Neighbours { slot: 11 }),
            Rect::new(1782, 600, 162, 724)
        );
        assert_eq!(
            find(&plan, CellRole::Mixed { slot: 0 }),
            Rect::new(0, 1324, 162, 724)
        );

        // 1944 / 100 = 19 columns, 2 rows
        assert_eq!((plan.cols, plan.rows), (19, 2));
        assert_eq!(plan.cell_width, 102);
        assert_eq!(plan.cell_height, 102);
        assert_partition(&plan);
    }

    #[test]
    fn test_remainder_widens_leading_swatches() {
        let plan = plan_classic(32, 2048).unwrap();
        // 1944 = 19 * 102 + 6
        let widths: Vec<u32> = plan
            .palette_cells()
            .take(19)
            .map(|(_, c)| c.rect.width)
            .collect();
        assert_eq!(widths.iter().filter(|&&w| w == 103).count(), 6);
        assert_eq!(widths.iter().sum::<u32>(), 1944);
        assert_eq!(plan.cells[6].rect.x, 6 * 103);
    }

    #[test]
    fn test_few_colours_single_row() {
        let plan = plan_classic(3, 2048).unwrap();
        assert_eq!((plan.cols, plan.rows), (3, 1));
        assert_eq!(plan.cell_width, 648);
        // Height is capped by the band
        assert_eq!(plan.cell_height, 600);
        assert_partition(&plan);
    }

    #[test]
    fn test_many_colours_shrink_swatches() {
        let plan = plan_classic(256, 2048).unwrap();
        assert_eq!((plan.cols, plan.rows), (19, 14));
        assert_eq!(plan.cell_height, 42);
        assert_eq!(plan.palette_cells().count(), 256);
        assert_partition(&plan);
    }

    #[test]
    fn test_scaled_canvas_tiles() {
        for n in [1, 4, 9, 20] {
            assert_partition(&plan_classic(n, 512).unwrap());
        }
    }

    #[test]
    fn test_too_many_colours() {
        assert!(matches!(
            plan_classic(19 * 601, 2048),
            Err(AtlasError::PaletteTooLarge { .. })
        ));
        assert!(plan_classic(19 * 600, 2048).is_ok());
    }

    #[test]
    fn test_tiny_canvas_rejected() {
        assert!(matches!(
            plan_classic(4, 8),
            Err(AtlasError::PaletteTooLarge { .. })
        ));
    }
}
