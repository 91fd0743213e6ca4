//! Near-square grid layout.

use crate::error::{AtlasError, Result};

use super::{Cell, CellRole, GridPlan, LayoutStyle, Rect};

/// Plan a grid with one cell per colour.
///
/// Uses `cols = ceil(sqrt(n))` and `rows = ceil(n / cols)`, which keeps
/// `|rows - cols| <= 1`. Cells are `floor(canvas / cols)` by
/// `floor(canvas / rows)`; the integer remainder becomes a padding strip on
/// the right and bottom edges. Unused trailing grid slots are padding too.
pub fn plan_grid(colours: usize, canvas: u32) -> Result<GridPlan> {
    if colours == 0 {
        return Err(AtlasError::EmptyPalette);
    }

    let cols = ceil_sqrt(colours);
    let rows = colours.div_ceil(cols);

    if cols > canvas as usize || rows > canvas as usize {
        return Err(AtlasError::PaletteTooLarge {
            colours,
            canvas,
            detail: format!(
                "a {}x{} grid would need cells narrower than one pixel",
                cols, rows
            ),
        });
    }

    let (cols, rows) = (cols as u32, rows as u32);
    let cell_width = canvas / cols;
    let cell_height = canvas / rows;

    let mut cells = Vec::with_capacity((rows * cols) as usize + 2);
    for slot in 0..(rows * cols) as usize {
        let row = slot as u32 / cols;
        let col = slot as u32 % cols;
        let rect = Rect::new(col * cell_width, row * cell_height, cell_width, cell_height);
        let role = if slot < colours {
            CellRole::Gradient { index: slot }
        } else {
            CellRole::Padding
        };
        cells.push(Cell::new(rect, role));
    }

    let used_width = cols * cell_width;
    let used_height = rows * cell_height;
    if used_width < canvas {
        cells.push(Cell::new(
            Rect::new(used_width, 0, canvas - used_width, canvas),
            CellRole::Padding,
        ));
    }
    if used_height < canvas {
        cells.push(Cell::new(
            Rect::new(0, used_height, used_width, canvas - used_height),
            CellRole::Padding,
        ));
    }

    Ok(GridPlan {
        canvas,
        style: LayoutStyle::Grid,
        rows,
        cols,
        cell_width,
        cell_height,
        cells,
    })
}

/// Smallest `c` with `c * c >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c.max(1)
}
