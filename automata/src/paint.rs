// paint.rs - Pointer-to-cell mapping and line painting geometry

use crate::grid::Dimensionality;

/// A cell address in grid units. 1-D grids only use `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

impl CellCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Cell under a pointer at `(x, y)` relative to the grid's top-left corner.
///
/// Returns `None` for pointers left of or above the grid. Whether the cell
/// is past the far edge depends on the grid, so that is left to
/// [`cell_to_index`].
pub fn pointer_to_cell(x: f32, y: f32, cell_width: f32, cell_height: f32) -> Option<CellCoord> {
    if x < 0.0 || y < 0.0 || cell_width <= 0.0 || cell_height <= 0.0 {
        return None;
    }
    Some(CellCoord::new(
        (x / cell_width).floor() as usize,
        (y / cell_height).floor() as usize,
    ))
}

/// Linear index of `coord`: `row * side + col` on a 2-D grid, `col` on a
/// 1-D one. Panics when the cell is off the grid.
#[track_caller]
pub fn cell_to_index(coord: CellCoord, side: usize, dim: Dimensionality) -> usize {
    assert!(
        coord.col < side,
        "column {} outside grid of side {side}",
        coord.col
    );
    match dim {
        Dimensionality::One => coord.col,
        Dimensionality::Two => {
            assert!(coord.row < side, "row {} outside grid of side {side}", coord.row);
            coord.row * side + coord.col
        }
    }
}

/// Whether `coord` lies on a grid of the given extent.
pub fn contains(coord: CellCoord, side: usize, dim: Dimensionality) -> bool {
    match dim {
        Dimensionality::One => coord.col < side,
        Dimensionality::Two => coord.col < side && coord.row < side,
    }
}

/// Cells sampled along the segment from `from` to `to`, both included.
///
/// Takes N + 1 evenly spaced samples, N being the larger of the column and
/// row distances, and rounds each interpolated point to the nearest cell.
pub fn line_cells(from: CellCoord, to: CellCoord) -> Vec<CellCoord> {
    let steps = diag(from, to);
    (0..=steps)
        .map(|i| {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            CellCoord::new(
                lerp(from.col as f32, to.col as f32, t).round() as usize,
                lerp(from.row as f32, to.row as f32, t).round() as usize,
            )
        })
        .collect()
}

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + t * (end - start)
}

fn diag(a: CellCoord, b: CellCoord) -> usize {
    a.col.abs_diff(b.col).max(a.row.abs_diff(b.row))
}
