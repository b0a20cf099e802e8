// grid.rs - Flat cell buffer shared by the automata

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::CellState;
use crate::error::ConfigError;

/// Number of axes a grid spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensionality {
    One,
    Two,
}

impl Dimensionality {
    pub fn exponent(self) -> u32 {
        match self {
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-D", self.exponent())
    }
}

/// Largest number of cells a grid may hold (an 8192x8192 plane).
pub const MAX_CELLS: usize = 1 << 26;

/// Handle to a grid that several automata may read and write.
pub type SharedGrid = Rc<RefCell<Grid>>;

/// Fixed-size buffer of `side^dim` cells. 2-D grids are row-major:
/// `index(row, col) = row * side + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    side: usize,
    dim: Dimensionality,
}

impl Grid {
    pub fn new(side: usize, dim: Dimensionality) -> Result<Self, ConfigError> {
        if side == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let len = side
            .checked_pow(dim.exponent())
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(ConfigError::GridTooLarge { side, dim })?;
        Ok(Self {
            cells: vec![CellState::Empty; len],
            side,
            dim,
        })
    }

    /// Builds a grid wrapped for sharing between automata.
    pub fn shared(side: usize, dim: Dimensionality) -> Result<SharedGrid, ConfigError> {
        Ok(Rc::new(RefCell::new(Self::new(side, dim)?)))
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> CellState {
        self.check(index);
        self.cells[index]
    }

    #[track_caller]
    pub fn set(&mut self, index: usize, state: CellState) {
        self.check(index);
        self.cells[index] = state;
    }

    /// `(side length, dimensionality)`
    pub fn size(&self) -> (usize, Dimensionality) {
        (self.side, self.dim)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.dim
    }

    /// Logical cell count, `side^dim`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether every cell is `Empty`.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == CellState::Empty)
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Linear index of `(row, col)`. A 1-D grid only has row 0.
    #[track_caller]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        match self.dim {
            Dimensionality::One => {
                assert!(
                    row == 0 && col < self.side,
                    "cell (row {row}, col {col}) outside 1-D grid of length {}",
                    self.side
                );
                col
            }
            Dimensionality::Two => {
                assert!(
                    row < self.side && col < self.side,
                    "cell (row {row}, col {col}) outside {0}x{0} grid",
                    self.side
                );
                row * self.side + col
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Exchanges the cell buffer with a freshly computed generation.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<CellState>) {
        assert_eq!(next.len(), self.cells.len(), "generation buffer has the wrong length");
        std::mem::swap(&mut self.cells, next);
    }

    #[track_caller]
    fn check(&self, index: usize) {
        assert!(
            index < self.cells.len(),
            "cell index {index} out of range for {} grid of side {} ({} cells)",
            self.dim,
            self.side,
            self.cells.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(8, Dimensionality::Two).unwrap();
        assert_eq!(grid.len(), 64);
        assert_eq!(grid.size(), (8, Dimensionality::Two));
        assert!(grid.is_blank());

        let line = Grid::new(8, Dimensionality::One).unwrap();
        assert_eq!(line.len(), 8);
    }

    #[test]
    fn zero_side_is_rejected() {
        assert_eq!(Grid::new(0, Dimensionality::One), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn huge_side_is_rejected() {
        let err = Grid::new(usize::MAX, Dimensionality::Two).unwrap_err();
        assert!(matches!(err, ConfigError::GridTooLarge { .. }));
    }

    #[test]
    fn sides_past_the_cell_limit_are_rejected() {
        let err = Grid::new(200_000, Dimensionality::Two).unwrap_err();
        assert_eq!(err, ConfigError::GridTooLarge { side: 200_000, dim: Dimensionality::Two });
        assert!(Grid::new(200_000, Dimensionality::One).is_ok());
    }

    #[test]
    fn writes_are_visible_immediately() {
        let mut grid = Grid::new(4, Dimensionality::Two).unwrap();
        let index = grid.index_of(2, 3);
        assert_eq!(index, 11);
        grid.set(index, CellState::Head);
        assert_eq!(grid.get(11), CellState::Head);
        assert_eq!(grid.count(CellState::Head), 1);

        grid.clear();
        assert!(grid.is_blank());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let grid = Grid::new(4, Dimensionality::Two).unwrap();
        grid.get(16);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut grid = Grid::new(5, Dimensionality::One).unwrap();
        grid.set(5, CellState::Alive);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn index_of_does_not_wrap() {
        let grid = Grid::new(4, Dimensionality::Two).unwrap();
        grid.index_of(0, 4);
    }

    #[test]
    fn shared_grid_aliases_one_buffer() {
        let shared = Grid::shared(3, Dimensionality::Two).unwrap();
        let other = Rc::clone(&shared);
        shared.borrow_mut().set(4, CellState::Alive);
        assert_eq!(other.borrow().get(4), CellState::Alive);
    }
}
