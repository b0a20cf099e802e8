// render.rs - Turns the active grid into pixels
//
// 2-D grids map one cell to one texel. 1-D grids are drawn as a space-time
// diagram: the current row at the bottom, earlier generations above it.

use std::collections::VecDeque;

use automata::{CellState, Dimensionality, Grid};
use egui::{Color32, ColorImage};

use crate::palette;

/// Earlier generations of a 1-D automaton, newest first.
#[derive(Debug, Default)]
pub struct History {
    rows: VecDeque<Vec<CellState>>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, row: Vec<CellState>) {
        if self.capacity == 0 {
            return;
        }
        if self.rows.len() == self.capacity {
            self.rows.pop_back();
        }
        self.rows.push_front(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.rows.truncate(capacity);
    }
}

pub fn grid_image(grid: &Grid, history: &History) -> ColorImage {
    let side = grid.side();
    match grid.dimensionality() {
        Dimensionality::Two => ColorImage {
            size: [side, side],
            pixels: grid.cells().iter().map(|&s| palette::color(s)).collect(),
        },
        Dimensionality::One => {
            let rows = side;
            let mut image = ColorImage::new([side, rows], Color32::BLACK);
            let current = std::iter::once(grid.cells());
            let past = history.rows.iter().map(|row| row.as_slice());
            for (age, row) in current.chain(past).take(rows).enumerate() {
                let y = rows - 1 - age;
                for (x, &state) in row.iter().enumerate().take(side) {
                    image.pixels[y * side + x] = palette::color(state);
                }
            }
            image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_drops_oldest_rows() {
        let mut history = History::new(2);
        history.push(vec![CellState::Alive]);
        history.push(vec![CellState::Empty]);
        history.push(vec![CellState::Alive]);
        assert_eq!(history.rows.len(), 2);
        assert_eq!(history.rows[1], vec![CellState::Empty]);
    }

    #[test]
    fn plane_maps_cell_to_texel() {
        let mut grid = Grid::new(3, Dimensionality::Two).unwrap();
        grid.set(grid.index_of(1, 2), CellState::Conductor);
        let image = grid_image(&grid, &History::default());
        assert_eq!(image.size, [3, 3]);
        assert_eq!(image.pixels[5], palette::color(CellState::Conductor));
        assert_eq!(image.pixels[0], Color32::BLACK);
    }

    #[test]
    fn line_draws_current_generation_at_the_bottom() {
        let mut grid = Grid::new(4, Dimensionality::One).unwrap();
        grid.set(1, CellState::Alive);
        let mut history = History::new(3);
        history.push(vec![CellState::Alive, CellState::Empty, CellState::Empty, CellState::Empty]);

        let image = grid_image(&grid, &history);
        assert_eq!(image.size, [4, 4]);
        assert_eq!(image.pixels[3 * 4 + 1], Color32::WHITE);
        assert_eq!(image.pixels[2 * 4], Color32::WHITE);
        assert!(image.pixels[..8].iter().all(|&p| p == Color32::BLACK));
    }
}
