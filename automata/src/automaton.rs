// automaton.rs - Synchronous stepping of a shared grid under one rule

use log::trace;

use crate::cell::CellState;
use crate::error::ConfigError;
use crate::grid::{Dimensionality, Grid, SharedGrid};
use crate::rule::{Neighborhood, Rule, moore_neighbors, ring_neighbors};

/// A rule bound to a grid.
///
/// `step()` computes the whole next generation into a private scratch buffer
/// from the current one, then swaps it in, so no cell ever sees a neighbour's
/// next state.
#[derive(Debug)]
pub struct Automaton {
    grid: SharedGrid,
    rule: Rule,
    next: Vec<CellState>,
    generation: u64,
}

impl Automaton {
    pub fn new(grid: SharedGrid, rule: Rule) -> Result<Self, ConfigError> {
        let (len, found) = {
            let g = grid.borrow();
            (g.len(), g.dimensionality())
        };
        if found != rule.dimensionality() {
            return Err(ConfigError::DimensionMismatch {
                rule: rule.name(),
                expected: rule.dimensionality(),
                found,
            });
        }
        Ok(Self {
            grid,
            rule,
            next: vec![CellState::Empty; len],
            generation: 0,
        })
    }

    /// Like [`Automaton::new`], but also insists on the grid's side length.
    pub fn with_side(grid: SharedGrid, rule: Rule, side: usize) -> Result<Self, ConfigError> {
        let found = grid.borrow().side();
        if found != side {
            return Err(ConfigError::SideMismatch { expected: side, found });
        }
        Self::new(grid, rule)
    }

    /// Advances the grid by exactly one generation.
    pub fn step(&mut self) {
        let mut grid = self.grid.borrow_mut();
        let rule = self.rule;
        let cells = grid.cells();
        let side = grid.side();

        match grid.dimensionality() {
            Dimensionality::One => {
                for (i, next) in self.next.iter_mut().enumerate() {
                    let (l, r) = ring_neighbors(i, side);
                    *next = rule.next_state(&Neighborhood::Line {
                        left: cells[l],
                        centre: cells[i],
                        right: cells[r],
                    });
                }
            }
            Dimensionality::Two => {
                for (i, next) in self.next.iter_mut().enumerate() {
                    let neighbors = moore_neighbors(i, side).map(|n| cells[n]);
                    *next = rule.next_state(&Neighborhood::Moore {
                        centre: cells[i],
                        neighbors,
                    });
                }
            }
        }

        grid.swap_cells(&mut self.next);
        self.generation += 1;
        trace!("{} advanced to generation {}", rule.name(), self.generation);
    }

    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The shared grid handle; clone it to attach another automaton.
    pub fn grid(&self) -> &SharedGrid {
        &self.grid
    }

    /// Empties the grid and restarts the generation count.
    pub fn clear(&mut self) {
        self.grid.borrow_mut().clear();
        self.generation = 0;
    }

    #[track_caller]
    pub fn paint(&mut self, index: usize, state: CellState) {
        self.grid.borrow_mut().set(index, state);
    }

    pub(crate) fn bump_generation(&mut self) {
        self.generation += 1;
    }

    pub(crate) fn with_grid_mut<R>(&mut self, f: impl FnOnce(&mut Grid) -> R) -> R {
        f(&mut *self.grid.borrow_mut())
    }
}
