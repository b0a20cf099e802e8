// ant.rs - Langton's Ant, an agent that rewrites the grid it walks on

use log::trace;

use crate::automaton::Automaton;
use crate::cell::CellState;
use crate::error::ConfigError;
use crate::grid::{Dimensionality, Grid, SharedGrid};

/// Direction the ant faces, in screen coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    #[default]
    East,
    South,
    West,
    North,
}

impl Heading {
    /// Unit step `(dx, dy)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Heading::East  => (1, 0),
            Heading::South => (0, 1),
            Heading::West  => (-1, 0),
            Heading::North => (0, -1),
        }
    }

    /// Quarter turn clockwise as seen on screen.
    pub fn clockwise(self) -> Self {
        match self {
            Heading::East  => Heading::South,
            Heading::South => Heading::West,
            Heading::West  => Heading::North,
            Heading::North => Heading::East,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Heading::East  => Heading::North,
            Heading::North => Heading::West,
            Heading::West  => Heading::South,
            Heading::South => Heading::East,
        }
    }
}

/// The ant: a position on a square torus and a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ant {
    x: usize,
    y: usize,
    heading: Heading,
}

impl Ant {
    pub fn new(x: usize, y: usize, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// An east-facing ant in the middle of a grid of side `side`.
    pub fn centred(side: usize) -> Self {
        Self::new(side / 2, side / 2, Heading::East)
    }

    /// `(x, y)`: column then row.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Linear index of the ant's cell on a grid of side `side`.
    pub fn index(&self, side: usize) -> usize {
        self.y * side + self.x
    }

    /// One move: turn on the current cell, flip it, then walk forward.
    ///
    /// Alive turns clockwise and leaves Empty; anything else turns
    /// counter-clockwise and leaves Alive.
    pub fn advance(&mut self, grid: &mut Grid) {
        let side = grid.side();
        let here = grid.index_of(self.y, self.x);

        if grid.get(here) == CellState::Alive {
            self.heading = self.heading.clockwise();
            grid.set(here, CellState::Empty);
        } else {
            self.heading = self.heading.counter_clockwise();
            grid.set(here, CellState::Alive);
        }

        let (dx, dy) = self.heading.delta();
        self.x = wrap(self.x, dx, side);
        self.y = wrap(self.y, dy, side);
    }
}

fn wrap(pos: usize, delta: isize, side: usize) -> usize {
    (pos as isize + delta).rem_euclid(side as isize) as usize
}

/// A binary 2-D automaton driven by an ant instead of its per-cell rule.
///
/// Each `step()` moves the ant once; no other cell changes. The wrapped
/// automaton stays reachable through [`AntAutomaton::base_mut`] and can be
/// stepped on its own.
#[derive(Debug)]
pub struct AntAutomaton {
    base: Automaton,
    ant: Ant,
    start: Ant,
}

impl AntAutomaton {
    pub fn new(base: Automaton, ant: Ant) -> Result<Self, ConfigError> {
        let rule = base.rule();
        if rule.dimensionality() != Dimensionality::Two
            || rule.alphabet() != [CellState::Empty, CellState::Alive]
        {
            return Err(ConfigError::NonBinaryAntBase { rule: rule.name() });
        }
        let side = base.grid().borrow().side();
        let (x, y) = ant.position();
        if x >= side || y >= side {
            return Err(ConfigError::AntOutOfBounds { x, y, side });
        }
        Ok(Self {
            base,
            ant,
            start: ant,
        })
    }

    pub fn step(&mut self) {
        let ant = &mut self.ant;
        self.base.with_grid_mut(|grid| ant.advance(grid));
        self.base.bump_generation();
        trace!(
            "ant at {:?} heading {:?} (generation {})",
            self.ant.position(),
            self.ant.heading(),
            self.base.generation()
        );
    }

    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    /// Puts the ant back where it started.
    pub fn reset_ant(&mut self) {
        self.ant = self.start;
    }

    pub fn base(&self) -> &Automaton {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Automaton {
        &mut self.base
    }

    pub fn grid(&self) -> &SharedGrid {
        self.base.grid()
    }

    pub fn generation(&self) -> u64 {
        self.base.generation()
    }

    pub fn reset_generation(&mut self) {
        self.base.reset_generation();
    }

    /// Empties the grid, restarts the generation count and returns the ant
    /// to where it started.
    pub fn clear(&mut self) {
        self.base.clear();
        self.reset_ant();
    }
}
