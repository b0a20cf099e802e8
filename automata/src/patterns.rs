// patterns.rs - Preset starting configurations and random fills

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cell::CellState;
use crate::grid::{Dimensionality, Grid};
use crate::rule::Rule;

/// A named starting configuration. `cells` are `(row, col)` offsets painted
/// with `fill`; `marks` are painted afterwards with their own states.
pub struct Pattern {
    pub name: &'static str,
    pub rules: &'static [Rule],
    pub fill: CellState,
    pub cells: &'static [(usize, usize)],
    pub marks: &'static [(usize, usize, CellState)],
}

impl Pattern {
    pub fn fits(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    /// `(rows, cols)` spanned by the pattern.
    pub fn extent(&self) -> (usize, usize) {
        let offsets = self
            .cells
            .iter()
            .copied()
            .chain(self.marks.iter().map(|&(r, c, _)| (r, c)));
        offsets.fold((0, 0), |(rows, cols), (r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }
}

const LIFE: &[Rule] = &[Rule::Life];
const ELEMENTARY: &[Rule] = &[Rule::RULE_30, Rule::RULE_90, Rule::RULE_110];

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Single cell",
        rules: ELEMENTARY,
        fill: CellState::Alive,
        cells: &[(0, 0)],
        marks: &[],
    },
    Pattern {
        name: "Glider",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        marks: &[],
    },
    Pattern {
        name: "Blinker",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[(0, 0), (0, 1), (0, 2)],
        marks: &[],
    },
    Pattern {
        name: "Toad",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        marks: &[],
    },
    Pattern {
        name: "Beacon",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
        marks: &[],
    },
    Pattern {
        name: "Pulsar",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12), (3, 0), (3, 5),
            (3, 7), (3, 12), (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12), (9, 0), (9, 5),
            (9, 7), (9, 12), (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
        marks: &[],
    },
    Pattern {
        name: "R-pentomino",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        marks: &[],
    },
    Pattern {
        name: "Gosper Glider Gun",
        rules: LIFE,
        fill: CellState::Alive,
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1), (4, 10), (5, 10),
            (6, 10), (3, 11), (7, 11), (2, 12), (8, 12), (2, 13),
            (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21),
            (3, 21), (4, 21), (1, 22), (5, 22), (0, 24), (1, 24),
            (5, 24), (6, 24), (2, 34), (3, 34), (2, 35), (3, 35),
        ],
        marks: &[],
    },
    Pattern {
        name: "Spark pair",
        rules: &[Rule::BriansBrain],
        fill: CellState::Firing,
        cells: &[(0, 0), (0, 1)],
        marks: &[],
    },
    Pattern {
        name: "Clock loop",
        rules: &[Rule::Wireworld],
        fill: CellState::Conductor,
        cells: &[
            (0, 3), (0, 4), (1, 0), (1, 5),
            (2, 1), (2, 2), (2, 3), (2, 4),
        ],
        marks: &[(0, 1, CellState::Tail), (0, 2, CellState::Head)],
    },
];

/// Clears `grid` and stamps `pattern` with its top-left corner at
/// `(row, col)`, wrapping around the edges. 1-D grids only take row 0 of
/// the pattern.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize) {
    grid.clear();

    let side = grid.side();
    let dim = grid.dimensionality();
    let stamps = pattern
        .cells
        .iter()
        .map(|&(r, c)| (r, c, pattern.fill))
        .chain(pattern.marks.iter().copied());

    for (r, c, state) in stamps {
        let index = match dim {
            Dimensionality::One if r == 0 => (col + c) % side,
            Dimensionality::One => continue,
            Dimensionality::Two => ((row + r) % side) * side + (col + c) % side,
        };
        grid.set(index, state);
    }
}

/// Like [`apply_pattern`], with the pattern centred on the grid.
pub fn apply_centred(grid: &mut Grid, pattern: &Pattern) {
    let side = grid.side();
    let (rows, cols) = pattern.extent();
    let row = match grid.dimensionality() {
        Dimensionality::One => 0,
        Dimensionality::Two => side.saturating_sub(rows) / 2,
    };
    apply_pattern(grid, pattern, row, side.saturating_sub(cols) / 2);
}

/// Deterministic pseudo-random fill. About a third of the cells get a
/// non-empty state from `alphabet`, the rest are Empty.
pub fn apply_random(grid: &mut Grid, seed_value: u64, alphabet: &[CellState]) {
    grid.clear();

    let live: Vec<CellState> = alphabet
        .iter()
        .copied()
        .filter(|&s| s != CellState::Empty)
        .collect();
    if live.is_empty() {
        return;
    }

    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for index in 0..grid.len() {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let roll = seed >> 33;
        if roll % 3 == 0 {
            grid.set(index, live[(roll / 3) as usize % live.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;

    #[test]
    fn every_pattern_fits_its_rules_dimension() {
        for pattern in PATTERNS {
            assert!(!pattern.rules.is_empty(), "{} has no rule", pattern.name);
            for rule in pattern.rules {
                if rule.dimensionality() == Dimensionality::One {
                    assert_eq!(pattern.extent().0, 1, "{} is not a row", pattern.name);
                }
                let states = pattern
                    .marks
                    .iter()
                    .map(|m| m.2)
                    .chain(std::iter::once(pattern.fill));
                for state in states {
                    assert!(rule.alphabet().contains(&state), "{} uses {state}", pattern.name);
                }
            }
        }
    }

    #[test]
    fn gosper_gun_extent() {
        let gun = PATTERNS.iter().find(|p| p.name == "Gosper Glider Gun").unwrap();
        assert_eq!(gun.extent(), (9, 36));
        assert_eq!(gun.cells.len(), 36);
    }

    #[test]
    fn stamp_wraps_around_edges() {
        let mut grid = Grid::new(5, Dimensionality::Two).unwrap();
        let blinker = &PATTERNS[2];
        apply_pattern(&mut grid, blinker, 4, 3);
        let alive: Vec<usize> = (0..grid.len())
            .filter(|&i| grid.get(i) == CellState::Alive)
            .collect();
        assert_eq!(alive, vec![20, 23, 24]);
    }

    #[test]
    fn centred_single_cell_on_a_line() {
        let mut grid = Grid::new(7, Dimensionality::One).unwrap();
        apply_centred(&mut grid, &PATTERNS[0]);
        assert_eq!(grid.get(3), CellState::Alive);
        assert_eq!(grid.count(CellState::Alive), 1);
    }

    #[test]
    fn clock_loop_keeps_one_electron() {
        let grid = Grid::shared(12, Dimensionality::Two).unwrap();
        let clock = PATTERNS.iter().find(|p| p.name == "Clock loop").unwrap();
        apply_centred(&mut grid.borrow_mut(), clock);
        let mut ca = Automaton::new(grid, Rule::Wireworld).unwrap();
        for _ in 0..30 {
            ca.step();
            let grid = ca.grid().borrow();
            assert_eq!(grid.count(CellState::Head), 1);
            assert_eq!(grid.count(CellState::Tail), 1);
            assert_eq!(grid.count(CellState::Conductor), 8);
        }
    }

    #[test]
    fn random_fill_is_deterministic_and_in_alphabet() {
        let mut a = Grid::new(16, Dimensionality::Two).unwrap();
        let mut b = Grid::new(16, Dimensionality::Two).unwrap();
        apply_random(&mut a, 7, Rule::Wireworld.alphabet());
        apply_random(&mut b, 7, Rule::Wireworld.alphabet());
        assert_eq!(a, b);
        assert!(!a.is_blank());
        assert!(a.cells().iter().all(|s| Rule::Wireworld.alphabet().contains(s)));
    }
}
