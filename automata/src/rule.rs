// rule.rs - Transition rules and neighbour indexing
//
// A rule is a pure function from a cell's neighbourhood in generation N to
// its state in generation N+1. The rule set is closed, so it is an enum.

use crate::cell::CellState;
use crate::grid::Dimensionality;

/// The cells a rule looks at, read from the previous generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// 1-D ring neighbourhood.
    Line {
        left: CellState,
        centre: CellState,
        right: CellState,
    },
    /// 2-D Moore neighbourhood, neighbours in the order
    /// NW, N, NE, W, E, SW, S, SE.
    Moore {
        centre: CellState,
        neighbors: [CellState; 8],
    },
}

/// Wolfram elementary rule: bit `k` of the rule number is the next state of
/// a cell whose (left, centre, right) neighbourhood spells `k` in binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementaryRule(pub u8);

impl ElementaryRule {
    /// The 8-entry lookup table, indexed by the 3-bit neighbourhood key.
    pub fn table(self) -> [CellState; 8] {
        std::array::from_fn(|key| {
            if (self.0 >> key) & 1 == 1 {
                CellState::Alive
            } else {
                CellState::Empty
            }
        })
    }

    pub fn next_state(self, left: CellState, centre: CellState, right: CellState) -> CellState {
        let key = (left.is_alive() as usize) << 2
            | (centre.is_alive() as usize) << 1
            | (right.is_alive() as usize);
        self.table()[key]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Elementary(ElementaryRule),
    Life,
    BriansBrain,
    Wireworld,
}

const BINARY: &[CellState] = &[CellState::Empty, CellState::Alive];
const BRIAN: &[CellState] = &[CellState::Empty, CellState::Firing, CellState::Decaying];
const WIRES: &[CellState] = &[
    CellState::Empty,
    CellState::Head,
    CellState::Tail,
    CellState::Conductor,
];

impl Rule {
    pub const RULE_30: Rule = Rule::Elementary(ElementaryRule(30));
    pub const RULE_90: Rule = Rule::Elementary(ElementaryRule(90));
    pub const RULE_110: Rule = Rule::Elementary(ElementaryRule(110));

    pub fn dimensionality(self) -> Dimensionality {
        match self {
            Rule::Elementary(_) => Dimensionality::One,
            Rule::Life | Rule::BriansBrain | Rule::Wireworld => Dimensionality::Two,
        }
    }

    /// States this rule produces. Anything else found in a grid is read as
    /// `Empty`.
    pub fn alphabet(self) -> &'static [CellState] {
        match self {
            Rule::Elementary(_) | Rule::Life => BINARY,
            Rule::BriansBrain => BRIAN,
            Rule::Wireworld => WIRES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Elementary(ElementaryRule(30)) => "Rule 30",
            Rule::Elementary(ElementaryRule(90)) => "Rule 90",
            Rule::Elementary(ElementaryRule(110)) => "Rule 110",
            Rule::Elementary(_) => "Elementary",
            Rule::Life => "Game of Life",
            Rule::BriansBrain => "Brian's Brain",
            Rule::Wireworld => "Wireworld",
        }
    }

    /// Next state of the centre cell.
    ///
    /// Panics if the neighbourhood shape does not match the rule's
    /// dimensionality; automata check this when they are built.
    pub fn next_state(self, neighborhood: &Neighborhood) -> CellState {
        match (self, neighborhood) {
            (Rule::Elementary(rule), &Neighborhood::Line { left, centre, right }) => {
                rule.next_state(left, centre, right)
            }
            (Rule::Life, Neighborhood::Moore { centre, neighbors }) => {
                life(*centre, count(neighbors, CellState::Alive))
            }
            (Rule::BriansBrain, Neighborhood::Moore { centre, neighbors }) => {
                brians_brain(*centre, count(neighbors, CellState::Firing))
            }
            (Rule::Wireworld, Neighborhood::Moore { centre, neighbors }) => {
                wireworld(*centre, count(neighbors, CellState::Head))
            }
            (rule, shape) => panic!("{} cannot evaluate neighbourhood {shape:?}", rule.name()),
        }
    }
}

fn count(neighbors: &[CellState; 8], state: CellState) -> usize {
    neighbors.iter().filter(|&&n| n == state).count()
}

fn life(centre: CellState, alive: usize) -> CellState {
    match (centre.is_alive(), alive) {
        (true, 2) | (true, 3) => CellState::Alive, // Survival
        (false, 3)            => CellState::Alive, // Birth
        _                     => CellState::Empty,
    }
}

fn brians_brain(centre: CellState, firing: usize) -> CellState {
    match centre {
        CellState::Firing   => CellState::Decaying,
        CellState::Decaying => CellState::Empty,
        _ if firing == 2    => CellState::Firing,
        _                   => CellState::Empty,
    }
}

fn wireworld(centre: CellState, heads: usize) -> CellState {
    match centre {
        CellState::Head                                 => CellState::Tail,
        CellState::Tail                                 => CellState::Conductor,
        CellState::Conductor if heads == 1 || heads == 2 => CellState::Head,
        CellState::Conductor                            => CellState::Conductor,
        _                                               => CellState::Empty,
    }
}

/// Indices of the left and right neighbours of `index` on a ring of length `len`.
#[track_caller]
pub fn ring_neighbors(index: usize, len: usize) -> (usize, usize) {
    assert!(index < len, "cell index {index} out of range for ring of length {len}");
    ((index + len - 1) % len, (index + 1) % len)
}

/// Indices of the eight Moore neighbours of `index` on a `side`x`side` torus,
/// in the order NW, N, NE, W, E, SW, S, SE.
#[track_caller]
pub fn moore_neighbors(index: usize, side: usize) -> [usize; 8] {
    assert!(
        index < side * side,
        "cell index {index} out of range for {side}x{side} torus"
    );
    let row = index / side;
    let col = index % side;
    let up = (row + side - 1) % side;
    let down = (row + 1) % side;
    let left = (col + side - 1) % side;
    let right = (col + 1) % side;
    [
        up * side + left,   up * side + col,   up * side + right,
        row * side + left,                     row * side + right,
        down * side + left, down * side + col, down * side + right,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    fn moore(centre: CellState, states: &[CellState]) -> Neighborhood {
        let mut neighbors = [Empty; 8];
        neighbors[..states.len()].copy_from_slice(states);
        Neighborhood::Moore { centre, neighbors }
    }

    #[test]
    fn elementary_tables_match_rule_numbers() {
        // 30 = 0b0001_1110
        assert_eq!(
            ElementaryRule(30).table(),
            [Empty, Alive, Alive, Alive, Alive, Empty, Empty, Empty]
        );
        // 90 = 0b0101_1010
        assert_eq!(
            ElementaryRule(90).table(),
            [Empty, Alive, Empty, Alive, Alive, Empty, Alive, Empty]
        );
        // 110 = 0b0110_1110
        assert_eq!(
            ElementaryRule(110).table(),
            [Empty, Alive, Alive, Alive, Empty, Alive, Alive, Empty]
        );
    }

    #[test]
    fn elementary_key_has_left_as_high_bit() {
        let rule = ElementaryRule(0b0001_0000); // only key 100 lives
        assert_eq!(rule.next_state(Alive, Empty, Empty), Alive);
        assert_eq!(rule.next_state(Empty, Empty, Alive), Empty);
    }

    #[test]
    fn life_birth_and_survival() {
        assert_eq!(Rule::Life.next_state(&moore(Empty, &[Alive; 3])), Alive);
        assert_eq!(Rule::Life.next_state(&moore(Empty, &[Alive; 2])), Empty);
        assert_eq!(Rule::Life.next_state(&moore(Alive, &[Alive; 2])), Alive);
        assert_eq!(Rule::Life.next_state(&moore(Alive, &[Alive; 3])), Alive);
        assert_eq!(Rule::Life.next_state(&moore(Alive, &[Alive; 1])), Empty);
        assert_eq!(Rule::Life.next_state(&moore(Alive, &[Alive; 4])), Empty);
    }

    #[test]
    fn brians_brain_cycle() {
        let rule = Rule::BriansBrain;
        assert_eq!(rule.next_state(&moore(Empty, &[Firing; 2])), Firing);
        assert_eq!(rule.next_state(&moore(Empty, &[Firing; 3])), Empty);
        assert_eq!(rule.next_state(&moore(Firing, &[Firing; 2])), Decaying);
        assert_eq!(rule.next_state(&moore(Decaying, &[Firing; 2])), Empty);
    }

    #[test]
    fn wireworld_transitions() {
        let rule = Rule::Wireworld;
        assert_eq!(rule.next_state(&moore(Head, &[])), Tail);
        assert_eq!(rule.next_state(&moore(Tail, &[Head])), Conductor);
        assert_eq!(rule.next_state(&moore(Conductor, &[Head])), Head);
        assert_eq!(rule.next_state(&moore(Conductor, &[Head, Head])), Head);
        assert_eq!(rule.next_state(&moore(Conductor, &[Head, Head, Head])), Conductor);
        assert_eq!(rule.next_state(&moore(Empty, &[Head, Head])), Empty);
    }

    #[test]
    fn foreign_states_read_as_empty() {
        assert_eq!(Rule::BriansBrain.next_state(&moore(Conductor, &[])), Empty);
        assert_eq!(Rule::Wireworld.next_state(&moore(Alive, &[Head])), Empty);
        assert_eq!(Rule::Life.next_state(&moore(Firing, &[Alive; 3])), Alive);
    }

    #[test]
    #[should_panic(expected = "cannot evaluate")]
    fn wrong_shape_panics() {
        Rule::Life.next_state(&Neighborhood::Line {
            left: Empty,
            centre: Empty,
            right: Empty,
        });
    }

    #[test]
    fn ring_wraps_at_both_ends() {
        assert_eq!(ring_neighbors(0, 7), (6, 1));
        assert_eq!(ring_neighbors(6, 7), (5, 0));
        assert_eq!(ring_neighbors(3, 7), (2, 4));
    }

    #[test]
    fn moore_wraps_on_torus() {
        // corner (0, 0) on a 4x4 torus
        assert_eq!(moore_neighbors(0, 4), [15, 12, 13, 3, 1, 7, 4, 5]);
        // interior (1, 1)
        assert_eq!(moore_neighbors(5, 4), [0, 1, 2, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn alphabets_and_dimensions() {
        assert_eq!(Rule::RULE_110.dimensionality(), Dimensionality::One);
        assert_eq!(Rule::Wireworld.dimensionality(), Dimensionality::Two);
        assert_eq!(Rule::Life.alphabet(), &[Empty, Alive]);
        assert!(Rule::BriansBrain.alphabet().contains(&Decaying));
        assert_eq!(Rule::RULE_90.name(), "Rule 90");
    }
}
