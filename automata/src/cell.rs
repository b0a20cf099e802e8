// cell.rs - The cell alphabet shared by every automaton

use std::fmt;

/// State of a single grid cell. Each rule only reads and writes its own subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Alive,
    Firing,
    Decaying,
    Head,
    Tail,
    Conductor,
}

impl CellState {
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Alive,
        CellState::Firing,
        CellState::Decaying,
        CellState::Head,
        CellState::Tail,
        CellState::Conductor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellState::Empty     => "Empty",
            CellState::Alive     => "Alive",
            CellState::Firing    => "Firing",
            CellState::Decaying  => "Decaying",
            CellState::Head      => "Head",
            CellState::Tail      => "Tail",
            CellState::Conductor => "Conductor",
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
