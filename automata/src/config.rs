// config.rs - Session configuration

use crate::ant::Ant;
use crate::cell::CellState;
use crate::session::AutomatonId;

/// Side length of the shared 2-D grid.
pub const DEFAULT_SIDE: usize = 128;
/// Lengths of the elementary automata's rings.
pub const DEFAULT_RULE_30_LEN: usize = 512;
pub const DEFAULT_RULE_90_LEN: usize = 512;
pub const DEFAULT_RULE_110_LEN: usize = 256;

/// Everything needed to build a [`Session`](crate::session::Session).
///
/// Automata whose grids have the same side length and dimensionality share
/// one buffer, so with the defaults Rule 30 and Rule 90 paint on the same
/// ring and all 2-D automata paint on the same plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub side: usize,
    pub rule30_len: usize,
    pub rule90_len: usize,
    pub rule110_len: usize,
    pub active: AutomatonId,
    pub paintbrush: CellState,
    /// Frames to wait between generations while running; 0 is fastest.
    pub speed: u32,
    /// Starting ant; `None` puts an east-facing ant in the centre.
    pub ant: Option<Ant>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            rule30_len: DEFAULT_RULE_30_LEN,
            rule90_len: DEFAULT_RULE_90_LEN,
            rule110_len: DEFAULT_RULE_110_LEN,
            active: AutomatonId::LangtonsAnt,
            paintbrush: CellState::Alive,
            speed: 0,
            ant: None,
        }
    }
}

impl SessionConfig {
    /// Length of the grid used by `id`.
    pub fn side_for(&self, id: AutomatonId) -> usize {
        match id {
            AutomatonId::Rule30 => self.rule30_len,
            AutomatonId::Rule90 => self.rule90_len,
            AutomatonId::Rule110 => self.rule110_len,
            AutomatonId::Life
            | AutomatonId::BriansBrain
            | AutomatonId::Wireworld
            | AutomatonId::LangtonsAnt => self.side,
        }
    }
}
