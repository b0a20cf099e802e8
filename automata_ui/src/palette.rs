// palette.rs - Fixed colour for every cell state

use automata::CellState;
use egui::Color32;

/// Colour painted over the cell the ant stands on.
pub const ANT: Color32 = Color32::from_rgb(255, 0, 0);

pub fn color(state: CellState) -> Color32 {
    match state {
        CellState::Empty     => Color32::from_rgb(0, 0, 0),
        CellState::Alive     => Color32::from_rgb(255, 255, 255),
        CellState::Firing    => Color32::from_rgb(76, 242, 4),
        CellState::Decaying  => Color32::from_rgb(229, 0, 225),
        CellState::Head      => Color32::from_rgb(0, 255, 0),
        CellState::Tail      => Color32::from_rgb(255, 0, 0),
        CellState::Conductor => Color32::from_rgb(255, 255, 0),
    }
}
