// input.rs - Keyboard and mouse decoding into controller commands

use automata::{AutomatonId, CellCoord, CellState, Session};
use egui::{Key, Rect};

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(AutomatonId),
    Brush(CellState),
    Step,
    Faster,
    Slower,
    Clear,
    TogglePause,
    ResetGeneration,
    Quit,
}

const DIGITS: [Key; 10] = [
    Key::Num0, Key::Num1, Key::Num2, Key::Num3, Key::Num4,
    Key::Num5, Key::Num6, Key::Num7, Key::Num8, Key::Num9,
];

const COMMAND_KEYS: [Key; 7] = [
    Key::Space, Key::ArrowRight, Key::ArrowLeft, Key::C, Key::P, Key::Q, Key::R,
];

/// Ctrl+digit picks an automaton, a bare digit picks a paintbrush.
pub fn key_command(key: Key, ctrl: bool) -> Option<Command> {
    if let Some(digit) = DIGITS.iter().position(|&k| k == key) {
        return if ctrl { select_digit(digit) } else { brush_digit(digit) };
    }
    match key {
        Key::Space      => Some(Command::Step),
        Key::ArrowRight => Some(Command::Faster),
        Key::ArrowLeft  => Some(Command::Slower),
        Key::C          => Some(Command::Clear),
        Key::P          => Some(Command::TogglePause),
        Key::Q          => Some(Command::Quit),
        Key::R          => Some(Command::ResetGeneration),
        _ => None,
    }
}

fn select_digit(digit: usize) -> Option<Command> {
    let id = match digit {
        0 | 6 => AutomatonId::Rule110,
        1 => AutomatonId::Life,
        2 => AutomatonId::Wireworld,
        3 => AutomatonId::BriansBrain,
        4 => AutomatonId::Rule30,
        5 => AutomatonId::Rule90,
        7 => AutomatonId::LangtonsAnt,
        _ => return None,
    };
    Some(Command::Select(id))
}

fn brush_digit(digit: usize) -> Option<Command> {
    let state = match digit {
        0 | 2 => CellState::Alive,
        1 => CellState::Empty,
        3 => CellState::Head,
        4 => CellState::Conductor,
        5 => CellState::Firing,
        6 => CellState::Tail,
        7 => CellState::Decaying,
        _ => return None,
    };
    Some(Command::Brush(state))
}

pub fn apply(session: &mut Session, command: Command) {
    match command {
        Command::Select(id)      => session.select(id),
        Command::Brush(state)    => session.set_paintbrush(state),
        Command::Step            => session.request_step(),
        Command::Faster          => session.faster(),
        Command::Slower          => session.slower(),
        Command::Clear           => session.clear(),
        Command::TogglePause     => session.toggle_pause(),
        Command::ResetGeneration => session.reset_generation(),
        Command::Quit            => session.quit(),
    }
}

/// Commands for every key pressed this frame.
pub fn pressed_commands(input: &egui::InputState) -> Vec<Command> {
    let ctrl = input.modifiers.ctrl || input.modifiers.command;
    DIGITS
        .iter()
        .chain(COMMAND_KEYS.iter())
        .filter(|&&key| input.key_pressed(key))
        .filter_map(|&key| key_command(key, ctrl))
        .collect()
}

/// Mouse state carried between frames: the Shift anchor for line painting,
/// tagged with the automaton whose grid it was taken on.
#[derive(Debug, Default)]
pub struct Mouse {
    shift_held: bool,
    anchor: Option<(AutomatonId, CellCoord)>,
}

/// Where the canvas sits on screen and how big one cell is.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub rect: Rect,
    pub cell_width: f32,
    pub cell_height: f32,
}

/// One frame of pointer input, already mapped onto the active grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub cell: Option<CellCoord>,
    pub shift: bool,
    pub primary: bool,
    pub secondary: bool,
}

impl Mouse {
    /// Reads this frame's pointer and Shift state and applies it.
    pub fn handle(&mut self, session: &mut Session, input: &egui::InputState, canvas: Canvas) {
        let cell = input
            .pointer
            .hover_pos()
            .filter(|&pos| canvas.rect.contains(pos))
            .and_then(|pos| {
                session.pointer_cell(
                    pos.x - canvas.rect.min.x,
                    pos.y - canvas.rect.min.y,
                    canvas.cell_width,
                    canvas.cell_height,
                )
            });
        self.apply(
            session,
            Pointer {
                cell,
                shift: input.modifiers.shift,
                primary: input.pointer.primary_down(),
                secondary: input.pointer.secondary_down(),
            },
        );
    }

    /// Left button paints with the paintbrush, right button erases. Pressing
    /// Shift remembers the cell under the pointer; releasing it paints a
    /// line from there to the current cell, unless the active automaton
    /// changed in between.
    pub fn apply(&mut self, session: &mut Session, pointer: Pointer) {
        let active = session.active_id();
        if pointer.shift && !self.shift_held {
            self.anchor = pointer.cell.map(|cell| (active, cell));
        } else if !pointer.shift && self.shift_held {
            if let (Some((owner, from)), Some(to)) = (self.anchor.take(), pointer.cell) {
                if owner == active {
                    session.paint_line(from, to);
                }
            }
        }
        self.shift_held = pointer.shift;

        if let Some(cell) = pointer.cell {
            if pointer.primary {
                session.paint_cell(cell);
            } else if pointer.secondary {
                session.erase_cell(cell);
            }
        }
    }
}
