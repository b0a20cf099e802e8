// session.rs - The controller: seven automata, one active, plus run state
//
// Input handlers and renderers hold a `&mut Session` / `&Session` and go
// through the methods here; nothing else in the crate keeps mutable state.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;

use crate::ant::{Ant, AntAutomaton};
use crate::automaton::Automaton;
use crate::cell::CellState;
use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::grid::{Dimensionality, Grid, SharedGrid};
use crate::paint::{self, CellCoord};
use crate::patterns::{self, Pattern};
use crate::rule::Rule;

/// The seven configured automata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomatonId {
    Rule30,
    Rule90,
    Rule110,
    Life,
    BriansBrain,
    Wireworld,
    LangtonsAnt,
}

impl AutomatonId {
    pub const ALL: [AutomatonId; 7] = [
        AutomatonId::Rule30,
        AutomatonId::Rule90,
        AutomatonId::Rule110,
        AutomatonId::Life,
        AutomatonId::BriansBrain,
        AutomatonId::Wireworld,
        AutomatonId::LangtonsAnt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AutomatonId::Rule30      => "Rule 30",
            AutomatonId::Rule90      => "Rule 90",
            AutomatonId::Rule110     => "Rule 110",
            AutomatonId::Life        => "Game of Life",
            AutomatonId::BriansBrain => "Brian's Brain",
            AutomatonId::Wireworld   => "Wireworld",
            AutomatonId::LangtonsAnt => "Langton's Ant",
        }
    }

    /// Rule of the automaton. The ant runs on a binary Life grid.
    pub fn rule(self) -> Rule {
        match self {
            AutomatonId::Rule30      => Rule::RULE_30,
            AutomatonId::Rule90      => Rule::RULE_90,
            AutomatonId::Rule110     => Rule::RULE_110,
            AutomatonId::Life        => Rule::Life,
            AutomatonId::BriansBrain => Rule::BriansBrain,
            AutomatonId::Wireworld   => Rule::Wireworld,
            AutomatonId::LangtonsAnt => Rule::Life,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AutomatonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown automaton `{0}`")]
pub struct ParseAutomatonError(String);

impl FromStr for AutomatonId {
    type Err = ParseAutomatonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "rule30" | "30"                       => Ok(AutomatonId::Rule30),
            "rule90" | "90"                       => Ok(AutomatonId::Rule90),
            "rule110" | "110"                     => Ok(AutomatonId::Rule110),
            "life" | "gameoflife" | "conway"      => Ok(AutomatonId::Life),
            "briansbrain" | "brian" | "brain"     => Ok(AutomatonId::BriansBrain),
            "wireworld" | "wires"                 => Ok(AutomatonId::Wireworld),
            "langtonsant" | "langton" | "ant"     => Ok(AutomatonId::LangtonsAnt),
            _ => Err(ParseAutomatonError(s.to_owned())),
        }
    }
}

/// An automaton as the controller sees it: a plain rule, or the ant.
#[derive(Debug)]
pub enum Simulation {
    Cellular(Automaton),
    Ant(AntAutomaton),
}

impl Simulation {
    pub fn step(&mut self) {
        match self {
            Simulation::Cellular(ca) => ca.step(),
            Simulation::Ant(ant) => ant.step(),
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            Simulation::Cellular(ca) => ca.generation(),
            Simulation::Ant(ant) => ant.generation(),
        }
    }

    pub fn reset_generation(&mut self) {
        match self {
            Simulation::Cellular(ca) => ca.reset_generation(),
            Simulation::Ant(ant) => ant.reset_generation(),
        }
    }

    pub fn grid(&self) -> &SharedGrid {
        match self {
            Simulation::Cellular(ca) => ca.grid(),
            Simulation::Ant(ant) => ant.grid(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Simulation::Cellular(ca) => ca.rule(),
            Simulation::Ant(ant) => ant.base().rule(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Simulation::Cellular(ca) => ca.clear(),
            Simulation::Ant(ant) => ant.clear(),
        }
    }

    pub fn ant(&self) -> Option<&Ant> {
        match self {
            Simulation::Cellular(_) => None,
            Simulation::Ant(ant) => Some(ant.ant()),
        }
    }
}

/// Whether the active automaton advances on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    /// Paused, with one step owed on the next tick.
    PausedSingleStep,
}

#[derive(Debug)]
pub struct Session {
    automata: Vec<Simulation>,
    active: AutomatonId,
    paintbrush: CellState,
    run_state: RunState,
    speed: u32,
    ticks: u32,
    quit: bool,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        let mut pool: Vec<SharedGrid> = Vec::new();
        let mut automata = Vec::with_capacity(AutomatonId::ALL.len());

        for id in AutomatonId::ALL {
            let rule = id.rule();
            let side = config.side_for(id);
            let grid = shared_grid(&mut pool, side, rule.dimensionality())?;
            let base = Automaton::with_side(grid, rule, side)?;
            let sim = match id {
                AutomatonId::LangtonsAnt => {
                    let ant = config.ant.unwrap_or_else(|| Ant::centred(side));
                    Simulation::Ant(AntAutomaton::new(base, ant)?)
                }
                _ => Simulation::Cellular(base),
            };
            debug!("built {id} on a {} grid of side {side}", rule.dimensionality());
            automata.push(sim);
        }

        info!(
            "session ready: {} automata over {} grid buffers",
            automata.len(),
            pool.len()
        );

        Ok(Self {
            automata,
            active: config.active,
            paintbrush: config.paintbrush,
            run_state: RunState::Running,
            speed: config.speed,
            ticks: 0,
            quit: false,
        })
    }

    // ---- selection -------------------------------------------------------

    pub fn select(&mut self, id: AutomatonId) {
        if id != self.active {
            info!("Welcome to {id}!");
        }
        self.active = id;
    }

    pub fn active_id(&self) -> AutomatonId {
        self.active
    }

    pub fn active(&self) -> &Simulation {
        &self.automata[self.active.index()]
    }

    pub fn active_mut(&mut self) -> &mut Simulation {
        &mut self.automata[self.active.index()]
    }

    pub fn automaton(&self, id: AutomatonId) -> &Simulation {
        &self.automata[id.index()]
    }

    /// Whether two automata paint on the same buffer.
    pub fn shares_grid(&self, a: AutomatonId, b: AutomatonId) -> bool {
        Rc::ptr_eq(self.automaton(a).grid(), self.automaton(b).grid())
    }

    /// Current generation of the active automaton.
    pub fn generation(&self) -> u64 {
        self.active().generation()
    }

    /// Cell the ant stands on, when the ant is the active automaton.
    pub fn ant_position(&self) -> Option<CellCoord> {
        self.active().ant().map(|ant| {
            let (x, y) = ant.position();
            CellCoord::new(x, y)
        })
    }

    // ---- painting --------------------------------------------------------

    pub fn paintbrush(&self) -> CellState {
        self.paintbrush
    }

    pub fn set_paintbrush(&mut self, state: CellState) {
        debug!("paintbrush set to {state}");
        self.paintbrush = state;
    }

    #[track_caller]
    pub fn paint(&mut self, index: usize) {
        let brush = self.paintbrush;
        self.active().grid().borrow_mut().set(index, brush);
    }

    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        self.active().grid().borrow_mut().set(index, CellState::Empty);
    }

    /// Cell under a pointer, if it is on the active grid.
    pub fn pointer_cell(&self, x: f32, y: f32, cell_width: f32, cell_height: f32) -> Option<CellCoord> {
        let (side, dim) = self.active().grid().borrow().size();
        paint::pointer_to_cell(x, y, cell_width, cell_height)
            .filter(|&coord| paint::contains(coord, side, dim))
    }

    #[track_caller]
    pub fn paint_cell(&mut self, coord: CellCoord) {
        let brush = self.paintbrush;
        self.write_cell(coord, brush);
    }

    #[track_caller]
    pub fn erase_cell(&mut self, coord: CellCoord) {
        self.write_cell(coord, CellState::Empty);
    }

    /// Paints every cell sampled along the segment `from`–`to`.
    ///
    /// Endpoints can come from an earlier frame and another automaton, so a
    /// line with an endpoint off the active grid is dropped.
    pub fn paint_line(&mut self, from: CellCoord, to: CellCoord) {
        let (side, dim) = self.active().grid().borrow().size();
        if !paint::contains(from, side, dim) || !paint::contains(to, side, dim) {
            debug!("line {from:?} to {to:?} leaves the {dim} grid of side {side}; skipped");
            return;
        }
        let brush = self.paintbrush;
        for coord in paint::line_cells(from, to) {
            self.write_cell(coord, brush);
        }
    }

    #[track_caller]
    fn write_cell(&mut self, coord: CellCoord, state: CellState) {
        let mut grid = self.active().grid().borrow_mut();
        let (side, dim) = grid.size();
        grid.set(paint::cell_to_index(coord, side, dim), state);
    }

    /// Replaces the active grid with a centred preset.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        info!("loading {} into {}", pattern.name, self.active);
        let sim = self.active_mut();
        patterns::apply_centred(&mut sim.grid().borrow_mut(), pattern);
        sim.reset_generation();
    }

    /// Fills the active grid pseudo-randomly from its rule's states.
    pub fn randomize(&mut self, seed: u64) {
        let sim = self.active_mut();
        let alphabet = sim.rule().alphabet();
        patterns::apply_random(&mut sim.grid().borrow_mut(), seed, alphabet);
        sim.reset_generation();
    }

    // ---- control ---------------------------------------------------------

    /// Empties the active grid and restarts its generation count.
    pub fn clear(&mut self) {
        let sim = self.active_mut();
        let cells = sim.grid().borrow().len();
        sim.clear();
        info!("Clearing {cells} cells");
    }

    pub fn reset_generation(&mut self) {
        self.active_mut().reset_generation();
        info!("generation counter reset");
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        debug!("speed set to {speed}");
        self.speed = speed;
        self.ticks = self.ticks.min(speed);
    }

    pub fn faster(&mut self) {
        self.set_speed(self.speed.saturating_sub(1));
    }

    pub fn slower(&mut self) {
        self.set_speed(self.speed.saturating_add(1));
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state != RunState::Running
    }

    pub fn toggle_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Running => {
                info!("Paused");
                RunState::Paused
            }
            RunState::Paused | RunState::PausedSingleStep => {
                info!("Resuming...");
                RunState::Running
            }
        };
    }

    /// Asks for one generation on the next tick. Ignored while running.
    pub fn request_step(&mut self) {
        match self.run_state {
            RunState::Paused => self.run_state = RunState::PausedSingleStep,
            RunState::PausedSingleStep => {}
            RunState::Running => debug!("single step ignored while running"),
        }
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.quit = true;
    }

    /// False once a quit has been requested.
    pub fn is_running(&self) -> bool {
        !self.quit
    }

    /// One frame of the loop. Returns whether a generation was computed.
    ///
    /// While running, a generation happens once the frame counter exceeds
    /// `speed`, so speed 0 steps every other frame.
    pub fn tick(&mut self) -> bool {
        if self.quit {
            return false;
        }
        match self.run_state {
            RunState::Running if self.ticks > self.speed => {
                self.active_mut().step();
                self.ticks = 0;
                true
            }
            RunState::Running => {
                self.ticks += 1;
                false
            }
            RunState::PausedSingleStep => {
                self.active_mut().step();
                self.run_state = RunState::Paused;
                true
            }
            RunState::Paused => false,
        }
    }
}

/// Finds a pooled grid of the given extent or adds one.
fn shared_grid(
    pool: &mut Vec<SharedGrid>,
    side: usize,
    dim: Dimensionality,
) -> Result<SharedGrid, ConfigError> {
    if let Some(grid) = pool.iter().find(|g| g.borrow().size() == (side, dim)) {
        return Ok(Rc::clone(grid));
    }
    let grid = Grid::shared(side, dim)?;
    pool.push(Rc::clone(&grid));
    Ok(grid)
}
