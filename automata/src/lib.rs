//! Grid-based cellular automata: three elementary rules, three Moore
//! neighbourhood rules and Langton's Ant, stepped synchronously over grids
//! that several automata can share.

mod ant;
mod automaton;
mod cell;
mod config;
mod error;
mod grid;
mod session;

pub mod paint;
pub mod patterns;
pub mod rule;

pub use ant::{Ant, AntAutomaton, Heading};
pub use automaton::Automaton;
pub use cell::CellState;
pub use config::{
    DEFAULT_RULE_30_LEN, DEFAULT_RULE_90_LEN, DEFAULT_RULE_110_LEN, DEFAULT_SIDE, SessionConfig,
};
pub use error::ConfigError;
pub use grid::{Dimensionality, Grid, MAX_CELLS, SharedGrid};
pub use paint::CellCoord;
pub use rule::{ElementaryRule, Neighborhood, Rule};
pub use session::{AutomatonId, ParseAutomatonError, RunState, Session, Simulation};
