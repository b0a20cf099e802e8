// error.rs - Construction-time configuration errors
//
// Out-of-range cell access is not listed here: that is a bug in the caller
// and panics at the point of access.

use thiserror::Error;

use crate::grid::Dimensionality;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid side length must be at least 1")]
    EmptyGrid,

    #[error("grid of side {side} in {dim} exceeds the cell limit")]
    GridTooLarge { side: usize, dim: Dimensionality },

    #[error("rule {rule} needs a {expected} grid but the shared grid is {found}")]
    DimensionMismatch {
        rule: &'static str,
        expected: Dimensionality,
        found: Dimensionality,
    },

    #[error("automaton expects side length {expected} but the shared grid has side {found}")]
    SideMismatch { expected: usize, found: usize },

    #[error("ant at ({x}, {y}) lies outside a grid of side {side}")]
    AntOutOfBounds { x: usize, y: usize, side: usize },

    #[error("the ant needs a binary Empty/Alive base automaton, got rule {rule}")]
    NonBinaryAntBase { rule: &'static str },
}
