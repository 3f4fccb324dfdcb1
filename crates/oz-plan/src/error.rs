use thiserror::Error;

use oz_grid::GeometryError;

/// Malformed plan input.  Fatal: surfaced to the caller, no partial recovery.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan has no positions")]
    Empty,

    #[error("plan has {positions} positions but {steps} steps")]
    LengthMismatch { positions: usize, steps: usize },

    #[error("step {index} moves {from} -> {to}, which does not match the position list")]
    StepMismatch { index: usize, from: u32, to: u32 },

    #[error("position {index} moves {from} -> {to} without a recorded step")]
    UnrecordedMove { index: usize, from: u32, to: u32 },

    #[error("plan geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("plan parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
