use thiserror::Error;

use oz_core::CoreError;
use oz_path::PathError;
use oz_plan::PlanError;

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("invalid animation config: {0}")]
    Config(#[from] CoreError),

    #[error("invalid plan: {0}")]
    Plan(#[from] PlanError),

    #[error("cannot build track: {0}")]
    Track(#[from] PathError),
}

pub type AnimResult<T> = Result<T, AnimError>;
