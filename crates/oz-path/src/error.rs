use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("a track needs at least one waypoint")]
    EmptyTrack,

    #[error("step time must be positive")]
    ZeroStepTime,
}

pub type PathResult<T> = Result<T, PathError>;
