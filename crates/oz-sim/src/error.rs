use oz_anim::AnimError;
use oz_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("agent {agent}: {source}")]
    Agent {
        agent:  AgentId,
        #[source]
        source: AnimError,
    },

    #[error("agent {0} has more than one plan")]
    DuplicateAgent(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
