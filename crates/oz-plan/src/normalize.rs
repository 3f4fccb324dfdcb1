//! Plan normalizer: trims trailing waits and derives the active duration.
//!
//! # Trimming rule
//!
//! ```text
//! k          = index of the last non-null step
//! trimmed    = positions[..=k]
//! plan_length = trimmed.len() - 1          (number of edges)
//! max_time    = plan_length * step_time_ms
//! ```
//!
//! An agent that never moves keeps its full position list with
//! `plan_length = 0`, so every query resolves to its first waypoint.

use oz_core::SimTime;
use tracing::{debug, warn};

use crate::{PlanError, PlanResult, RawPlan};

/// A plan with its trailing waits removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedPlan {
    /// Tile ids up to and including the tile the last real move lands on.
    pub tiles: Vec<oz_core::TileId>,

    /// Number of plan edges the agent is animated over.
    pub plan_length: usize,

    /// Active-motion duration: `plan_length * step_time_ms`.
    pub max_time: SimTime,
}

/// Validate `raw` and trim it to the last tile at which the agent moves.
pub fn normalize(raw: &RawPlan, step_time_ms: u64) -> PlanResult<NormalizedPlan> {
    if raw.positions.is_empty() {
        return Err(PlanError::Empty);
    }
    if raw.positions.len() != raw.steps.len() {
        return Err(PlanError::LengthMismatch {
            positions: raw.positions.len(),
            steps:     raw.steps.len(),
        });
    }
    validate_steps(raw)?;

    let (tiles, plan_length) = match raw.steps.iter().rposition(Option::is_some) {
        Some(last) => (raw.positions[..=last].to_vec(), last),
        None => {
            warn!(positions = raw.positions.len(), "plan never moves; keeping all positions");
            (raw.positions.clone(), 0)
        }
    };

    let max_time = SimTime(plan_length as u64 * step_time_ms);
    debug!(
        raw_len = raw.positions.len(),
        trimmed_len = tiles.len(),
        plan_length,
        %max_time,
        "normalized plan"
    );

    Ok(NormalizedPlan { tiles, plan_length, max_time })
}

/// Every recorded step must move between the neighboring position entries,
/// and every change of position must have a recorded step.
fn validate_steps(raw: &RawPlan) -> PlanResult<()> {
    for (index, step) in raw.steps.iter().enumerate().skip(1) {
        let (prev, here) = (raw.positions[index - 1], raw.positions[index]);
        match *step {
            Some((from, to)) if from != prev || to != here => {
                return Err(PlanError::StepMismatch { index, from: from.0, to: to.0 });
            }
            None if prev != here => {
                return Err(PlanError::UnrecordedMove { index, from: prev.0, to: here.0 });
            }
            _ => {}
        }
    }
    Ok(())
}
