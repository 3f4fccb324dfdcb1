//! Raw per-agent plans as produced by the external MAPF solver.

use oz_core::TileId;

/// A single transition `(from, to)` between two tiles.
pub type Step = (TileId, TileId);

/// One agent's discrete plan.
///
/// `positions[i]` is the tile the agent occupies after `i` plan steps.
/// `steps[i]` is the transition that lands on `positions[i]`, or `None` for a
/// wait tick; `steps[0]` has nothing to describe and is conventionally `None`.
/// Both lists therefore have the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPlan {
    pub positions: Vec<TileId>,
    pub steps:     Vec<Option<Step>>,
}

impl RawPlan {
    pub fn new(positions: Vec<TileId>, steps: Vec<Option<Step>>) -> Self {
        Self { positions, steps }
    }

    /// Build a plan from a bare position list, deriving the steps: a step is
    /// recorded wherever consecutive positions differ.
    pub fn from_positions(positions: Vec<TileId>) -> Self {
        let steps = std::iter::once(None)
            .chain(positions.windows(2).map(|w| (w[0] != w[1]).then_some((w[0], w[1]))))
            .take(positions.len())
            .collect();
        Self { positions, steps }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
