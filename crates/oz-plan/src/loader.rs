//! JSON plan loader.
//!
//! # Format
//!
//! The MAPF solver writes one object per agent, keyed by agent id:
//!
//! ```json
//! {
//!   "1": { "pos_list": [0, 1, 1, 2], "steps": [null, [0, 1], null, [1, 2]] },
//!   "2": { "pos_list": [5, 4],       "steps": [null, [5, 4]] }
//! }
//! ```
//!
//! `steps[i]` is the move landing on `pos_list[i]`.  The solver itself
//! writes one step per move, leaving out the leading `null`; such a list
//! (one shorter than `pos_list`) is realigned on load, so
//! `"steps": [[0, 1], null, [1, 2]]` reads the same as the first plan above.
//!
//! Positions and step endpoints are row-major tile ids.  Plans are returned
//! sorted by agent id; they are not validated here (see [`normalize`]).
//!
//! [`normalize`]: crate::normalize

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use oz_core::{AgentId, TileId};

use crate::{PlanError, RawPlan};

// ── JSON record ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlanRecord {
    pos_list: Vec<u32>,
    steps:    Vec<Option<(u32, u32)>>,
}

impl From<PlanRecord> for RawPlan {
    fn from(r: PlanRecord) -> Self {
        let lead = (r.steps.len() + 1 == r.pos_list.len()).then_some(None);
        RawPlan {
            positions: r.pos_list.into_iter().map(TileId).collect(),
            steps:     lead
                .into_iter()
                .chain(r.steps.into_iter().map(|s| s.map(|(a, b)| (TileId(a), TileId(b)))))
                .collect(),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every agent's plan from a JSON file.
pub fn load_plans_json(path: &Path) -> Result<Vec<(AgentId, RawPlan)>, PlanError> {
    let file = std::fs::File::open(path)?;
    load_plans_reader(std::io::BufReader::new(file))
}

/// Like [`load_plans_json`] but accepts any `Read` source.
pub fn load_plans_reader<R: Read>(reader: R) -> Result<Vec<(AgentId, RawPlan)>, PlanError> {
    let by_agent: BTreeMap<u32, PlanRecord> =
        serde_json::from_reader(reader).map_err(|e| PlanError::Parse(e.to_string()))?;

    tracing::debug!(agents = by_agent.len(), "loaded plans");

    Ok(by_agent
        .into_iter()
        .map(|(id, record)| (AgentId(id), RawPlan::from(record)))
        .collect())
}
