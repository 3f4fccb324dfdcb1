//! Fluent builder for constructing a [`Simulator`].

use oz_anim::Agent;
use oz_core::{AgentId, AnimConfig};
use oz_grid::TileProvider;
use oz_plan::RawPlan;

use crate::{SimClock, SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator<G>`].
///
/// # Required inputs
///
/// - [`AnimConfig`] — timing, geometry, agent kind
/// - `G: TileProvider` — the grid plans are expressed on
///
/// # Optional inputs
///
/// | Method         | Default     |
/// |----------------|-------------|
/// | `.plans(v)`    | No agents   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, grid)
///     .plans(plans)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<G: TileProvider> {
    config: AnimConfig,
    grid:   G,
    plans:  Vec<(AgentId, RawPlan)>,
}

impl<G: TileProvider> SimBuilder<G> {
    pub fn new(config: AnimConfig, grid: G) -> Self {
        Self { config, grid, plans: Vec::new() }
    }

    /// Supply per-agent raw plans.  Order does not matter; agents are
    /// updated and reported in ascending id order.
    pub fn plans(mut self, plans: Vec<(AgentId, RawPlan)>) -> Self {
        self.plans = plans;
        self
    }

    /// Add a single agent's plan.
    pub fn plan(mut self, agent: AgentId, plan: RawPlan) -> Self {
        self.plans.push((agent, plan));
        self
    }

    /// Validate the config, build every agent, and return a ready-to-run
    /// [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<G>> {
        self.config.validate()?;

        let mut plans = self.plans;
        plans.sort_by_key(|(id, _)| *id);
        if let Some(w) = plans.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(SimError::DuplicateAgent(w[0].0));
        }

        let agents = plans
            .iter()
            .map(|(id, raw)| {
                Agent::new(*id, raw, &self.grid, &self.config)
                    .map_err(|source| SimError::Agent { agent: *id, source })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let last_arrival = agents.iter().map(Agent::max_time).max().unwrap_or_default();
        let end_time = last_arrival.saturating_add(self.config.tail_duration_ms);

        Ok(Simulator {
            clock: SimClock::new(self.config.frame_ms),
            config: self.config,
            grid: self.grid,
            agents,
            end_time,
        })
    }
}
