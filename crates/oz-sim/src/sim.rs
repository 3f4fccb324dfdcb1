//! The `Simulator` struct and its frame loop.

use oz_anim::Agent;
use oz_core::{AnimConfig, SimTime};
use oz_grid::TileProvider;
use tracing::{info, trace};

use crate::{SimClock, SimObserver};

/// The frame-loop runner.
///
/// Holds every agent and the shared clock.  Each frame all agents are
/// updated with the same clock value, then their render sets are handed to
/// the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<G: TileProvider> {
    pub config: AnimConfig,
    pub clock:  SimClock,

    /// Read-only tile geometry the agents were built against.
    pub grid: G,

    /// Agents in ascending id order.
    pub agents: Vec<Agent>,

    pub(crate) end_time: SimTime,
}

impl<G: TileProvider> Simulator<G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Latest plan end plus one tail duration.
    pub fn end_time(&self) -> SimTime {
        self.end_time
    }

    /// Run frames from the current clock value through `end_time`.
    ///
    /// Returns the number of frames run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> u64 {
        info!(
            agents = self.agents.len(),
            end_time = %self.end_time,
            frame_ms = self.clock.frame_ms,
            "simulation start"
        );

        let mut frames = 0;
        while self.clock.now() <= self.end_time {
            self.step(observer);
            frames += 1;
        }
        observer.on_sim_end(self.end_time);

        info!(frames, "simulation end");
        frames
    }

    /// Run exactly `n` frames from the current position, ignoring
    /// `end_time`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    // ── Frame processing ──────────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now();
        observer.on_tick_start(self.clock.frame, now);

        self.update_agents(now);

        let mut primitives = 0;
        for agent in &self.agents {
            let drawables = agent.render_set();
            primitives += drawables.len();
            observer.on_agent_frame(now, agent.id(), &drawables);
        }
        trace!(frame = self.clock.frame, %now, primitives, "frame");

        observer.on_tick_end(now, primitives);
        self.clock.advance();
    }

    #[cfg(not(feature = "parallel"))]
    fn update_agents(&mut self, now: SimTime) {
        for agent in &mut self.agents {
            agent.update(now);
        }
    }

    #[cfg(feature = "parallel")]
    fn update_agents(&mut self, now: SimTime) {
        use rayon::prelude::*;
        self.agents.par_iter_mut().for_each(|agent| agent.update(now));
    }
}
