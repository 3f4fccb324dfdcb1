//! One animated agent.

use oz_core::{AgentId, AnimConfig, SimTime};
use oz_grid::TileProvider;
use oz_path::{PathPosition, Track};
use oz_plan::{RawPlan, classify, normalize};
use tracing::{debug, trace};

use crate::{AnimResult, AnimationPolicy, Drawable, FrameContext, TailBuffer, policy_for};

/// An agent: its waypoint track, its tail and the policy drawing it.
///
/// Agents are independent of each other; the simulation drives them all
/// with the same clock value each tick.
pub struct Agent {
    id:          AgentId,
    config:      AnimConfig,
    plan_length: usize,
    track:       Track,
    tail:        TailBuffer,
    policy:      Box<dyn AnimationPolicy>,
}

impl Agent {
    /// Normalize and classify `raw`, using the policy selected by
    /// `config.agent_kind`.
    pub fn new<P>(id: AgentId, raw: &RawPlan, provider: &P, config: &AnimConfig) -> AnimResult<Self>
    where
        P: TileProvider + ?Sized,
    {
        Self::with_policy(id, raw, provider, config, policy_for(config.agent_kind))
    }

    /// Like [`new`](Self::new) with an explicit policy.
    pub fn with_policy<P>(
        id:       AgentId,
        raw:      &RawPlan,
        provider: &P,
        config:   &AnimConfig,
        policy:   Box<dyn AnimationPolicy>,
    ) -> AnimResult<Self>
    where
        P: TileProvider + ?Sized,
    {
        config.validate()?;
        let plan = normalize(raw, config.step_time_ms)?;
        let waypoints = classify(&plan.tiles, provider)?;
        let track = Track::new(waypoints, config.step_time_ms, plan.max_time)?;

        debug!(
            agent = %id,
            policy = policy.name(),
            waypoints = track.len(),
            max_time = %plan.max_time,
            "agent ready"
        );

        Ok(Self {
            id,
            config: config.clone(),
            plan_length: plan.plan_length,
            track,
            tail: TailBuffer::new(),
            policy,
        })
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Number of moves in the trimmed plan.
    #[inline]
    pub fn plan_length(&self) -> usize {
        self.plan_length
    }

    #[inline]
    pub fn max_time(&self) -> SimTime {
        self.track.max_time()
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn tail(&self) -> &TailBuffer {
        &self.tail
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Where the agent is at `time`, without touching the tail.
    pub fn position(&self, time: SimTime) -> PathPosition {
        self.track.resolve(time)
    }

    /// Advance the trail to `now`.
    ///
    /// `now` should not decrease between calls.  Times past `max_time` keep
    /// resolving the final waypoint.
    pub fn update(&mut self, now: SimTime) {
        let evicted = self.tail.evict(now);
        if evicted > 0 {
            trace!(agent = %self.id, evicted, "tail evicted");
        }
        self.tail.tick(now);

        let position = self.track.resolve(now);
        let mut ctx = FrameContext { now, config: &self.config, track: &mut self.track };
        let segments = self.policy.build_tail_update(&position, &mut ctx);
        self.tail.extend(segments);
    }

    /// Drawables to render this tick, oldest first.
    pub fn render_set(&self) -> Vec<&Drawable> {
        self.tail.render_set()
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("policy", &self.policy.name())
            .field("plan_length", &self.plan_length)
            .field("tail_len", &self.tail.len())
            .finish()
    }
}
