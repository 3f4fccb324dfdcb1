//! The `AnimationPolicy` trait — how an agent's trail is drawn.

use oz_core::{AgentKind, AnimConfig, SimTime};
use oz_path::{PathPosition, Track};

use crate::{AnimatedPolicy, DummyPolicy, OzobotPolicy, TailSegment};

/// Everything a policy may look at, or write back to, while building one
/// tick's segments.
pub struct FrameContext<'a> {
    pub now:    SimTime,
    pub config: &'a AnimConfig,
    /// The agent's waypoints.  Policies are the only code that mutates them
    /// (intersection-mark counts, U-turn flags).
    pub track:  &'a mut Track,
}

/// Pluggable trail rendering.
///
/// Called once per agent per tick, after expired segments have been evicted
/// and before the render set is read.  Returned segments are appended to the
/// tail in order.
///
/// Implementations keep whatever per-agent state they need; the simulation
/// may update agents on several threads, hence `Send`.
pub trait AnimationPolicy: Send {
    fn build_tail_update(
        &mut self,
        position: &PathPosition,
        ctx:      &mut FrameContext<'_>,
    ) -> Vec<TailSegment>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// The policy configured by `kind`.
pub fn policy_for(kind: AgentKind) -> Box<dyn AnimationPolicy> {
    match kind {
        AgentKind::Dummy    => Box::new(DummyPolicy::default()),
        AgentKind::Animated => Box::new(AnimatedPolicy),
        AgentKind::Ozobot   => Box::new(OzobotPolicy),
    }
}
