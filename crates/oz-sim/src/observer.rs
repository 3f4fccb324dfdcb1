//! Simulation observer trait for frame output and progress reporting.

use oz_anim::Drawable;
use oz_core::{AgentId, SimTime};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at key
/// points in the frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — primitive counter
///
/// ```rust,ignore
/// struct Count(usize);
///
/// impl SimObserver for Count {
///     fn on_tick_end(&mut self, _now: SimTime, primitives: usize) {
///         self.0 += primitives;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each frame, before any agent is updated.
    fn on_tick_start(&mut self, _frame: u64, _now: SimTime) {}

    /// Called once per agent per frame, in ascending agent order, with the
    /// agent's render set (oldest segment first).
    fn on_agent_frame(&mut self, _now: SimTime, _agent: AgentId, _drawables: &[&Drawable]) {}

    /// Called at the end of each frame with the total number of primitives
    /// reported for it.
    fn on_tick_end(&mut self, _now: SimTime, _primitives: usize) {}

    /// Called once after the final frame.
    fn on_sim_end(&mut self, _end: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
