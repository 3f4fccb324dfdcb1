//! The waypoint arena an agent is animated along.

use oz_core::SimTime;
use oz_plan::Waypoint;

use crate::{PathError, PathPosition, PathResult};

/// A non-empty sequence of waypoints plus the timing needed to resolve
/// positions on it.
///
/// Waypoints are addressed by their plan index.  Reads go through
/// [`resolve`](Self::resolve), which copies the relevant waypoints into the
/// returned [`PathPosition`]; the single writer (the animation driver) uses
/// [`waypoint_mut`](Self::waypoint_mut).
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    waypoints:    Vec<Waypoint>,
    step_time_ms: u64,
    max_time:     SimTime,
}

impl Track {
    pub fn new(waypoints: Vec<Waypoint>, step_time_ms: u64, max_time: SimTime) -> PathResult<Self> {
        if waypoints.is_empty() {
            return Err(PathError::EmptyTrack);
        }
        if step_time_ms == 0 {
            return Err(PathError::ZeroStepTime);
        }
        Ok(Self { waypoints, step_time_ms, max_time })
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn step_time_ms(&self) -> u64 {
        self.step_time_ms
    }

    #[inline]
    pub fn max_time(&self) -> SimTime {
        self.max_time
    }

    /// Mutable access for the animation driver's bookkeeping
    /// (intersection marks, U-turn badge).
    pub fn waypoint_mut(&mut self, index: usize) -> Option<&mut Waypoint> {
        self.waypoints.get_mut(index)
    }

    /// Resolve the agent's position at `time`.
    ///
    /// `time` is clamped to `[0, max_time]`, so a clock running past the end
    /// of the plan keeps resolving the final position.
    pub fn resolve(&self, time: SimTime) -> PathPosition {
        let time = time.min(self.max_time);
        let step = self.step_time_ms as f64;
        let half = step / 2.0;
        let t = time.as_f64();

        let last = self.waypoints.len() - 1;
        let index = ((t / step).round_ties_even() as usize).min(last);
        let next_index = (index + 1).min(last);

        let time_middle = index as f64 * step;
        let time_enter = time_middle - half;
        let time_leave = time_middle + half;

        let is_first_half = time_enter <= t && t < time_middle;
        let offset = if is_first_half {
            (t - time_enter) / half
        } else {
            (t - time_middle) / half
        };

        PathPosition {
            time,
            index,
            current: self.waypoints[index],
            next: self.waypoints[next_index],
            time_enter,
            time_middle,
            time_leave,
            offset: offset.clamp(0.0, 1.0),
            is_first_half,
        }
    }
}
