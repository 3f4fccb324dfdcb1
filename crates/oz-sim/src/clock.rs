//! Fixed-step simulation clock.

use oz_core::SimTime;

/// Advances simulated time by `frame_ms` per frame.
///
/// The frame rate is decoupled from wall time: the renderer may pace frames
/// however it likes, the animation only ever sees this clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClock {
    /// Milliseconds of simulated time per frame.
    pub frame_ms: u64,
    /// Frames completed so far.
    pub frame:    u64,
}

impl SimClock {
    pub fn new(frame_ms: u64) -> Self {
        Self { frame_ms, frame: 0 }
    }

    /// Simulated time of the current frame.
    #[inline]
    pub fn now(&self) -> SimTime {
        SimTime(self.frame.saturating_mul(self.frame_ms))
    }

    #[inline]
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}
