//! Simulation time model.
//!
//! # Design
//!
//! Animation time is a `SimTime`: whole milliseconds since the animation
//! started.  Plans advance one tile every `step_time_ms`, the tail keeps
//! segments for `tail_duration_ms`, and the simulation clock advances by a
//! fixed `frame_ms` per tick.  Keeping all three in integer milliseconds makes
//! eviction comparisons exact; only the resolver drops into `f64` to compute
//! fractional offsets inside a dwell window.

use std::fmt;

/// Milliseconds since the start of the animation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// A time no animation reaches; used for segments that never expire.
    pub const NEVER: SimTime = SimTime(u64::MAX);

    #[inline]
    pub fn from_millis(ms: u64) -> SimTime {
        SimTime(ms)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds as `f64`, for window arithmetic in the resolver.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// `self - ms`, stopping at zero.
    #[inline]
    pub fn saturating_sub(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_sub(ms))
    }

    /// `self + ms`, stopping at [`SimTime::NEVER`].
    #[inline]
    pub fn saturating_add(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self` (zero if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
