//! Animation configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to the simulation builder, which calls
//! [`AnimConfig::validate`] before any agent is constructed.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Which animation strategy drives every agent's tail.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentKind {
    /// Draw the whole plan once as straight center-to-center lines.
    Dummy,
    /// Redraw straight lines from the tail position to the head every tick.
    Animated,
    /// Full Ozobot rendering: curved turns, intersection marks, color codes.
    #[default]
    Ozobot,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Dummy    => "dummy",
            AgentKind::Animated => "animated",
            AgentKind::Ozobot   => "ozobot",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and geometry parameters for the path animation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimConfig {
    /// Milliseconds an agent needs to move from one tile to the next.
    pub step_time_ms: u64,

    /// How long a drawn tail segment stays on screen, in milliseconds.
    pub tail_duration_ms: u64,

    /// How far the simulation clock advances per tick, in milliseconds.
    pub frame_ms: u64,

    /// Side length of one tile in pixels.
    pub tile_size: f64,

    /// Width of the following line in pixels.
    pub line_width: f64,

    /// Enables color cycling of path segments and intersection marks.
    pub colors_enabled: bool,

    /// Animation strategy used for every agent.
    pub agent_kind: AgentKind,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            step_time_ms:     1_000,
            tail_duration_ms: 1_500,
            frame_ms:         50,
            tile_size:        40.0,
            line_width:       4.0,
            colors_enabled:   true,
            agent_kind:       AgentKind::Ozobot,
        }
    }
}

impl AnimConfig {
    /// Reject non-positive timing and size parameters.
    pub fn validate(&self) -> CoreResult<()> {
        if self.step_time_ms == 0 {
            return Err(CoreError::Config("step_time_ms must be positive".into()));
        }
        if self.tail_duration_ms == 0 {
            return Err(CoreError::Config("tail_duration_ms must be positive".into()));
        }
        if self.frame_ms == 0 {
            return Err(CoreError::Config("frame_ms must be positive".into()));
        }
        if !(self.tile_size > 0.0 && self.tile_size.is_finite()) {
            return Err(CoreError::Config(format!(
                "tile_size must be a positive number, got {}",
                self.tile_size
            )));
        }
        if !(self.line_width > 0.0 && self.line_width.is_finite()) {
            return Err(CoreError::Config(format!(
                "line_width must be a positive number, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}
