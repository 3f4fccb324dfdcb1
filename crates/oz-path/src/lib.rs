//! `oz-path` — where is an agent at time `t`?
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`track`]        | `Track` — non-empty waypoint arena + timing, `resolve`     |
//! | [`position`]     | `PathPosition` — one resolver answer: window, offset, point |
//! | [`arc`]          | `TurnArc`, the 8-case turn table                            |
//! | [`intersection`] | Intersection-mark cadence thresholds                       |
//! | [`error`]        | `PathError`, `PathResult<T>`                                |
//!
//! # Dwell windows
//!
//! Waypoint `i` is centered on the instant `i * step_time`; it is current
//! from half a step before that instant until half a step after:
//!
//! ```text
//!            enter            middle            leave
//!   ───────────┼────first half────┼───second half───┼──────▶ t
//!    (i-½)·step              i·step            (i+½)·step
//! ```
//!
//! so the waypoint index is `round(t / step_time)`, ties resolved to even.
//! In the first half the agent moves from the entry edge to the tile center,
//! in the second half from the center to the exit edge.
//!
//! The resolver never mutates waypoints.  The animation driver is the only
//! writer, through [`Track::waypoint_mut`].

pub mod arc;
pub mod error;
pub mod intersection;
pub mod position;
pub mod track;


pub use arc::{ARC_WEDGE_DEG, TurnArc, TurnCase, TurnSide, turn_case};
pub use error::{PathError, PathResult};
pub use position::PathPosition;
pub use track::Track;
