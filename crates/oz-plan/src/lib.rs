//! `oz-plan` — from raw solver output to classified waypoints.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`raw`]        | `RawPlan` — positions + steps exactly as the solver emits them |
//! | [`normalize`]  | `NormalizedPlan`, `normalize` — trailing-wait trimming    |
//! | [`waypoint`]   | `Waypoint`, `MotionType`, `classify`                      |
//! | [`loader`]     | `load_plans_json`, `load_plans_reader`                    |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                              |
//!
//! # Pipeline (summary)
//!
//! ```text
//! RawPlan ──normalize──▶ NormalizedPlan (trimmed tile ids, max_time)
//!         ──classify───▶ Vec<Waypoint>  (directions, motion type, turn flags)
//! ```
//!
//! Both steps are pure.  The only mutable waypoint state
//! (`intersection_mark_count`, `is_u_turn`) is owned and mutated by the
//! animation driver in `oz-anim`.

pub mod error;
pub mod loader;
pub mod normalize;
pub mod raw;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use loader::{load_plans_json, load_plans_reader};
pub use normalize::{NormalizedPlan, normalize};
pub use raw::{RawPlan, Step};
pub use waypoint::{MAX_INTERSECTION_MARKS, MotionType, Waypoint, classify};
