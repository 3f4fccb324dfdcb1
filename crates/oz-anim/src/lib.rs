//! `oz-anim` — turning resolved positions into a time-windowed trail.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`drawable`] | `Drawable`, `Shape` — line / arc / filled circle + color     |
//! | [`tail`]     | `TailSegment`, `SegmentKind`, `TailBuffer`                   |
//! | [`policy`]   | `AnimationPolicy` trait, `FrameContext`, `policy_for`         |
//! | [`dummy`]    | `DummyPolicy` — whole plan, drawn once                        |
//! | [`animated`] | `AnimatedPolicy` — straight lines, rebuilt every tick         |
//! | [`ozobot`]   | `OzobotPolicy` — turns, intersection marks, U-turn badges     |
//! | [`agent`]    | `Agent` — owns track, tail and policy; `update(now)`         |
//! | [`error`]    | `AnimError`, `AnimResult<T>`                                  |
//!
//! # Per-tick order
//!
//! ```text
//! evict(now) ─▶ recolor(now) ─▶ resolve(now) ─▶ policy ─▶ append ─▶ render set
//! ```
//!
//! Eviction runs before the new position is resolved, so segments that have
//! expired never show up next to the freshly drawn ones.

pub mod agent;
pub mod animated;
pub mod drawable;
pub mod dummy;
pub mod error;
pub mod ozobot;
pub mod policy;
pub mod tail;


pub use agent::Agent;
pub use animated::AnimatedPolicy;
pub use drawable::{Drawable, Shape};
pub use dummy::DummyPolicy;
pub use error::{AnimError, AnimResult};
pub use ozobot::OzobotPolicy;
pub use policy::{AnimationPolicy, FrameContext, policy_for};
pub use tail::{SegmentKind, TailBuffer, TailSegment, U_TURN_PALETTE, U_TURN_PALETTE_STEP_MS};
