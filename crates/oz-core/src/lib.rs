//! `oz-core` — foundational types for the `ozmapf` path animator.
//!
//! This crate is a dependency of every other `oz-*` crate.  It has no `oz-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TileId`                                   |
//! | [`direction`]   | `Direction` (compass + `None`)                        |
//! | [`time`]        | `SimTime` (milliseconds since animation start)        |
//! | [`color`]       | `Rgb` and the named path colors                       |
//! | [`config`]      | `AnimConfig`, `AgentKind`                             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgb;
pub use config::{AgentKind, AnimConfig};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, TileId};
pub use time::SimTime;
