//! `oz-grid` — the tile grid agents drive on, and its geometry.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                       |
//! |-----------|----------------------------------------------------------------|
//! | [`tile`]  | `Tile` — copyable handle with center / edge-midpoint / direction queries |
//! | [`grid`]  | `TileProvider` trait, `SquareGrid` (row-major rectangular grid) |
//! | [`error`] | `GeometryError`, `GeometryResult<T>`                           |
//!
//! # Coordinates
//!
//! Screen space: the grid origin is the top-left corner of tile `(0, 0)`,
//! x grows to the right and y grows downwards.  All points are
//! [`kurbo::Point`]s in pixels.

pub mod error;
pub mod grid;
pub mod tile;


pub use error::{GeometryError, GeometryResult};
pub use grid::{SquareGrid, TileProvider};
pub use tile::Tile;
