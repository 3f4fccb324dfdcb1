//! The `Tile` handle.

use kurbo::Point;

use oz_core::{Direction, TileId};

use crate::{GeometryError, GeometryResult};

/// A square tile on the grid.
///
/// `Tile` is a small `Copy` value handed out by a [`TileProvider`]; it carries
/// everything needed to answer geometry queries without going back to the
/// grid, so waypoints can hold one directly.
///
/// [`TileProvider`]: crate::TileProvider
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tile {
    pub id:     TileId,
    pub col:    u32,
    pub row:    u32,
    /// Top-left corner in pixels.
    pub origin: Point,
    /// Side length in pixels.
    pub size:   f64,
}

impl Tile {
    /// Center of the tile.
    #[inline]
    pub fn center(&self) -> Point {
        let half = self.size / 2.0;
        Point::new(self.origin.x + half, self.origin.y + half)
    }

    /// Midpoint of the edge facing `direction`.  `Direction::None` yields the
    /// center, so callers can interpolate towards a missing neighbor without
    /// special-casing path ends.
    pub fn edge_midpoint(&self, direction: Direction) -> Point {
        let half = self.size / 2.0;
        let (dx, dy) = direction.unit();
        let c = self.center();
        Point::new(c.x + dx * half, c.y + dy * half)
    }

    /// Compass direction from `self` to `other`.
    ///
    /// Returns `Direction::None` when both handles refer to the same cell and
    /// [`GeometryError::NotAdjacent`] when the cells do not share an edge.
    pub fn direction_to(&self, other: &Tile) -> GeometryResult<Direction> {
        let dx = other.col as i64 - self.col as i64;
        let dy = other.row as i64 - self.row as i64;
        match (dx, dy) {
            (0, 0)  => Ok(Direction::None),
            (0, -1) => Ok(Direction::Up),
            (1, 0)  => Ok(Direction::Right),
            (0, 1)  => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            _ => Err(GeometryError::NotAdjacent { from: self.id, to: other.id }),
        }
    }
}
