//! Compass directions on the tile grid.
//!
//! Screen coordinates are used throughout: x grows to the right, y grows
//! downwards, so `Up` is the negative y direction.

use std::fmt;

/// One of the four compass directions, or `None` when two tiles coincide.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    None,
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The four real directions in clockwise order starting at `Up`.
    pub const COMPASS: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    #[inline]
    pub fn is_none(self) -> bool {
        self == Direction::None
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// `true` if one direction is horizontal and the other vertical.
    ///
    /// A waypoint whose approach and exit directions are orthogonal is a turn.
    #[inline]
    pub fn is_orthogonal_to(self, other: Direction) -> bool {
        (self.is_horizontal() && other.is_vertical())
            || (self.is_vertical() && other.is_horizontal())
    }

    /// The reverse direction.  `None` stays `None`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::None  => Direction::None,
            Direction::Up    => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
        }
    }

    /// Screen-space unit step `(dx, dy)`; `(0, 0)` for `None`.
    pub fn unit(self) -> (f64, f64) {
        match self {
            Direction::None  => (0.0, 0.0),
            Direction::Up    => (0.0, -1.0),
            Direction::Right => (1.0, 0.0),
            Direction::Down  => (0.0, 1.0),
            Direction::Left  => (-1.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::None  => "none",
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
