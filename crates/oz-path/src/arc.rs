//! Turn arcs.
//!
//! A turn is drawn as a quarter circle of radius `tile_size / 2` centered on
//! the tile corner between the entry and exit edges.  Each tick only a thin
//! wedge of that circle is emitted, at the angle matching the agent's
//! progress through the turn; the tail buffer accumulates the wedges into
//! the full quarter arc.
//!
//! Angles are in degrees, 0° pointing right and growing counter-clockwise
//! as seen on screen.  Pixel coordinates have y pointing down, so the point
//! at angle `a` on a circle is `center + r * (cos a, -sin a)`.

use kurbo::{Point, Rect};

use oz_core::Direction::{self, Down, Left, Right, Up};

/// Width of the arc wedge emitted per tick, in degrees.
pub const ARC_WEDGE_DEG: f64 = 3.0;

const QUARTER_TURN_DEG: f64 = 90.0;

/// Which way the sweep angle moves as the turn progresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnSide {
    /// Angle grows with progress.
    Left,
    /// Angle shrinks with progress.
    Right,
}

/// One row of the turn table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TurnCase {
    pub previous:   Direction,
    pub next:       Direction,
    /// Bounding-box origin relative to the tile center, in tile sizes.
    pub box_offset: (f64, f64),
    /// Sweep angle at progress 0.
    pub base_angle: f64,
    pub side:       TurnSide,
}

const fn case(
    previous: Direction,
    next: Direction,
    box_offset: (f64, f64),
    base_angle: f64,
    side: TurnSide,
) -> TurnCase {
    TurnCase { previous, next, box_offset, base_angle, side }
}

/// Keyed by `(previous_direction, next_direction)`; both point away from the
/// tile, so `(Left, Up)` is an agent arriving from the left and leaving
/// upwards.
static TURN_TABLE: [TurnCase; 8] = [
    case(Left,  Up,    (-1.0, -1.0), 270.0, TurnSide::Left),
    case(Left,  Down,  (-1.0,  0.0),  90.0, TurnSide::Right),
    case(Right, Up,    ( 0.0, -1.0), 270.0, TurnSide::Right),
    case(Right, Down,  ( 0.0,  0.0),  90.0, TurnSide::Left),
    case(Up,    Left,  (-1.0, -1.0), 360.0, TurnSide::Right),
    case(Up,    Right, ( 0.0, -1.0), 180.0, TurnSide::Left),
    case(Down,  Left,  (-1.0,  0.0),   0.0, TurnSide::Left),
    case(Down,  Right, ( 0.0,  0.0), 180.0, TurnSide::Right),
];

/// Look up the turn drawn between `previous` and `next`.  `None` when the
/// pair is not a quarter turn.
pub fn turn_case(previous: Direction, next: Direction) -> Option<&'static TurnCase> {
    TURN_TABLE
        .iter()
        .find(|c| c.previous == previous && c.next == next)
}

/// A wedge of a turn arc, ready to stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TurnArc {
    /// Bounding box of the full circle, already inflated by half the line
    /// width so the stroke is centered on the turn radius.
    pub bbox:        Rect,
    pub start_angle: f64,
    pub end_angle:   f64,
}

impl TurnCase {
    /// Build the wedge at `progress` ∈ [0, 1] through the turn.
    pub fn wedge(&self, center: Point, tile_size: f64, line_width: f64, progress: f64) -> TurnArc {
        let (ox, oy) = self.box_offset;
        let origin = Point::new(center.x + ox * tile_size, center.y + oy * tile_size);
        let pad = line_width / 2.0;
        let bbox = Rect::from_origin_size(origin, (tile_size, tile_size)).inflate(pad, pad);

        let (start_angle, end_angle) = match self.side {
            TurnSide::Left => {
                let a = self.base_angle + QUARTER_TURN_DEG * progress;
                (a, a + ARC_WEDGE_DEG)
            }
            TurnSide::Right => {
                let a = self.base_angle - QUARTER_TURN_DEG * progress;
                (a - ARC_WEDGE_DEG, a)
            }
        };

        TurnArc { bbox, start_angle, end_angle }
    }
}

impl TurnArc {
    /// Center of the arc's circle (the tile corner the turn wraps around).
    pub fn center(&self) -> Point {
        self.bbox.center()
    }

    /// Stroke radius.
    pub fn radius(&self) -> f64 {
        self.bbox.width() / 2.0
    }

    /// Sweep in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}
