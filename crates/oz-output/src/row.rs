//! Plain data row types written by output backends.

use oz_anim::{Drawable, Shape};

/// One drawable of one agent in one frame.
///
/// Geometry columns depend on `kind`:
///
/// | kind     | `x0,y0`        | `x1,y1`         | `radius` | angles |
/// |----------|----------------|-----------------|----------|--------|
/// | `line`   | start          | end             | 0        | 0      |
/// | `arc`    | bbox top-left  | bbox bottom-right | stroke radius | start, end (deg) |
/// | `circle` | center         | center          | radius   | 0      |
///
/// Arc angles are degrees, 0° pointing right and growing counter-clockwise
/// on screen: with y pointing down, angle `a` sits at
/// `center + radius * (cos a, -sin a)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRow {
    pub frame:       u64,
    pub time_ms:     u64,
    pub agent_id:    u32,
    /// Position in the agent's render set; 0 is drawn first.
    pub seq:         u32,
    pub kind:        &'static str,
    /// `#rrggbb`.
    pub color:       String,
    pub width:       f64,
    pub x0:          f64,
    pub y0:          f64,
    pub x1:          f64,
    pub y1:          f64,
    pub radius:      f64,
    pub start_angle: f64,
    pub end_angle:   f64,
}

impl PrimitiveRow {
    pub fn new(frame: u64, time_ms: u64, agent_id: u32, seq: u32, d: &Drawable) -> Self {
        let (x0, y0, x1, y1, radius, start_angle, end_angle) = match d.shape {
            Shape::Line(l) => (l.p0.x, l.p0.y, l.p1.x, l.p1.y, 0.0, 0.0, 0.0),
            Shape::Arc(a) => (
                a.bbox.x0,
                a.bbox.y0,
                a.bbox.x1,
                a.bbox.y1,
                a.radius(),
                a.start_angle,
                a.end_angle,
            ),
            Shape::Circle(c) => (c.center.x, c.center.y, c.center.x, c.center.y, c.radius, 0.0, 0.0),
        };
        Self {
            frame,
            time_ms,
            agent_id,
            seq,
            kind: d.kind_str(),
            color: d.color.to_hex(),
            width: d.width,
            x0,
            y0,
            x1,
            y1,
            radius,
            start_angle,
            end_angle,
        }
    }
}

/// Summary statistics for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub frame:      u64,
    pub time_ms:    u64,
    pub agents:     u64,
    pub primitives: u64,
}
