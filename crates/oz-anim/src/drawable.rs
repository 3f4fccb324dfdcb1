//! Drawable primitives handed to the renderer.

use kurbo::{Circle, Line, Point};

use oz_core::Rgb;
use oz_path::TurnArc;

/// Geometry of one primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Stroked segment.  A zero-length line is a dot of the line width.
    Line(Line),
    /// Stroked wedge of a turn circle.
    Arc(TurnArc),
    /// Filled circle.
    Circle(Circle),
}

/// A shape with its current color and stroke width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drawable {
    pub shape: Shape,
    pub color: Rgb,
    /// Stroke width in pixels; unused for filled circles.
    pub width: f64,
}

impl Drawable {
    /// Straight line.  Horizontal and vertical lines are lengthened by
    /// `floor(width / 2 - 1)` at both ends so that consecutive pieces meet
    /// without a visible notch at the joint.
    pub fn line(start: Point, end: Point, width: f64, color: Rgb) -> Self {
        let (start, end) = elongate(start, end, width);
        Self { shape: Shape::Line(Line::new(start, end)), color, width }
    }

    /// A single dot at `at`.
    pub fn dot(at: Point, width: f64, color: Rgb) -> Self {
        Self { shape: Shape::Line(Line::new(at, at)), color, width }
    }

    pub fn arc(arc: TurnArc, width: f64, color: Rgb) -> Self {
        Self { shape: Shape::Arc(arc), color, width }
    }

    pub fn disc(center: Point, radius: f64, color: Rgb) -> Self {
        Self { shape: Shape::Circle(Circle::new(center, radius)), color, width: 0.0 }
    }

    /// Short name of the primitive, as written to frame dumps.
    pub fn kind_str(&self) -> &'static str {
        match self.shape {
            Shape::Line(_)   => "line",
            Shape::Arc(_)    => "arc",
            Shape::Circle(_) => "circle",
        }
    }
}

fn elongate(start: Point, end: Point, width: f64) -> (Point, Point) {
    let by = (width / 2.0 - 1.0).floor().max(0.0);
    if start == end || by == 0.0 {
        return (start, end);
    }
    if start.x == end.x {
        let s = if start.y < end.y { 1.0 } else { -1.0 };
        (Point::new(start.x, start.y - s * by), Point::new(end.x, end.y + s * by))
    } else if start.y == end.y {
        let s = if start.x < end.x { 1.0 } else { -1.0 };
        (Point::new(start.x - s * by, start.y), Point::new(end.x + s * by, end.y))
    } else {
        (start, end)
    }
}
