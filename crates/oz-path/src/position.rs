//! `PathPosition` — one resolver answer.

use kurbo::Point;

use oz_core::SimTime;
use oz_plan::Waypoint;

use crate::arc::{TurnArc, turn_case};
use crate::intersection::{FIRST_MARK_OFFSET, second_half_thresholds};

/// Fraction of the dwell window, counted from its end, in which the agent is
/// considered to be approaching the next turn.
const TURN_APPROACH_WINDOW: f64 = 0.35;

/// Where an agent is at one instant.
///
/// A plain value: the waypoints are copied in, so holding a `PathPosition`
/// does not borrow the track.  `index` identifies `current` in the track for
/// callers that need to write back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathPosition {
    /// Query time, clamped to `[0, max_time]`.
    pub time:  SimTime,
    pub index: usize,

    pub current: Waypoint,
    /// The following waypoint, or `current` again on the last one.
    pub next:    Waypoint,

    pub time_enter:  f64,
    pub time_middle: f64,
    pub time_leave:  f64,

    /// Progress through the current half, in `[0, 1]`.
    pub offset:        f64,
    pub is_first_half: bool,
}

impl PathPosition {
    /// Point on the path: entry edge → center in the first half, center →
    /// exit edge in the second.
    pub fn point(&self) -> Point {
        self.point_at(self.offset)
    }

    /// Like [`point`](Self::point), except that an agent about to stop is
    /// kept from drawing past the quarter-tile mark on its way in.
    pub fn point_bounded(&self) -> Point {
        let offset = if self.is_first_half && self.current.is_stop() {
            self.offset.min(0.5)
        } else {
            self.offset
        };
        self.point_at(offset)
    }

    fn point_at(&self, offset: f64) -> Point {
        let tile = &self.current.tile;
        if self.is_first_half {
            tile.edge_midpoint(self.current.incoming_direction)
                .lerp(tile.center(), offset)
        } else {
            tile.center()
                .lerp(tile.edge_midpoint(self.current.outgoing_direction), offset)
        }
    }

    /// Progress through the whole turn: 0 on the entry edge, 1 on the exit.
    #[inline]
    pub fn turn_progress(&self) -> f64 {
        if self.is_first_half {
            self.offset / 2.0
        } else {
            0.5 + self.offset / 2.0
        }
    }

    /// The arc wedge to draw on a turn waypoint.
    ///
    /// Sized from the waypoint's own tile, so the arc always meets the
    /// tile's edge midpoints.  `None` on straight tiles, while waiting,
    /// before a START turn has begun and after a STOP turn has halted; the
    /// dot path covers those.
    pub fn arc(&self, line_width: f64) -> Option<TurnArc> {
        let wp = &self.current;
        if !wp.is_turn || wp.is_wait() {
            return None;
        }
        if (wp.is_start() && self.is_first_half) || (wp.is_stop() && !self.is_first_half) {
            return None;
        }
        let case = turn_case(wp.previous_direction, wp.next_direction)?;
        Some(case.wedge(wp.tile.center(), wp.tile.size, line_width, self.turn_progress()))
    }

    /// Whether an intersection mark is due now, given the marks the current
    /// waypoint has already received.
    pub fn should_mark_intersection(&self) -> bool {
        if self.current.is_turn {
            return false;
        }
        let count = self.current.intersection_mark_count;
        if self.is_first_half {
            return self.offset >= FIRST_MARK_OFFSET && count < 1;
        }
        let (second, third) = second_half_thresholds(self.next.is_stopping_turn());
        if self.offset >= third {
            count < 3
        } else if self.offset >= second {
            count < 2
        } else {
            false
        }
    }

    /// The next waypoint is a turn and the agent is in the last
    /// [`TURN_APPROACH_WINDOW`] of this dwell window.
    pub fn is_approaching_turn(&self) -> bool {
        let span = self.time_leave - self.time_enter;
        let elapsed = self.time.as_f64() - self.time_enter;
        self.next.is_turn && !self.is_first_half && elapsed >= span * (1.0 - TURN_APPROACH_WINDOW)
    }
}
