//! Intersection-mark cadence.
//!
//! While an agent crosses a straight tile it drops up to three short tick
//! marks.  The first lands just before the center, the other two in the
//! second half.  When the next waypoint is a turn the agent stops on, the
//! later marks come earlier so they are drawn before the agent halts.

/// Offset into the first half at which the first mark is drawn.
pub const FIRST_MARK_OFFSET: f64 = 0.45;

/// Second-half offset for the second mark.
pub const SECOND_MARK_OFFSET: f64 = 0.1;
pub const SECOND_MARK_OFFSET_BEFORE_STOPPING_TURN: f64 = 0.03;

/// Second-half offset for the third mark.
pub const THIRD_MARK_OFFSET: f64 = 0.75;
pub const THIRD_MARK_OFFSET_BEFORE_STOPPING_TURN: f64 = 0.6;

/// Second- and third-mark thresholds for the given upcoming waypoint.
pub(crate) fn second_half_thresholds(next_is_stopping_turn: bool) -> (f64, f64) {
    if next_is_stopping_turn {
        (SECOND_MARK_OFFSET_BEFORE_STOPPING_TURN, THIRD_MARK_OFFSET_BEFORE_STOPPING_TURN)
    } else {
        (SECOND_MARK_OFFSET, THIRD_MARK_OFFSET)
    }
}
