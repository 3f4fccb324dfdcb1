//! Position-tile classifier.
//!
//! # Direction conventions
//!
//! All four direction fields of a [`Waypoint`] point *away from the tile*:
//!
//! - `incoming_direction` — towards the tile the agent occupied one plan step
//!   earlier (`Left` when the agent arrived moving right).
//! - `outgoing_direction` — towards the tile it occupies one plan step later.
//! - `previous_direction` / `next_direction` — the same, but looking through
//!   any run of waits on this tile to find the real approach and exit.
//!
//! With this convention a turn is "previous and next are orthogonal" and a
//! U-turn is "previous equals next".

use oz_core::{Direction, TileId};
use oz_grid::{Tile, TileProvider};

use crate::PlanResult;

/// Upper bound on intersection marks drawn for one waypoint over a whole run.
pub const MAX_INTERSECTION_MARKS: u8 = 3;

/// How the agent behaves on a waypoint, derived from its immediate neighbors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MotionType {
    /// Arrives from nowhere (path start or end of a wait), leaves normally.
    Start,
    /// Arrives and leaves within one step.
    Pass,
    /// Neither arrives nor leaves: a wait in the middle of a wait run.
    Wait,
    /// Arrives and then stays on the tile for the next step.
    Stop,
}

impl MotionType {
    fn from_directions(incoming: Direction, outgoing: Direction) -> Self {
        match (incoming.is_none(), outgoing.is_none()) {
            (true, true)   => MotionType::Wait,
            (true, false)  => MotionType::Start,
            (false, true)  => MotionType::Stop,
            (false, false) => MotionType::Pass,
        }
    }
}

/// One tile visited by an agent's trimmed plan.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub tile: Tile,

    pub incoming_direction: Direction,
    pub outgoing_direction: Direction,

    /// Approach direction, looking back through waits on this tile.
    pub previous_direction: Direction,
    /// Exit direction, looking ahead through waits on this tile.
    pub next_direction: Direction,

    pub motion_type: MotionType,

    /// `previous_direction` and `next_direction` are orthogonal.
    pub is_turn: bool,

    /// A `Stop` waypoint the agent later leaves the way it came.  Cleared by
    /// the animation driver once the U-turn badge has been drawn.
    pub is_u_turn: bool,

    /// Intersection marks drawn so far; never exceeds
    /// [`MAX_INTERSECTION_MARKS`] and is never reset.
    pub intersection_mark_count: u8,
}

impl Waypoint {
    fn new(
        tile: Tile,
        incoming: Direction,
        outgoing: Direction,
        previous: Direction,
        next: Direction,
    ) -> Self {
        let motion_type = MotionType::from_directions(incoming, outgoing);
        Self {
            tile,
            incoming_direction: incoming,
            outgoing_direction: outgoing,
            previous_direction: previous,
            next_direction: next,
            motion_type,
            is_turn: previous.is_orthogonal_to(next),
            is_u_turn: motion_type == MotionType::Stop && previous == next,
            intersection_mark_count: 0,
        }
    }

    #[inline]
    pub fn tile_id(&self) -> TileId {
        self.tile.id
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.motion_type == MotionType::Start
    }

    #[inline]
    pub fn is_stop(&self) -> bool {
        self.motion_type == MotionType::Stop
    }

    #[inline]
    pub fn is_wait(&self) -> bool {
        self.motion_type == MotionType::Wait
    }

    /// A turn the agent comes to a halt on before completing it.
    #[inline]
    pub fn is_stopping_turn(&self) -> bool {
        self.is_turn && self.is_stop()
    }

    /// Count one more intersection mark, saturating at the cap.
    pub fn record_intersection_mark(&mut self) {
        self.intersection_mark_count =
            (self.intersection_mark_count + 1).min(MAX_INTERSECTION_MARKS);
    }
}

/// Resolve `tiles` through `provider` and classify every position.
///
/// # Errors
///
/// Fails with a geometry error if a tile id is unknown to the provider or two
/// consecutive tiles are neither identical nor edge-adjacent.
pub fn classify<P>(tiles: &[TileId], provider: &P) -> PlanResult<Vec<Waypoint>>
where
    P: TileProvider + ?Sized,
{
    let resolved: Vec<Tile> = tiles
        .iter()
        .map(|&id| provider.tile(id))
        .collect::<Result<_, _>>()?;

    let n = resolved.len();
    let mut waypoints = Vec::with_capacity(n);

    for (i, tile) in resolved.iter().enumerate() {
        let incoming = match i {
            0 => Direction::None,
            _ => tile.direction_to(&resolved[i - 1])?,
        };
        let outgoing = if i + 1 < n {
            tile.direction_to(&resolved[i + 1])?
        } else {
            Direction::None
        };
        let previous = first_move(tile, resolved[..i].iter().rev())?;
        let next = first_move(tile, resolved[i + 1..].iter())?;

        waypoints.push(Waypoint::new(*tile, incoming, outgoing, previous, next));
    }

    Ok(waypoints)
}

/// Direction to the first tile in `others` that differs from `tile`.
///
/// Every tile skipped over is `tile` itself, so the first differing one is
/// adjacent whenever the plan is well formed.
fn first_move<'a>(tile: &Tile, others: impl Iterator<Item = &'a Tile>) -> PlanResult<Direction> {
    for other in others {
        let d = tile.direction_to(other)?;
        if !d.is_none() {
            return Ok(d);
        }
    }
    Ok(Direction::None)
}
