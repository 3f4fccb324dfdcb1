//! Straight-line trail rebuilt every tick.

use kurbo::Point;

use oz_core::Rgb;
use oz_path::{PathPosition, Track};

use crate::{AnimationPolicy, Drawable, FrameContext, TailSegment};

/// Draws straight lines from where the agent was `tail_duration` ago to
/// where it is now, routed through tile centers.  Nothing carries over
/// between ticks: every segment expires at the end of the tick it was drawn
/// in.
#[derive(Debug, Default)]
pub struct AnimatedPolicy;

impl AnimationPolicy for AnimatedPolicy {
    fn build_tail_update(
        &mut self,
        position: &PathPosition,
        ctx:      &mut FrameContext<'_>,
    ) -> Vec<TailSegment> {
        let from = ctx.track.resolve(ctx.now.saturating_sub(ctx.config.tail_duration_ms));
        let width = ctx.config.line_width;

        let mut pieces = trail_pieces(ctx.track, &from, position);
        pieces.retain(|(a, b)| a != b);

        if pieces.is_empty() {
            let dot = Drawable::dot(position.point(), width, Rgb::BLACK);
            return vec![TailSegment::fixed(dot, ctx.now, 0)];
        }
        pieces
            .into_iter()
            .map(|(a, b)| TailSegment::fixed(Drawable::line(a, b, width, Rgb::BLACK), ctx.now, 0))
            .collect()
    }

    fn name(&self) -> &'static str {
        "animated"
    }
}

/// Line pieces from `from` to `to` along the track.
fn trail_pieces(track: &Track, from: &PathPosition, to: &PathPosition) -> Vec<(Point, Point)> {
    let mut out = Vec::new();

    if from.index == to.index {
        let center = to.current.tile.center();
        if from.is_first_half == to.is_first_half {
            out.push((from.point(), to.point()));
        } else {
            out.push((from.point(), center));
            out.push((center, to.point()));
        }
        return out;
    }

    // Out of the tail's tile.
    let tile = from.current.tile;
    let exit = tile.edge_midpoint(from.current.outgoing_direction);
    if from.is_first_half {
        out.push((from.point(), tile.center()));
        out.push((tile.center(), exit));
    } else {
        out.push((from.point(), exit));
    }

    // Whole tiles in between.
    for wp in &track.waypoints()[from.index + 1..to.index] {
        let c = wp.tile.center();
        out.push((wp.tile.edge_midpoint(wp.incoming_direction), c));
        out.push((c, wp.tile.edge_midpoint(wp.outgoing_direction)));
    }

    // Into the head's tile.
    let tile = to.current.tile;
    let entry = tile.edge_midpoint(to.current.incoming_direction);
    if to.is_first_half {
        out.push((entry, to.point()));
    } else {
        out.push((entry, tile.center()));
        out.push((tile.center(), to.point()));
    }
    out
}
