//! Ozobot trail rendering.
//!
//! Each tick adds at most a couple of small pieces at the agent's current
//! position; the tail buffer accumulates them into a continuous line:
//!
//! - waiting: nothing;
//! - on a turn: a 3° wedge of the turn arc;
//! - elsewhere: a dot, or, up to three times per tile, an intersection mark
//!   (a short tick across the path plus a stub back along it);
//! - once per U-turn, after the tile center: a color-cycling badge.

use kurbo::{Point, Vec2};

use oz_core::{Direction, Rgb};
use oz_path::PathPosition;
use tracing::trace;

use crate::{AnimationPolicy, Drawable, FrameContext, TailSegment};

#[derive(Debug, Default)]
pub struct OzobotPolicy;

impl AnimationPolicy for OzobotPolicy {
    fn build_tail_update(
        &mut self,
        position: &PathPosition,
        ctx:      &mut FrameContext<'_>,
    ) -> Vec<TailSegment> {
        let mut out = Vec::with_capacity(2);

        if !position.current.is_wait() {
            match position.arc(ctx.config.line_width) {
                Some(arc) => {
                    let drawable = Drawable::arc(arc, ctx.config.line_width, Rgb::BLACK);
                    out.push(TailSegment::turn(drawable, ctx.now, ctx.config.tail_duration_ms));
                }
                None => straight_update(position, ctx, &mut out),
            }
        }

        if position.current.is_u_turn && !position.is_first_half {
            if let Some(wp) = ctx.track.waypoint_mut(position.index) {
                wp.is_u_turn = false;
            }
            trace!(tile = %position.current.tile_id(), time = %ctx.now, "u-turn badge");
            let badge = Drawable::disc(
                position.current.tile.center(),
                ctx.config.line_width,
                Rgb::BLUE,
            );
            out.push(TailSegment::u_turn_badge(badge, ctx.now, ctx.config.tail_duration_ms));
        }

        out
    }

    fn name(&self) -> &'static str {
        "ozobot"
    }
}

/// Dot or intersection mark for a non-turning tick.
fn straight_update(position: &PathPosition, ctx: &mut FrameContext<'_>, out: &mut Vec<TailSegment>) {
    let cfg = ctx.config;
    let width = cfg.line_width;

    if cfg.colors_enabled && position.should_mark_intersection() {
        let [tick, stub] = intersection_mark(position, width);
        let toward_turn = position.next.is_turn && !position.is_first_half;
        for (a, b) in [tick, stub] {
            let drawable = Drawable::line(a, b, width, Rgb::BLACK);
            out.push(if toward_turn {
                TailSegment::turn(drawable, ctx.now, cfg.tail_duration_ms)
            } else {
                TailSegment::path(drawable, ctx.now, cfg.tail_duration_ms, cfg.colors_enabled)
            });
        }
        if let Some(wp) = ctx.track.waypoint_mut(position.index) {
            wp.record_intersection_mark();
        }
        return;
    }

    let dot = Drawable::dot(position.point_bounded(), width, Rgb::BLACK);
    out.push(if position.is_approaching_turn() {
        TailSegment::turn(dot, ctx.now, cfg.tail_duration_ms)
    } else {
        TailSegment::path(dot, ctx.now, cfg.tail_duration_ms, cfg.colors_enabled)
    });
}

/// Tick across the direction of travel, `4 * width` long, plus a stub of
/// length `width` pointing back the way the agent came.
fn intersection_mark(position: &PathPosition, width: f64) -> [(Point, Point); 2] {
    let wp = &position.current;
    let p = position.point();

    let travel = first_real([wp.previous_direction.opposite(), wp.next_direction]);
    let (dx, dy) = travel.unit();
    let across = Vec2::new(-dy, dx) * (2.0 * width);
    let tick = (p - across, p + across);

    let back = first_real([wp.incoming_direction, wp.previous_direction]);
    let (bx, by) = back.unit();
    let stub = (p, p + Vec2::new(bx, by) * width);

    [tick, stub]
}

fn first_real<const N: usize>(dirs: [Direction; N]) -> Direction {
    dirs.into_iter().find(|d| !d.is_none()).unwrap_or_default()
}
