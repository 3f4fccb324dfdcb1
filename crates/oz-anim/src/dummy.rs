//! Static whole-path rendering.

use oz_core::Rgb;
use oz_path::PathPosition;

use crate::{AnimationPolicy, Drawable, FrameContext, TailSegment};

/// Draws the full plan as center-to-center lines on the first tick.  The
/// segments never expire, so later ticks add nothing.
#[derive(Debug, Default)]
pub struct DummyPolicy {
    drawn: bool,
}

impl AnimationPolicy for DummyPolicy {
    fn build_tail_update(
        &mut self,
        _position: &PathPosition,
        ctx:       &mut FrameContext<'_>,
    ) -> Vec<TailSegment> {
        if self.drawn {
            return vec![];
        }
        self.drawn = true;

        let width = ctx.config.line_width;
        ctx.track
            .waypoints()
            .windows(2)
            .filter(|w| w[0].tile_id() != w[1].tile_id())
            .map(|w| {
                let line = Drawable::line(w[0].tile.center(), w[1].tile.center(), width, Rgb::BLACK);
                TailSegment::permanent(line, ctx.now)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}
