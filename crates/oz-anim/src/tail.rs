//! The tail: a time-windowed FIFO of drawn segments.
//!
//! Every segment carries a `valid_until` deadline.  Segments are appended in
//! creation order and all segments of one buffer share a lifetime, so
//! deadlines are non-decreasing front to back and eviction only ever has to
//! look at the front.

use std::collections::VecDeque;

use oz_core::{Rgb, SimTime};

use crate::Drawable;

/// Colors a U-turn badge cycles through.
pub const U_TURN_PALETTE: [Rgb; 4] = [Rgb::BLUE, Rgb::RED, Rgb::GREEN, Rgb::BLACK];

/// How long a U-turn badge shows each palette color, in milliseconds.
pub const U_TURN_PALETTE_STEP_MS: u64 = 45;

/// Coloring rule of a tail segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// Blue, then black, then red over equal thirds of its lifetime when
    /// colors are enabled; black otherwise.
    Path { colors_enabled: bool },
    /// Always black.
    Turn,
    /// Cycles through [`U_TURN_PALETTE`].
    UTurnBadge,
    /// Keeps the color it was created with.
    Fixed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TailSegment {
    pub drawable:    Drawable,
    pub kind:        SegmentKind,
    pub created_at:  SimTime,
    pub valid_until: SimTime,
}

impl TailSegment {
    fn new(drawable: Drawable, kind: SegmentKind, now: SimTime, duration_ms: u64) -> Self {
        let mut seg = Self {
            drawable,
            kind,
            created_at: now,
            valid_until: now.saturating_add(duration_ms),
        };
        seg.update(now);
        seg
    }

    pub fn path(drawable: Drawable, now: SimTime, duration_ms: u64, colors_enabled: bool) -> Self {
        Self::new(drawable, SegmentKind::Path { colors_enabled }, now, duration_ms)
    }

    pub fn turn(drawable: Drawable, now: SimTime, duration_ms: u64) -> Self {
        Self::new(drawable, SegmentKind::Turn, now, duration_ms)
    }

    pub fn u_turn_badge(drawable: Drawable, now: SimTime, duration_ms: u64) -> Self {
        Self::new(drawable, SegmentKind::UTurnBadge, now, duration_ms)
    }

    /// Segment that keeps its color; `duration_ms = 0` lasts for the
    /// current tick only.
    pub fn fixed(drawable: Drawable, now: SimTime, duration_ms: u64) -> Self {
        Self::new(drawable, SegmentKind::Fixed, now, duration_ms)
    }

    /// Segment that is never evicted.
    pub fn permanent(drawable: Drawable, now: SimTime) -> Self {
        Self { drawable, kind: SegmentKind::Fixed, created_at: now, valid_until: SimTime::NEVER }
    }

    #[inline]
    pub fn is_valid(&self, now: SimTime) -> bool {
        now <= self.valid_until
    }

    /// Recolor for the current time.
    pub fn update(&mut self, now: SimTime) {
        let age = now.since(self.created_at);
        match self.kind {
            SegmentKind::Path { colors_enabled: true } => {
                let lifetime = self.valid_until.since(self.created_at);
                self.drawable.color = path_color(age, lifetime);
            }
            SegmentKind::Path { colors_enabled: false } | SegmentKind::Turn => {
                self.drawable.color = Rgb::BLACK;
            }
            SegmentKind::UTurnBadge => {
                let step = (age / U_TURN_PALETTE_STEP_MS) as usize;
                self.drawable.color = U_TURN_PALETTE[step % U_TURN_PALETTE.len()];
            }
            SegmentKind::Fixed => {}
        }
    }
}

fn path_color(age: u64, lifetime: u64) -> Rgb {
    let scaled = age.saturating_mul(3);
    if scaled < lifetime {
        Rgb::BLUE
    } else if scaled < lifetime.saturating_mul(2) {
        Rgb::BLACK
    } else {
        Rgb::RED
    }
}

/// An agent's trail.
#[derive(Clone, Debug, Default)]
pub struct TailBuffer {
    segments: VecDeque<TailSegment>,
}

impl TailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, segment: TailSegment) {
        self.segments.push_back(segment);
    }

    /// Drop expired segments from the front.  Returns how many were dropped.
    pub fn evict(&mut self, now: SimTime) -> usize {
        let mut dropped = 0;
        while self.segments.front().is_some_and(|s| !s.is_valid(now)) {
            self.segments.pop_front();
            dropped += 1;
        }
        dropped
    }

    /// Recolor every remaining segment.
    pub fn tick(&mut self, now: SimTime) {
        for seg in &mut self.segments {
            seg.update(now);
        }
    }

    /// Drawables in insertion order.
    pub fn render_set(&self) -> Vec<&Drawable> {
        self.segments.iter().map(|s| &s.drawable).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TailSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl Extend<TailSegment> for TailBuffer {
    fn extend<I: IntoIterator<Item = TailSegment>>(&mut self, iter: I) {
        self.segments.extend(iter);
    }
}
