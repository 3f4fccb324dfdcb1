//! `FrameOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use oz_anim::Drawable;
use oz_core::{AgentId, SimTime};
use oz_sim::SimObserver;

use crate::row::{PrimitiveRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every agent's render set and a per-frame
/// summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FrameOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Record every `interval`-th frame; 1 records all.
    interval:   u64,
    frame:      u64,
    agents:     u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FrameOutputObserver<W> {
    /// Create an observer recording every frame.
    pub fn new(writer: W) -> Self {
        Self { writer, interval: 1, frame: 0, agents: 0, last_error: None }
    }

    /// Only record frames whose index is a multiple of `interval`.
    /// `0` is treated as `1`.
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn recording(&self) -> bool {
        self.frame.is_multiple_of(self.interval)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for FrameOutputObserver<W> {
    fn on_tick_start(&mut self, frame: u64, _now: SimTime) {
        self.frame = frame;
        self.agents = 0;
    }

    fn on_agent_frame(&mut self, now: SimTime, agent: AgentId, drawables: &[&Drawable]) {
        self.agents += 1;
        if !self.recording() || drawables.is_empty() {
            return;
        }
        let rows: Vec<PrimitiveRow> = drawables
            .iter()
            .enumerate()
            .map(|(seq, d)| PrimitiveRow::new(self.frame, now.as_millis(), agent.0, seq as u32, d))
            .collect();
        let result = self.writer.write_primitives(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, now: SimTime, primitives: usize) {
        if !self.recording() {
            return;
        }
        let row = TickSummaryRow {
            frame:      self.frame,
            time_ms:    now.as_millis(),
            agents:     self.agents,
            primitives: primitives as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _end: SimTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
