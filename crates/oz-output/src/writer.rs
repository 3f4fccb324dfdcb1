//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PrimitiveRow, TickSummaryRow};

/// Sink for frame dumps.
///
/// Errors are returned to the caller; [`FrameOutputObserver`] keeps the
/// first one for [`take_error`].
///
/// [`FrameOutputObserver`]: crate::FrameOutputObserver
/// [`take_error`]: crate::FrameOutputObserver::take_error
pub trait OutputWriter {
    /// Write the primitives of one agent for one frame.
    fn write_primitives(&mut self, rows: &[PrimitiveRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
