//! `oz-output` — frame dumps for the ozmapf path animator.
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `frames.csv`, `tick_summaries.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FrameOutputObserver`], which implements `oz_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use oz_output::{CsvWriter, FrameOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = FrameOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FrameOutputObserver;
pub use row::{PrimitiveRow, TickSummaryRow};
pub use writer::OutputWriter;
