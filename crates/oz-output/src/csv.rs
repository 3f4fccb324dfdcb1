//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PrimitiveRow, TickSummaryRow};

/// Writes frame dumps to two CSV files.
pub struct CsvWriter {
    frames:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record([
            "frame", "time_ms", "agent_id", "seq", "kind", "color", "width",
            "x0", "y0", "x1", "y1", "radius", "start_angle", "end_angle",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["frame", "time_ms", "agents", "primitives"])?;

        Ok(Self { frames, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_primitives(&mut self, rows: &[PrimitiveRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.frame.to_string(),
                row.time_ms.to_string(),
                row.agent_id.to_string(),
                row.seq.to_string(),
                row.kind.to_string(),
                row.color.clone(),
                row.width.to_string(),
                row.x0.to_string(),
                row.y0.to_string(),
                row.x1.to_string(),
                row.y1.to_string(),
                row.radius.to_string(),
                row.start_angle.to_string(),
                row.end_angle.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.time_ms.to_string(),
            row.agents.to_string(),
            row.primitives.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
