//! Integration tests for oz-output.

use kurbo::Point;
use oz_anim::Drawable;
use oz_core::Rgb;

use crate::row::{PrimitiveRow, TickSummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line_row(agent_id: u32, seq: u32) -> PrimitiveRow {
    let d = Drawable::line(Point::new(0.0, 5.0), Point::new(3.0, 9.0), 2.0, Rgb::RED);
    PrimitiveRow::new(4, 200, agent_id, seq, &d)
}

fn summary_row(frame: u64) -> TickSummaryRow {
    TickSummaryRow { frame, time_ms: frame * 50, agents: 2, primitives: frame }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use kurbo::Point;
    use oz_anim::Drawable;
    use oz_core::Rgb;

    use super::line_row;
    use crate::PrimitiveRow;

    #[test]
    fn line_columns() {
        let r = line_row(1, 0);
        assert_eq!(r.kind, "line");
        assert_eq!(r.color, "#ff0000");
        assert_eq!((r.x0, r.y0, r.x1, r.y1), (0.0, 5.0, 3.0, 9.0));
        assert_eq!(r.radius, 0.0);
    }

    #[test]
    fn circle_columns() {
        let d = Drawable::disc(Point::new(7.0, 8.0), 4.0, Rgb::GREEN);
        let r = PrimitiveRow::new(0, 0, 3, 2, &d);
        assert_eq!(r.kind, "circle");
        assert_eq!((r.x0, r.y0, r.x1, r.y1), (7.0, 8.0, 7.0, 8.0));
        assert_eq!(r.radius, 4.0);
        assert_eq!(r.seq, 2);
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::{line_row, summary_row};
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("frames.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[..6], ["frame", "time_ms", "agent_id", "seq", "kind", "color"]);
        assert_eq!(headers.len(), 14);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["frame", "time_ms", "agents", "primitives"]);
    }

    #[test]
    fn csv_primitives_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_primitives(&[line_row(0, 0), line_row(0, 1), line_row(1, 0)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 3);
        assert_eq!(&read[0][0], "4");       // frame
        assert_eq!(&read[0][1], "200");     // time_ms
        assert_eq!(&read[1][3], "1");       // seq
        assert_eq!(&read[2][2], "1");       // agent_id
        assert_eq!(&read[2][5], "#ff0000"); // color
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 1);
        assert_eq!(&read[0][0], "3");
        assert_eq!(&read[0][1], "150");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use oz_core::{AgentId, AnimConfig, TileId};
    use oz_grid::SquareGrid;
    use oz_plan::RawPlan;
    use oz_sim::SimBuilder;

    use crate::{
        CsvWriter, FrameOutputObserver, OutputError, OutputResult, OutputWriter, PrimitiveRow,
        TickSummaryRow,
    };

    fn small_sim() -> oz_sim::Simulator<SquareGrid> {
        let grid = SquareGrid::new(Default::default(), 3, 3, 10.0).unwrap();
        let cfg = AnimConfig { tile_size: 10.0, line_width: 2.0, ..AnimConfig::default() };
        let plan = |v: &[u32]| RawPlan::from_positions(v.iter().copied().map(TileId).collect());
        SimBuilder::new(cfg, grid)
            .plan(AgentId(0), plan(&[0, 1, 2]))
            .plan(AgentId(1), plan(&[6, 3, 4]))
            .build()
            .unwrap()
    }

    /// Keeps rows in memory.
    #[derive(Default)]
    struct MemWriter {
        primitives: Vec<PrimitiveRow>,
        summaries:  Vec<TickSummaryRow>,
        finished:   usize,
    }

    impl OutputWriter for MemWriter {
        fn write_primitives(&mut self, rows: &[PrimitiveRow]) -> OutputResult<()> {
            self.primitives.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct BrokenWriter;

    impl OutputWriter for BrokenWriter {
        fn write_primitives(&mut self, _rows: &[PrimitiveRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("second failure")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn summaries_match_frames() {
        let mut sim = small_sim();
        let mut obs = FrameOutputObserver::new(MemWriter::default());
        let frames = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries.len() as u64, frames);
        assert_eq!(w.finished, 1);
        assert!(w.summaries.iter().all(|s| s.agents == 2));

        let total: u64 = w.summaries.iter().map(|s| s.primitives).sum();
        assert_eq!(total, w.primitives.len() as u64);
    }

    #[test]
    fn interval_skips_frames() {
        let mut sim = small_sim();
        let mut obs = FrameOutputObserver::new(MemWriter::default()).with_interval(10);
        let frames = sim.run(&mut obs);
        let w = obs.into_writer();
        assert_eq!(w.summaries.len() as u64, frames.div_ceil(10));
        assert!(w.summaries.iter().all(|s| s.frame % 10 == 0));
        assert!(w.primitives.iter().all(|p| p.frame % 10 == 0));
    }

    #[test]
    fn first_error_kept() {
        let mut sim = small_sim();
        let mut obs = FrameOutputObserver::new(BrokenWriter);
        sim.run_ticks(5, &mut obs);
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = small_sim();
        let mut obs = FrameOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let frames = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, frames);
        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        assert!(rdr.records().count() > 0);
    }
}
