//! row — smallest demo for the ozmapf path animator.
//!
//! Animates three Ozobots on a 5 × 3 tile map: one drives along the top row
//! with a pause and turns down at the end, one climbs from the bottom left,
//! runs right and comes back (a U-turn), one drives the bottom row
//! leftwards.  Every frame's render set is dumped to `output/row/`.
//!
//! ```text
//! cargo run -p row -- [config.json] [plans.json]
//! ```
//!
//! Both files are optional; the embedded plans and `AnimConfig::default()`
//! are used otherwise.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use kurbo::Point;
use tracing::info;

use oz_core::AnimConfig;
use oz_grid::SquareGrid;
use oz_output::{CsvWriter, FrameOutputObserver};
use oz_plan::{load_plans_json, load_plans_reader};
use oz_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const MAP_WIDTH:  u32  = 5;
const MAP_HEIGHT: u32  = 3;
const OUTPUT_DIR: &str = "output/row";
/// Dump every 2nd frame (100 ms of animation at the default frame time).
const OUTPUT_INTERVAL_FRAMES: u64 = 2;

// ── Plans ─────────────────────────────────────────────────────────────────────

// Tile ids, row-major:
//
//    0  1  2  3  4
//    5  6  7  8  9
//   10 11 12 13 14
const PLANS_JSON: &str = r#"{
  "1": { "pos_list": [0, 1, 2, 2, 3, 4, 9],
         "steps":    [null, [0, 1], [1, 2], null, [2, 3], [3, 4], [4, 9]] },
  "2": { "pos_list": [10, 5, 6, 7, 7, 6, 6],
         "steps":    [null, [10, 5], [5, 6], [6, 7], null, [7, 6], null] },
  "3": { "pos_list": [14, 13, 12, 11, 10],
         "steps":    [null, [14, 13], [13, 12], [12, 11], [11, 10]] }
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);

    // 1. Config.
    let config = match args.next() {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader::<_, AnimConfig>(BufReader::new(file))
                .with_context(|| format!("parsing config {path}"))?
        }
        None => AnimConfig::default(),
    };
    config.validate()?;

    // 2. Plans.
    let plans = match args.next() {
        Some(path) => load_plans_json(Path::new(&path))?,
        None => load_plans_reader(Cursor::new(PLANS_JSON))?,
    };

    // 3. Grid.
    let grid = SquareGrid::new(Point::ZERO, MAP_WIDTH, MAP_HEIGHT, config.tile_size)?;

    println!("=== row — ozmapf path animator ===");
    println!(
        "Map: {MAP_WIDTH} x {MAP_HEIGHT} tiles  |  Agents: {}  |  Kind: {}",
        plans.len(),
        config.agent_kind
    );
    println!(
        "Step: {} ms  |  Tail: {} ms  |  Frame: {} ms  |  Colors: {}",
        config.step_time_ms, config.tail_duration_ms, config.frame_ms, config.colors_enabled
    );
    println!();

    // 4. Build sim.
    let mut sim = SimBuilder::new(config, grid).plans(plans).build()?;

    // 5. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = FrameOutputObserver::new(writer).with_interval(OUTPUT_INTERVAL_FRAMES);

    // 6. Run.
    let t0 = Instant::now();
    let frames = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    info!(frames, elapsed_ms = elapsed.as_millis() as u64, "done");

    // 7. Summary.
    println!("Animated {frames} frames ({}) in {:.3} s", sim.end_time(), elapsed.as_secs_f64());
    println!("  frames.csv, tick_summaries.csv written to {OUTPUT_DIR}/");
    println!();

    println!("{:<8} {:<8} {:<10} {:<10}", "Agent", "Moves", "Arrives", "Marks");
    println!("{}", "-".repeat(38));
    for agent in &sim.agents {
        let marks: u32 = agent
            .track()
            .waypoints()
            .iter()
            .map(|w| u32::from(w.intersection_mark_count))
            .sum();
        println!(
            "{:<8} {:<8} {:<10} {:<10}",
            agent.id().0,
            agent.plan_length(),
            agent.max_time().to_string(),
            marks,
        );
    }

    Ok(())
}
