//! Integration tests for oz-sim.

use oz_anim::Drawable;
use oz_core::{AgentId, AgentKind, AnimConfig, SimTime, TileId};
use oz_grid::SquareGrid;
use oz_plan::RawPlan;

use crate::{NoopObserver, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> AnimConfig {
    AnimConfig {
        step_time_ms:     1_000,
        tail_duration_ms: 1_500,
        frame_ms:         50,
        tile_size:        10.0,
        line_width:       2.0,
        colors_enabled:   true,
        agent_kind:       AgentKind::Ozobot,
    }
}

/// 3 × 3 grid of 10 px tiles.
fn grid3() -> SquareGrid {
    SquareGrid::new(Default::default(), 3, 3, 10.0).unwrap()
}

fn plan(positions: &[u32]) -> RawPlan {
    RawPlan::from_positions(positions.iter().copied().map(TileId).collect())
}

/// Records every callback.
#[derive(Default)]
struct Recorder {
    starts:      Vec<(u64, SimTime)>,
    agent_order: Vec<Vec<AgentId>>,
    totals:      Vec<usize>,
    ends:        Vec<SimTime>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, frame: u64, now: SimTime) {
        self.starts.push((frame, now));
        self.agent_order.push(vec![]);
    }

    fn on_agent_frame(&mut self, _now: SimTime, agent: AgentId, _drawables: &[&Drawable]) {
        if let Some(last) = self.agent_order.last_mut() {
            last.push(agent);
        }
    }

    fn on_tick_end(&mut self, _now: SimTime, primitives: usize) {
        self.totals.push(primitives);
    }

    fn on_sim_end(&mut self, end: SimTime) {
        self.ends.push(end);
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use crate::SimClock;
    use oz_core::SimTime;

    #[test]
    fn advances_by_frame() {
        let mut c = SimClock::new(50);
        assert_eq!(c.now(), SimTime::ZERO);
        c.advance();
        c.advance();
        assert_eq!(c.frame, 2);
        assert_eq!(c.now(), SimTime(100));
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_no_agents() {
        let sim = SimBuilder::new(test_config(), grid3()).build().unwrap();
        assert!(sim.agents.is_empty());
        assert_eq!(sim.end_time(), SimTime(1_500));
    }

    #[test]
    fn invalid_config_errors() {
        let cfg = AnimConfig { frame_ms: 0, ..test_config() };
        let result = SimBuilder::new(cfg, grid3()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn bad_plan_names_the_agent() {
        let result = SimBuilder::new(test_config(), grid3())
            .plan(AgentId(1), plan(&[0, 1]))
            .plan(AgentId(7), plan(&[0, 2]))
            .build();
        match result {
            Err(SimError::Agent { agent, .. }) => assert_eq!(agent, AgentId(7)),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn duplicate_agent_errors() {
        let result = SimBuilder::new(test_config(), grid3())
            .plans(vec![(AgentId(2), plan(&[0, 1])), (AgentId(2), plan(&[3, 4]))])
            .build();
        assert!(matches!(result, Err(SimError::DuplicateAgent(AgentId(2)))));
    }

    #[test]
    fn agents_sorted_by_id() {
        let sim = SimBuilder::new(test_config(), grid3())
            .plans(vec![
                (AgentId(5), plan(&[0, 1])),
                (AgentId(1), plan(&[3, 4])),
                (AgentId(3), plan(&[6, 7])),
            ])
            .build()
            .unwrap();
        let ids: Vec<_> = sim.agents.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(3), AgentId(5)]);
    }

    #[test]
    fn end_time_is_last_arrival_plus_tail() {
        let sim = SimBuilder::new(test_config(), grid3())
            .plan(AgentId(0), plan(&[0, 1]))
            .plan(AgentId(1), plan(&[3, 4, 5, 2]))
            .build()
            .unwrap();
        assert_eq!(sim.end_time(), SimTime(3_000 + 1_500));
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    fn two_agents() -> crate::Simulator<SquareGrid> {
        SimBuilder::new(test_config(), grid3())
            .plan(AgentId(1), plan(&[3, 4, 5]))
            .plan(AgentId(0), plan(&[0, 1, 2]))
            .build()
            .unwrap()
    }

    #[test]
    fn run_covers_zero_through_end() {
        let mut sim = two_agents();
        let mut rec = Recorder::default();
        let frames = sim.run(&mut rec);

        // end = 2000 + 1500; frames at 0, 50, …, 3500.
        assert_eq!(frames, 71);
        assert_eq!(rec.starts.len(), 71);
        assert_eq!(rec.starts.first(), Some(&(0, SimTime::ZERO)));
        assert_eq!(rec.starts.last(), Some(&(70, SimTime(3_500))));
        assert_eq!(rec.ends, vec![SimTime(3_500)]);
    }

    #[test]
    fn agents_reported_in_id_order() {
        let mut sim = two_agents();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec
            .agent_order
            .iter()
            .all(|ids| ids == &vec![AgentId(0), AgentId(1)]));
    }

    #[test]
    fn primitives_match_render_sets() {
        let mut sim = two_agents();
        let mut rec = Recorder::default();
        sim.run_ticks(30, &mut rec);
        let last = *rec.totals.last().unwrap();
        let live: usize = sim.agents.iter().map(|a| a.render_set().len()).sum();
        assert_eq!(last, live);
        assert!(last > 0);
    }

    #[test]
    fn run_ticks_ignores_end_time() {
        let mut sim = two_agents();
        sim.run_ticks(200, &mut NoopObserver);
        assert_eq!(sim.clock.frame, 200);
        assert_eq!(sim.clock.now(), SimTime(10_000));
    }

    #[test]
    fn run_resumes_after_manual_ticks() {
        let mut sim = two_agents();
        sim.run_ticks(10, &mut NoopObserver);
        let frames = sim.run(&mut NoopObserver);
        assert_eq!(frames, 61);
    }
}
