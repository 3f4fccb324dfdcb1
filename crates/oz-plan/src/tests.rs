//! Unit tests for oz-plan.

use helpers::grid3;

// ── Helpers ───────────────────────────────────────────────────────────────────

mod helpers {
    use oz_grid::SquareGrid;

    /// 3 × 3 grid of 10 px tiles:
    ///
    /// ```text
    ///   0 1 2
    ///   3 4 5
    ///   6 7 8
    /// ```
    pub fn grid3() -> SquareGrid {
        SquareGrid::new(Default::default(), 3, 3, 10.0).unwrap()
    }
}

fn ids(v: &[u32]) -> Vec<oz_core::TileId> {
    v.iter().copied().map(oz_core::TileId).collect()
}

// ── RawPlan ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod raw_plan {
    use oz_core::TileId;

    use super::ids;
    use crate::RawPlan;

    #[test]
    fn from_positions_derives_steps() {
        let plan = RawPlan::from_positions(ids(&[0, 1, 1, 2]));
        assert_eq!(
            plan.steps,
            vec![None, Some((TileId(0), TileId(1))), None, Some((TileId(1), TileId(2)))]
        );
    }

    #[test]
    fn from_positions_empty() {
        let plan = RawPlan::from_positions(vec![]);
        assert!(plan.is_empty());
        assert!(plan.steps.is_empty());
    }
}

// ── Normalizer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod normalizer {
    use oz_core::{SimTime, TileId};

    use super::ids;
    use crate::{PlanError, RawPlan, normalize};

    #[test]
    fn trailing_waits_are_trimmed() {
        let plan = RawPlan::from_positions(ids(&[0, 1, 2, 2, 2]));
        let n = normalize(&plan, 1000).unwrap();
        assert_eq!(n.tiles, ids(&[0, 1, 2]));
        assert_eq!(n.plan_length, 2);
        assert_eq!(n.max_time, SimTime(2000));
    }

    #[test]
    fn inner_waits_are_kept() {
        let plan = RawPlan::from_positions(ids(&[0, 0, 1, 1, 2]));
        let n = normalize(&plan, 500).unwrap();
        assert_eq!(n.tiles.len(), 5);
        assert_eq!(n.max_time, SimTime(2000));
    }

    #[test]
    fn never_moving_plan_keeps_positions() {
        let plan = RawPlan::new(ids(&[4, 4, 4]), vec![None, None, None]);
        let n = normalize(&plan, 1000).unwrap();
        assert_eq!(n.tiles, ids(&[4, 4, 4]));
        assert_eq!(n.plan_length, 0);
        assert_eq!(n.max_time, SimTime::ZERO);
    }

    #[test]
    fn empty_plan_rejected() {
        let plan = RawPlan::default();
        assert!(matches!(normalize(&plan, 1000), Err(PlanError::Empty)));
    }

    #[test]
    fn length_mismatch_rejected() {
        let plan = RawPlan::new(ids(&[0, 1]), vec![None]);
        assert!(matches!(
            normalize(&plan, 1000),
            Err(PlanError::LengthMismatch { positions: 2, steps: 1 })
        ));
    }

    #[test]
    fn inconsistent_step_rejected() {
        let plan = RawPlan::new(ids(&[0, 1]), vec![None, Some((TileId(3), TileId(1)))]);
        assert!(matches!(
            normalize(&plan, 1000),
            Err(PlanError::StepMismatch { index: 1, from: 3, to: 1 })
        ));
    }

    #[test]
    fn move_without_step_rejected() {
        let plan = RawPlan::new(ids(&[0, 1]), vec![None, None]);
        assert!(matches!(
            normalize(&plan, 1000),
            Err(PlanError::UnrecordedMove { index: 1, from: 0, to: 1 })
        ));
    }
}

// ── Classifier ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod classifier {
    use oz_core::Direction;

    use super::{grid3, ids};
    use crate::{MAX_INTERSECTION_MARKS, MotionType, PlanError, classify};

    #[test]
    fn straight_row() {
        let wps = classify(&ids(&[3, 4, 5]), &grid3()).unwrap();
        let types: Vec<MotionType> = wps.iter().map(|w| w.motion_type).collect();
        assert_eq!(types, vec![MotionType::Start, MotionType::Pass, MotionType::Stop]);
        assert_eq!(wps[1].incoming_direction, Direction::Left);
        assert_eq!(wps[1].outgoing_direction, Direction::Right);
        assert!(wps.iter().all(|w| !w.is_turn && !w.is_u_turn));
    }

    #[test]
    fn up_then_right_is_a_turn() {
        // 1 → 4 → 5: tile 4 is approached from above and left to the right.
        let wps = classify(&ids(&[1, 4, 5]), &grid3()).unwrap();
        assert_eq!(wps[1].previous_direction, Direction::Up);
        assert_eq!(wps[1].next_direction, Direction::Right);
        assert!(wps[1].is_turn);
    }

    #[test]
    fn up_then_down_is_not_a_turn() {
        let wps = classify(&ids(&[1, 4, 7]), &grid3()).unwrap();
        assert_eq!(wps[1].previous_direction, Direction::Up);
        assert_eq!(wps[1].next_direction, Direction::Down);
        assert!(!wps[1].is_turn);
    }

    #[test]
    fn look_through_waits() {
        // Arrive at 4 from the left, wait twice, leave downwards.
        let wps = classify(&ids(&[3, 4, 4, 4, 7]), &grid3()).unwrap();
        assert_eq!(wps[1].motion_type, MotionType::Stop);
        assert_eq!(wps[2].motion_type, MotionType::Wait);
        assert_eq!(wps[3].motion_type, MotionType::Start);
        for wp in &wps[1..4] {
            assert_eq!(wp.previous_direction, Direction::Left);
            assert_eq!(wp.next_direction, Direction::Down);
            assert!(wp.is_turn);
        }
        assert!(wps[1].is_stopping_turn());
        assert!(!wps[3].is_stopping_turn());
    }

    #[test]
    fn u_turn_on_stop() {
        // 3 → 4, wait, back to 3.
        let wps = classify(&ids(&[3, 4, 4, 3]), &grid3()).unwrap();
        assert_eq!(wps[1].motion_type, MotionType::Stop);
        assert_eq!(wps[1].previous_direction, Direction::Left);
        assert_eq!(wps[1].next_direction, Direction::Left);
        assert!(wps[1].is_u_turn);
        assert!(!wps[1].is_turn);
        // The restarting waypoint is not flagged: only the stop is.
        assert!(!wps[2].is_u_turn);
    }

    #[test]
    fn boundary_scans_stop_at_ends() {
        let wps = classify(&ids(&[4, 4]), &grid3()).unwrap();
        for wp in &wps {
            assert_eq!(wp.previous_direction, Direction::None);
            assert_eq!(wp.next_direction, Direction::None);
            assert_eq!(wp.motion_type, MotionType::Wait);
        }
    }

    #[test]
    fn single_tile_is_wait() {
        let wps = classify(&ids(&[8]), &grid3()).unwrap();
        assert_eq!(wps.len(), 1);
        assert!(wps[0].is_wait());
    }

    #[test]
    fn diagonal_step_is_a_geometry_error() {
        let result = classify(&ids(&[0, 4]), &grid3());
        assert!(matches!(result, Err(PlanError::Geometry(_))));
    }

    #[test]
    fn unknown_tile_is_a_geometry_error() {
        let result = classify(&ids(&[0, 99]), &grid3());
        assert!(matches!(result, Err(PlanError::Geometry(_))));
    }

    #[test]
    fn intersection_mark_count_saturates() {
        let mut wps = classify(&ids(&[3, 4, 5]), &grid3()).unwrap();
        for _ in 0..10 {
            wps[1].record_intersection_mark();
        }
        assert_eq!(wps[1].intersection_mark_count, MAX_INTERSECTION_MARKS);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use oz_core::{AgentId, SimTime, TileId};

    use crate::{PlanError, load_plans_reader, normalize};

    const PLANS_JSON: &str = r#"{
        "2": { "pos_list": [5, 4],       "steps": [null, [5, 4]] },
        "1": { "pos_list": [0, 1, 1, 2], "steps": [null, [0, 1], null, [1, 2]] }
    }"#;

    #[test]
    fn loads_sorted_by_agent() {
        let plans = load_plans_reader(Cursor::new(PLANS_JSON)).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].0, AgentId(1));
        assert_eq!(plans[1].0, AgentId(2));
        assert_eq!(plans[0].1.positions.len(), 4);
        assert_eq!(plans[0].1.steps[1], Some((TileId(0), TileId(1))));
        assert_eq!(plans[0].1.steps[2], None);
    }

    #[test]
    fn solver_step_list_without_leading_null() {
        let json = r#"{ "1": { "pos_list": [0, 1, 4, 3], "steps": [[0, 1], [1, 4], [4, 3]] } }"#;
        let plans = load_plans_reader(Cursor::new(json)).unwrap();
        let raw = &plans[0].1;
        assert_eq!(raw.steps.len(), 4);
        assert_eq!(raw.steps[0], None);
        assert_eq!(raw.steps[3], Some((TileId(4), TileId(3))));

        let n = normalize(raw, 1000).unwrap();
        assert_eq!(n.tiles.len(), 4);
        assert_eq!(n.max_time, SimTime(3000));
    }

    #[test]
    fn solver_step_list_with_waits() {
        let json = r#"{ "1": { "pos_list": [0, 1, 1, 2], "steps": [[0, 1], null, [1, 2]] } }"#;
        let plans = load_plans_reader(Cursor::new(json)).unwrap();
        let same_length = load_plans_reader(Cursor::new(PLANS_JSON)).unwrap();
        assert_eq!(plans[0].1, same_length[0].1);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = load_plans_reader(Cursor::new("{ \"1\": { \"pos_list\": [0] } }"));
        assert!(matches!(result, Err(PlanError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = crate::load_plans_json(std::path::Path::new("/nonexistent/plans.json"));
        assert!(matches!(result, Err(PlanError::Io(_))));
    }
}
