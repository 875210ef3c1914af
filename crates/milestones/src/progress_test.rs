#[cfg(test)]
mod tests {
    use crate::progress::*;
    use crate::transform::{transform, Milestone};
    use common::models::{BadgeDefinition, CriteriaType};

    fn milestone(criteria_value: u32, active: bool) -> Milestone {
        Milestone {
            badge: BadgeDefinition {
                id: format!("badge-{}", criteria_value),
                name: format!("{} PRs", criteria_value),
                description: String::new(),
                criteria_type: CriteriaType::Prs,
                criteria_value,
                is_awarded: active,
                current_value: 0,
                icon: None,
                difficulty: None,
            },
            active,
            image_ref: String::new(),
            level: String::new(),
            glyph: String::new(),
        }
    }

    fn ladder() -> Vec<Milestone> {
        vec![milestone(5, true), milestone(10, false), milestone(25, false)]
    }

    #[test]
    fn test_partial_progress_between_milestones() {
        let summary = compute_progress(&ladder(), 7);

        assert_eq!(summary.next_milestone.as_ref().unwrap().criteria_value(), 10);
        assert_eq!(summary.next_target, 10);
        assert_eq!(summary.previous_target, 5);
        assert!((summary.progress_percent - 40.0).abs() < 1e-9);
        assert_eq!(summary.label(), "40.0% Complete");
    }

    #[test]
    fn test_boundary_reached_is_full() {
        let summary = compute_progress(&ladder(), 10);

        assert_eq!(summary.next_target, 10);
        assert_eq!(summary.progress_percent, 100.0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_empty_list() {
        let summary = compute_progress(&[], 3);

        assert!(summary.next_milestone.is_none());
        assert_eq!(summary.next_target, 0);
        assert_eq!(summary.previous_target, 0);
        assert_eq!(summary.progress_percent, 100.0);
    }

    #[test]
    fn test_all_active() {
        let milestones = vec![milestone(1, true), milestone(5, true), milestone(20, true)];
        let summary = compute_progress(&milestones, 30);

        assert!(summary.next_milestone.is_none());
        assert_eq!(summary.next_target, 20);
        assert_eq!(summary.previous_target, 20);
        assert_eq!(summary.progress_percent, 100.0);
    }

    #[test]
    fn test_first_milestone_starts_at_zero() {
        let milestones = vec![milestone(4, false), milestone(8, false)];
        let summary = compute_progress(&milestones, 1);

        assert_eq!(summary.previous_target, 0);
        assert_eq!(summary.next_target, 4);
        assert!((summary.progress_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_thresholds_do_not_divide_by_zero() {
        let milestones = vec![milestone(5, true), milestone(5, false)];
        let summary = compute_progress(&milestones, 2);

        assert_eq!(summary.progress_percent, 100.0);
    }

    #[test]
    fn test_descending_thresholds_stay_in_range() {
        let milestones = vec![milestone(10, true), milestone(3, false)];
        let summary = compute_progress(&milestones, 1);

        assert_eq!(summary.previous_target, 10);
        assert_eq!(summary.progress_percent, 100.0);
    }

    #[test]
    fn test_below_previous_target_clamps_to_zero() {
        // Awarded by the backend even though the local count is lower
        let summary = compute_progress(&ladder(), 2);

        assert_eq!(summary.previous_target, 5);
        assert_eq!(summary.progress_percent, 0.0);
    }

    #[test]
    fn test_percent_always_in_range() {
        let ladders = vec![
            ladder(),
            vec![milestone(1, false)],
            vec![milestone(3, true), milestone(2, false), milestone(9, false)],
        ];
        for milestones in &ladders {
            for current in 0..40 {
                let p = compute_progress(milestones, current).progress_percent;
                assert!((0.0..=100.0).contains(&p), "{} out of range", p);
            }
        }
    }

    #[test]
    fn test_pipeline_with_push_override() {
        let badges: Vec<BadgeDefinition> = [1, 5, 20]
            .iter()
            .map(|&v| milestone(v, false).badge)
            .collect();

        // 6 PRs: the first two are reached locally even though none are awarded
        let milestones = transform(&badges, 6);
        assert!(milestones[0].active && milestones[1].active && !milestones[2].active);

        let summary = compute_progress(&milestones, 6);
        assert_eq!(summary.next_target, 20);
        assert_eq!(summary.previous_target, 5);
        assert!((summary.progress_percent - 100.0 / 15.0).abs() < 1e-9);
    }
}
