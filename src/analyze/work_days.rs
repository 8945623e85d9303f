use crate::types::config::WorkDaysParams;
use crate::types::scoring::{Score, WorkloadFlags};

/// Piecewise score around the standard: progressive penalty below it, three
/// bonus tiers above it, capped at `max_score` and floored at `min_score`.
pub fn work_days_score(days: f64, params: &WorkDaysParams) -> Score {
    let standard = params.standard;

    if days < standard {
        let penalty = progressive_penalty(
            days,
            standard,
            params.base_penalty_rate,
            params.progressive_multiplier,
        );
        return (100.0 - penalty).max(params.min_score);
    }

    if days == standard {
        return 100.0;
    }

    let tier1_full = (params.tier1_max - standard) * params.tier1_rate;
    let tier2_full = (params.tier2_max - params.tier1_max) * params.tier2_rate;

    let score = if days <= params.tier1_max {
        100.0 + (days - standard) * params.tier1_rate
    } else if days <= params.tier2_max {
        100.0 + tier1_full + (days - params.tier1_max) * params.tier2_rate
    } else {
        100.0 + tier1_full + tier2_full + (days - params.tier2_max) * params.tier3_rate
    };
    score.min(params.max_score)
}

/// `base_rate * multiplier^(gap - 1) * gap` where `gap = standard - days`.
///
/// Each extra day of shortfall costs more than the one before. Only
/// meaningful for `gap > 0`; a non-positive gap yields no penalty.
pub fn progressive_penalty(days: f64, standard: f64, base_rate: f64, multiplier: f64) -> f64 {
    let gap = standard - days;
    if gap <= 0.0 {
        return 0.0;
    }
    base_rate * multiplier.powf(gap - 1.0) * gap
}

pub fn needs_review(days: f64, params: &WorkDaysParams) -> bool {
    days > params.inflation_threshold
}

pub fn is_overloaded(days: f64, params: &WorkDaysParams) -> bool {
    days > params.overload_threshold
}

pub fn workload_flags(days: f64, params: &WorkDaysParams) -> WorkloadFlags {
    WorkloadFlags {
        needs_review: needs_review(days, params),
        is_overloaded: is_overloaded(days, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn exactly_one_hundred_at_standard() {
        let params = WorkDaysParams::default();
        assert_eq!(work_days_score(10.0, &params), 100.0);
    }

    #[test]
    fn bonus_tiers_above_standard() {
        let params = WorkDaysParams::default();
        assert!(approx(work_days_score(11.0, &params), 102.0));
        assert!(approx(work_days_score(15.0, &params), 110.0));
        assert!(approx(work_days_score(18.0, &params), 113.0));
        assert!(approx(work_days_score(20.0, &params), 115.0));
        assert!(approx(work_days_score(25.0, &params), 117.5));
        assert!(approx(work_days_score(33.0, &params), 121.5));
    }

    #[test]
    fn bonus_capped_at_max_score() {
        let params = WorkDaysParams::default();
        assert_eq!(work_days_score(50.0, &params), 130.0);
        assert_eq!(work_days_score(400.0, &params), 130.0);

        let tight = WorkDaysParams {
            max_score: 105.0,
            ..WorkDaysParams::default()
        };
        assert_eq!(work_days_score(13.0, &tight), 105.0);
    }

    #[test]
    fn progressive_penalty_below_standard() {
        let params = WorkDaysParams::default();
        assert!(approx(work_days_score(9.0, &params), 95.0));
        assert!(approx(work_days_score(8.0, &params), 88.0));
        assert!(approx(work_days_score(7.0, &params), 78.4));
        assert!(approx(work_days_score(6.0, &params), 65.44));
        assert!(approx(work_days_score(5.0, &params), 48.16));
    }

    #[test]
    fn penalty_matches_closed_form() {
        for gap in 1..=7 {
            let gap = gap as f64;
            let expected = 5.0 * 1.2_f64.powf(gap - 1.0) * gap;
            assert!(approx(progressive_penalty(10.0 - gap, 10.0, 5.0, 1.2), expected));
        }
    }

    #[test]
    fn penalty_is_strictly_increasing_and_convex() {
        let penalties: Vec<f64> = (1..=8)
            .map(|gap| progressive_penalty(10.0 - gap as f64, 10.0, 5.0, 1.2))
            .collect();
        for window in penalties.windows(2) {
            assert!(window[1] > window[0]);
        }
        let increments: Vec<f64> = penalties.windows(2).map(|w| w[1] - w[0]).collect();
        for window in increments.windows(2) {
            assert!(window[1] > window[0], "increments must grow: {increments:?}");
        }
    }

    #[test]
    fn penalty_is_zero_without_shortfall() {
        assert_eq!(progressive_penalty(10.0, 10.0, 5.0, 1.2), 0.0);
        assert_eq!(progressive_penalty(12.0, 10.0, 5.0, 1.2), 0.0);
    }

    #[test]
    fn large_shortfall_saturates_at_floor() {
        let params = WorkDaysParams::default();
        assert_eq!(work_days_score(3.0, &params), 20.0);
        assert_eq!(work_days_score(0.0, &params), 20.0);
        assert_eq!(work_days_score(-50.0, &params), 20.0);
    }

    #[test]
    fn non_decreasing_across_the_whole_range() {
        let params = WorkDaysParams::default();
        let mut previous = work_days_score(0.0, &params);
        for step in 1..=600 {
            let score = work_days_score(step as f64 / 10.0, &params);
            assert!(score >= previous, "score dropped at {}", step as f64 / 10.0);
            assert!((params.min_score..=params.max_score).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn narrowest_valid_bounds_stay_flat_and_bounded() {
        let params = WorkDaysParams {
            min_score: 100.0,
            max_score: 100.0,
            ..WorkDaysParams::default()
        };
        for step in 0..=400 {
            assert_eq!(work_days_score(step as f64 / 10.0, &params), 100.0);
        }
    }

    #[test]
    fn advisory_flags_use_strict_thresholds() {
        let params = WorkDaysParams::default();
        assert_eq!(workload_flags(15.0, &params), WorkloadFlags::default());
        assert_eq!(
            workload_flags(16.0, &params),
            WorkloadFlags {
                needs_review: true,
                is_overloaded: false,
            }
        );
        assert!(!is_overloaded(20.0, &params));
        assert_eq!(
            workload_flags(33.0, &params),
            WorkloadFlags {
                needs_review: true,
                is_overloaded: true,
            }
        );
    }
}
