use crate::types::config::OverdueRatioParams;
use crate::types::scoring::Score;

/// Linear decay above the baseline ratio, clamped to the configured bounds.
/// Out-of-range ratios are clamped rather than rejected.
pub fn overdue_ratio_score(ratio: f64, params: &OverdueRatioParams) -> Score {
    let excess = (ratio - params.baseline).max(0.0);
    let score = params.max_score - excess * params.multiplier;
    score.clamp(params.min_score, params.max_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_score_at_or_below_baseline() {
        let params = OverdueRatioParams::default();
        assert_eq!(overdue_ratio_score(0.0, &params), 100.0);
        assert_eq!(overdue_ratio_score(15.0, &params), 100.0);
        assert_eq!(overdue_ratio_score(20.0, &params), 100.0);
    }

    #[test]
    fn decays_linearly_above_baseline() {
        let params = OverdueRatioParams::default();
        assert_eq!(overdue_ratio_score(50.0, &params), 40.0);
        assert_eq!(overdue_ratio_score(25.0, &params), 90.0);
    }

    #[test]
    fn clamps_at_both_ends() {
        let params = OverdueRatioParams::default();
        assert_eq!(overdue_ratio_score(70.0, &params), 0.0);
        assert_eq!(overdue_ratio_score(100.0, &params), 0.0);
        assert_eq!(overdue_ratio_score(250.0, &params), 0.0);
        assert_eq!(overdue_ratio_score(-30.0, &params), 100.0);
    }

    #[test]
    fn non_increasing_in_ratio() {
        let params = OverdueRatioParams::default();
        let mut previous = overdue_ratio_score(0.0, &params);
        for step in 1..=1000 {
            let score = overdue_ratio_score(step as f64 / 10.0, &params);
            assert!(score <= previous);
            assert!((params.min_score..=params.max_score).contains(&score));
            previous = score;
        }
    }
}
