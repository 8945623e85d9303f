use crate::types::config::DiagnosticsConfig;
use crate::types::diagnostics::{StabilityBand, StabilityOutcome};
use crate::types::scoring::round2;

pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;
    Some(variance.sqrt())
}

/// Bands the spread of historical scores. Non-finite values are skipped;
/// fewer than `stability_min_points` remaining yields `InsufficientData` and
/// no adjustment.
pub fn evaluate_stability(historical_scores: &[f64], cfg: &DiagnosticsConfig) -> StabilityOutcome {
    let history = historical_scores
        .iter()
        .copied()
        .filter(|score| score.is_finite())
        .collect::<Vec<_>>();
    let std_dev = match population_std_dev(&history) {
        Some(std_dev) if history.len() >= cfg.stability_min_points => std_dev,
        _ => {
            return StabilityOutcome {
                band: StabilityBand::InsufficientData,
                std_dev: None,
                adjustment: 0.0,
            }
        }
    };

    let (band, adjustment) = if std_dev <= cfg.stability_excellent_std {
        (StabilityBand::Excellent, cfg.stability_excellent_bonus)
    } else if std_dev <= cfg.stability_good_std {
        (StabilityBand::Good, cfg.stability_good_bonus)
    } else {
        (StabilityBand::Unstable, -cfg.stability_unstable_penalty)
    };

    StabilityOutcome {
        band,
        std_dev: Some(round2(std_dev)),
        adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_three_points_is_insufficient() {
        let cfg = DiagnosticsConfig::default();
        for history in [vec![], vec![80.0], vec![80.0, 90.0]] {
            let outcome = evaluate_stability(&history, &cfg);
            assert_eq!(outcome.band, StabilityBand::InsufficientData);
            assert_eq!(outcome.std_dev, None);
            assert_eq!(outcome.adjustment, 0.0);
        }
    }

    #[test]
    fn non_finite_scores_do_not_count_as_history() {
        let cfg = DiagnosticsConfig::default();
        let short = evaluate_stability(&[98.0, f64::NAN, 102.0], &cfg);
        assert_eq!(short.band, StabilityBand::InsufficientData);

        let steady = evaluate_stability(&[98.0, f64::INFINITY, 102.0, 100.0], &cfg);
        assert_eq!(steady.band, StabilityBand::Excellent);
        assert_eq!(steady.std_dev, Some(1.63));
    }

    #[test]
    fn population_std_dev_matches_hand_calculation() {
        let std_dev = population_std_dev(&[98.0, 102.0, 100.0]).expect("values present");
        assert!((std_dev - (8.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(population_std_dev(&[]), None);
        assert_eq!(population_std_dev(&[5.0, 5.0, 5.0]), Some(0.0));
    }

    #[test]
    fn bands_by_deviation() {
        let cfg = DiagnosticsConfig::default();

        let steady = evaluate_stability(&[98.0, 102.0, 100.0], &cfg);
        assert_eq!(steady.band, StabilityBand::Excellent);
        assert_eq!(steady.std_dev, Some(1.63));
        assert_eq!(steady.adjustment, 3.0);

        let wobbly = evaluate_stability(&[90.0, 100.0, 110.0], &cfg);
        assert_eq!(wobbly.band, StabilityBand::Good);
        assert_eq!(wobbly.adjustment, 1.0);

        let erratic = evaluate_stability(&[40.0, 60.0, 80.0], &cfg);
        assert_eq!(erratic.band, StabilityBand::Unstable);
        assert_eq!(erratic.adjustment, -3.0);
    }
}
