use crate::types::config::DiagnosticsConfig;
use crate::types::diagnostics::{EstimationAccuracy, EstimationOutcome};

/// `|estimated - actual| / estimated`, bucketed by the configured tiers.
/// A non-positive or non-finite estimate cannot be evaluated.
pub fn evaluate_estimation(estimated: f64, actual: f64, cfg: &DiagnosticsConfig) -> EstimationOutcome {
    if !estimated.is_finite() || !actual.is_finite() || estimated <= 0.0 {
        return EstimationOutcome::NotEvaluable;
    }

    let error_rate = (estimated - actual).abs() / estimated;
    let accuracy = if error_rate <= cfg.estimation_excellent {
        EstimationAccuracy::Excellent
    } else if error_rate <= cfg.estimation_good {
        EstimationAccuracy::Good
    } else if error_rate <= cfg.estimation_fair {
        EstimationAccuracy::Fair
    } else {
        EstimationAccuracy::Poor
    };

    EstimationOutcome::Evaluated {
        accuracy,
        error_rate,
    }
}
