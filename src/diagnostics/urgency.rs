use crate::types::config::DiagnosticsConfig;
use crate::types::diagnostics::{UrgencyBand, UrgencyOutcome};

pub fn evaluate_urgency(completed: u32, total: u32, cfg: &DiagnosticsConfig) -> UrgencyOutcome {
    if total == 0 {
        return UrgencyOutcome {
            band: UrgencyBand::NotEvaluable,
            completion_rate: None,
            adjustment: 0.0,
        };
    }

    let completion_rate = (f64::from(completed) / f64::from(total)).min(1.0);
    let (band, adjustment) = if completion_rate >= cfg.urgency_excellent_rate {
        (UrgencyBand::Excellent, cfg.urgency_excellent_bonus)
    } else if completion_rate >= cfg.urgency_good_rate {
        (UrgencyBand::Good, cfg.urgency_good_bonus)
    } else {
        (UrgencyBand::Poor, -cfg.urgency_poor_penalty)
    };

    UrgencyOutcome {
        band,
        completion_rate: Some(completion_rate),
        adjustment,
    }
}
