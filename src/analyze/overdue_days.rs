use crate::types::config::{DaysDecay, OverdueDaysParams};
use crate::types::scoring::{round2, Score};

pub fn overdue_days_score(days: f64, params: &OverdueDaysParams) -> Score {
    match params.decay {
        DaysDecay::Linear => linear_days_score(days, params),
        DaysDecay::Reciprocal => reciprocal_days_score(days, params),
    }
}

/// Reaches `min_score` at `baseline + (max - min) / multiplier` days and stays
/// there, so very different delays past that point score the same.
pub fn linear_days_score(days: f64, params: &OverdueDaysParams) -> Score {
    let excess = (days - params.baseline).max(0.0);
    let score = params.max_score - excess * params.multiplier;
    score.clamp(params.min_score, params.max_score)
}

pub fn reciprocal_days_score(days: f64, params: &OverdueDaysParams) -> Score {
    if days <= params.baseline {
        return params.max_score;
    }
    let decayed = params.max_score * (params.baseline + params.buffer) / (days + params.buffer);
    round2(decayed).max(params.min_score)
}
