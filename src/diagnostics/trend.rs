use crate::types::config::DiagnosticsConfig;
use crate::types::scoring::round2;

/// Signed adjustment from comparing the current overdue ratio against the
/// mean of earlier periods. Improvement earns up to `trend_bonus`, regression
/// costs up to `trend_penalty`, however large the gap. Non-finite history
/// values are skipped.
pub fn trend_adjustment(current_ratio: f64, previous_ratios: &[f64], cfg: &DiagnosticsConfig) -> f64 {
    let history = previous_ratios
        .iter()
        .copied()
        .filter(|ratio| ratio.is_finite())
        .collect::<Vec<_>>();
    if history.is_empty() || !current_ratio.is_finite() {
        return 0.0;
    }
    let mean = history.iter().sum::<f64>() / history.len() as f64;
    let raw = (mean - current_ratio) * cfg.trend_sensitivity;
    round2(raw.clamp(-cfg.trend_penalty, cfg.trend_bonus))
}
