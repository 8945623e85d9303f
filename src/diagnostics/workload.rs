use crate::types::config::DiagnosticsConfig;
use crate::types::diagnostics::{AnomalyDirection, AnomalySeverity, WorkloadAnomaly};

/// Relative deviation from the team average. A zero, negative or NaN average
/// reports no anomaly instead of dividing by it.
pub fn detect_workload_anomaly(
    work_days: f64,
    team_average: f64,
    cfg: &DiagnosticsConfig,
) -> Option<WorkloadAnomaly> {
    if team_average.is_nan() || team_average <= 0.0 {
        return None;
    }

    let deviation = (work_days - team_average) / team_average;
    let severity = if deviation.abs() > cfg.workload_severe {
        AnomalySeverity::Severe
    } else if deviation.abs() > cfg.workload_moderate {
        AnomalySeverity::Moderate
    } else {
        return None;
    };

    let direction = if deviation > 0.0 {
        AnomalyDirection::Above
    } else {
        AnomalyDirection::Below
    };

    Some(WorkloadAnomaly {
        direction,
        severity,
        deviation,
    })
}
