//! Optional signals computed next to the base score. Each submodule is an
//! independent free function; [`diagnose`] runs the ones whose inputs are
//! present in a [`DiagnosticContext`].

pub mod complexity;
pub mod estimation;
pub mod patterns;
pub mod stability;
pub mod trend;
pub mod urgency;
pub mod workload;

use crate::types::config::ScoringConfig;
use crate::types::diagnostics::{DiagnosticContext, DiagnosticReport};
use crate::types::scoring::MetricTriple;

pub fn diagnose(
    triple: &MetricTriple,
    ctx: &DiagnosticContext,
    config: &ScoringConfig,
) -> DiagnosticReport {
    let diag = &config.diagnostics;

    DiagnosticReport {
        trend_adjustment: trend::trend_adjustment(triple.overdue_ratio, &ctx.previous_ratios, diag),
        complexity: ctx.complexity.map(|complexity| {
            complexity::complexity_adjustment(
                triple.overdue_ratio,
                complexity,
                &diag.complexity,
                &config.overdue_ratio,
            )
        }),
        pattern: patterns::classify_overdue_pattern(
            triple.overdue_ratio,
            triple.work_days,
            config,
        ),
        assignment_issue: patterns::detect_assignment_issue(
            triple.work_days,
            triple.overdue_ratio,
            config,
        ),
        estimation: ctx
            .estimated_work_days
            .map(|estimated| estimation::evaluate_estimation(estimated, triple.work_days, diag)),
        workload_anomaly: ctx.team_average_work_days.and_then(|average| {
            workload::detect_workload_anomaly(triple.work_days, average, diag)
        }),
        stability: stability::evaluate_stability(&ctx.historical_scores, diag),
        urgency: urgency::evaluate_urgency(ctx.urgent_completed, ctx.urgent_total, diag),
    }
}
