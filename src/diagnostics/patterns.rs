use crate::types::config::ScoringConfig;
use crate::types::diagnostics::{
    AssignmentIssue, AssignmentIssueKind, OverduePattern, RootCause, Severity,
};

/// Rule-ordered root-cause classification; the first matching rule wins.
pub fn classify_overdue_pattern(ratio: f64, work_days: f64, config: &ScoringConfig) -> OverduePattern {
    let diag = &config.diagnostics;
    let work = &config.work_days;

    let root_cause = if ratio > diag.high_ratio && work_days > work.overload_threshold {
        RootCause::Overload
    } else if ratio > diag.high_ratio && work_days < work.standard {
        RootCause::Attitude
    } else if ratio <= diag.healthy_ratio && work_days >= work.standard {
        RootCause::HighPerformer
    } else if ratio <= diag.tolerable_ratio {
        RootCause::NormalVariance
    } else {
        RootCause::NeedsAnalysis
    };

    OverduePattern::from(root_cause)
}

/// Rule-ordered check for how work was handed out; `None` when nothing looks off.
pub fn detect_assignment_issue(
    work_days: f64,
    ratio: f64,
    config: &ScoringConfig,
) -> Option<AssignmentIssue> {
    let diag = &config.diagnostics;
    let work = &config.work_days;

    if work_days > work.overload_threshold && ratio > diag.high_ratio {
        Some(AssignmentIssue::new(
            AssignmentIssueKind::OverAssigned,
            Severity::High,
        ))
    } else if work_days > work.overload_threshold {
        Some(AssignmentIssue::new(
            AssignmentIssueKind::SustainedOverload,
            Severity::Medium,
        ))
    } else if work_days < work.standard && ratio > diag.high_ratio {
        Some(AssignmentIssue::new(
            AssignmentIssueKind::CapabilityMismatch,
            Severity::Medium,
        ))
    } else if work_days < diag.underload_threshold {
        Some(AssignmentIssue::new(
            AssignmentIssueKind::UnderAssigned,
            Severity::Low,
        ))
    } else {
        None
    }
}
