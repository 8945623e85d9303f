use crate::error::ScoringError;
use crate::types::scoring::{Score, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskComplexity {
    Simple,
    Medium,
    Complex,
    VeryComplex,
}

impl FromStr for TaskComplexity {
    type Err = ScoringError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let normalized = label.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "simple" => Ok(TaskComplexity::Simple),
            "medium" => Ok(TaskComplexity::Medium),
            "complex" => Ok(TaskComplexity::Complex),
            "very_complex" => Ok(TaskComplexity::VeryComplex),
            _ => Err(ScoringError::UnknownComplexity(label.to_string())),
        }
    }
}

/// Optional per-call inputs for the diagnostics. The engine keeps no history
/// of its own; anything historical comes in through here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticContext {
    pub previous_ratios: Vec<f64>,
    pub historical_scores: Vec<f64>,
    pub urgent_completed: u32,
    pub urgent_total: u32,
    pub team_average_work_days: Option<f64>,
    pub complexity: Option<TaskComplexity>,
    pub estimated_work_days: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityAdjustment {
    pub complexity: TaskComplexity,
    pub factor: f64,
    pub adjusted_ratio: f64,
    pub adjusted_ratio_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootCause {
    Overload,
    Attitude,
    HighPerformer,
    NormalVariance,
    NeedsAnalysis,
}

impl RootCause {
    pub fn suggestion(&self) -> &'static str {
        match self {
            RootCause::Overload => "rebalance the task load or add capacity before deadlines slip further",
            RootCause::Attitude => "low output alongside frequent delays; schedule a one-to-one on engagement",
            RootCause::HighPerformer => "consistent delivery at full output; consider stretch assignments",
            RootCause::NormalVariance => "delays within normal variance; keep monitoring",
            RootCause::NeedsAnalysis => "no clear pattern; review individual tasks for the cause of delays",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverduePattern {
    pub root_cause: RootCause,
    pub suggestion: &'static str,
}

impl From<RootCause> for OverduePattern {
    fn from(root_cause: RootCause) -> Self {
        Self {
            root_cause,
            suggestion: root_cause.suggestion(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentIssueKind {
    OverAssigned,
    SustainedOverload,
    CapabilityMismatch,
    UnderAssigned,
}

impl AssignmentIssueKind {
    pub fn action(&self) -> &'static str {
        match self {
            AssignmentIssueKind::OverAssigned => "move tasks to teammates with spare capacity",
            AssignmentIssueKind::SustainedOverload => "watch for burnout and cap new assignments",
            AssignmentIssueKind::CapabilityMismatch => {
                "check that assigned tasks match the employee's experience"
            }
            AssignmentIssueKind::UnderAssigned => "assign more work or confirm the reported effort",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentIssue {
    pub kind: AssignmentIssueKind,
    pub severity: Severity,
    pub action: &'static str,
}

impl AssignmentIssue {
    pub(crate) fn new(kind: AssignmentIssueKind, severity: Severity) -> Self {
        Self {
            kind,
            severity,
            action: kind.action(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimationAccuracy {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimationOutcome {
    /// The estimate was zero, so no relative error exists.
    NotEvaluable,
    Evaluated {
        accuracy: EstimationAccuracy,
        error_rate: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyDirection {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkloadAnomaly {
    pub direction: AnomalyDirection,
    pub severity: AnomalySeverity,
    /// Signed relative deviation from the team average.
    pub deviation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityBand {
    Excellent,
    Good,
    Unstable,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityOutcome {
    pub band: StabilityBand,
    pub std_dev: Option<f64>,
    pub adjustment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyBand {
    Excellent,
    Good,
    Poor,
    NotEvaluable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UrgencyOutcome {
    pub band: UrgencyBand,
    pub completion_rate: Option<f64>,
    pub adjustment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub trend_adjustment: f64,
    pub complexity: Option<ComplexityAdjustment>,
    pub pattern: OverduePattern,
    pub assignment_issue: Option<AssignmentIssue>,
    /// Absent when no estimate was supplied.
    pub estimation: Option<EstimationOutcome>,
    pub workload_anomaly: Option<WorkloadAnomaly>,
    pub stability: StabilityOutcome,
    pub urgency: UrgencyOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedScore {
    pub breakdown: ScoreBreakdown,
    pub diagnostics: DiagnosticReport,
    /// `comprehensive + trend + stability + urgency`. The complexity
    /// adjustment is reported in `diagnostics` but not summed.
    pub enhanced_score: Score,
}
