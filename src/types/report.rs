use crate::analyze::explain::MetricNote;
use crate::types::diagnostics::DiagnosticReport;
use crate::types::scoring::{MetricTriple, Score, ScoreBreakdown};
use serde::Serialize;

/// Everything the engine produces for one employee in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeScore {
    pub metrics: MetricTriple,
    pub breakdown: ScoreBreakdown,
    pub notes: Vec<MetricNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_score: Option<Score>,
}
