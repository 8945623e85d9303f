pub mod attendance;
pub mod explain;
pub mod overdue_days;
pub mod overdue_ratio;
pub mod work_days;

use crate::diagnostics;
use crate::error::Result;
use crate::types::config::{DaysDecay, ScoringConfig};
use crate::types::diagnostics::{DiagnosticContext, DiagnosticReport, EnhancedScore};
use crate::types::report::EmployeeScore;
use crate::types::scoring::{round2, Grade, MetricTriple, Score, ScoreBreakdown};
use crate::validate::validate_inputs;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Stateless scorer bound to one policy. Two engines with different configs
/// can run side by side.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        if config.overdue_days.decay == DaysDecay::Linear {
            warn!(
                policy = config.label(),
                "linear overdue-days decay flattens at min_score; long delays become indistinguishable"
            );
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn grade(&self, comprehensive_score: Score) -> Grade {
        Grade::from_score(comprehensive_score, &self.config.grades)
    }

    pub fn score(&self, triple: &MetricTriple) -> ScoreBreakdown {
        let cfg = &self.config;
        let ratio_score = overdue_ratio::overdue_ratio_score(triple.overdue_ratio, &cfg.overdue_ratio);
        let days_score = overdue_days::overdue_days_score(triple.overdue_days, &cfg.overdue_days);
        let work_score = work_days::work_days_score(triple.work_days, &cfg.work_days);

        let weighted = ratio_score * cfg.weights.overdue_ratio
            + days_score * cfg.weights.overdue_days
            + work_score * cfg.weights.work_days;
        let attendance_factor = attendance::attendance_factor(triple.work_days, &cfg.attendance);
        let comprehensive_score = round2(weighted * attendance_factor);

        ScoreBreakdown {
            overdue_ratio_score: round2(ratio_score),
            overdue_days_score: round2(days_score),
            work_days_score: round2(work_score),
            comprehensive_score,
            grade: self.grade(comprehensive_score),
            attendance_factor,
            flags: work_days::workload_flags(triple.work_days, &cfg.work_days),
        }
    }

    pub fn diagnose(&self, triple: &MetricTriple, ctx: &DiagnosticContext) -> DiagnosticReport {
        diagnostics::diagnose(triple, ctx, &self.config)
    }

    /// Base score plus the trend, stability and urgency adjustments. The
    /// complexity-adjusted ratio score is reported but not added.
    pub fn score_enhanced(&self, triple: &MetricTriple, ctx: &DiagnosticContext) -> EnhancedScore {
        let breakdown = self.score(triple);
        let report = self.diagnose(triple, ctx);
        let enhanced_score = round2(
            breakdown.comprehensive_score
                + report.trend_adjustment
                + report.stability.adjustment
                + report.urgency.adjustment,
        );
        EnhancedScore {
            breakdown,
            diagnostics: report,
            enhanced_score,
        }
    }

    pub fn score_employee(&self, triple: &MetricTriple) -> EmployeeScore {
        EmployeeScore {
            metrics: *triple,
            breakdown: self.score(triple),
            notes: explain::explain(triple, &self.config),
            diagnostics: None,
            enhanced_score: None,
        }
    }

    pub fn score_batch(&self, inputs: &BTreeMap<String, MetricTriple>) -> BTreeMap<String, EmployeeScore> {
        self.score_batch_with_context(inputs, &BTreeMap::new())
    }

    /// Scores every employee; those with an entry in `contexts` also get
    /// diagnostics and an enhanced score.
    pub fn score_batch_with_context(
        &self,
        inputs: &BTreeMap<String, MetricTriple>,
        contexts: &BTreeMap<String, DiagnosticContext>,
    ) -> BTreeMap<String, EmployeeScore> {
        let results = inputs
            .iter()
            .map(|(name, triple)| {
                let mut result = self.score_employee(triple);
                if let Some(ctx) = contexts.get(name) {
                    let enhanced = self.score_enhanced(triple, ctx);
                    result.enhanced_score = Some(enhanced.enhanced_score);
                    result.diagnostics = Some(enhanced.diagnostics);
                }
                debug!(
                    employee = %name,
                    comprehensive = result.breakdown.comprehensive_score,
                    grade = %result.breakdown.grade,
                    needs_review = result.breakdown.flags.needs_review,
                    "scored employee"
                );
                (name.clone(), result)
            })
            .collect::<BTreeMap<_, _>>();

        info!(
            policy = self.config.label(),
            headcount = results.len(),
            with_diagnostics = results.values().filter(|r| r.diagnostics.is_some()).count(),
            "batch scored"
        );
        results
    }

    /// Validates the three raw metric sets, then scores their intersection.
    pub fn score_raw(
        &self,
        overdue_ratios: &BTreeMap<String, f64>,
        overdue_days: &BTreeMap<String, f64>,
        work_days: &BTreeMap<String, f64>,
    ) -> Result<BTreeMap<String, EmployeeScore>> {
        let validated = validate_inputs(overdue_ratios, overdue_days, work_days)?;
        Ok(self.score_batch(&validated.triples))
    }
}
