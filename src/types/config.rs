use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

/// Full scoring policy. Every numeric constant used by the scorers, the
/// aggregator and the diagnostics lives here so that alternative policy
/// versions are just alternative values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Free-form label for the policy version, surfaced in logs.
    pub name: Option<String>,
    pub weights: Weights,
    pub overdue_ratio: OverdueRatioParams,
    pub overdue_days: OverdueDaysParams,
    pub work_days: WorkDaysParams,
    pub grades: GradeThresholds,
    pub diagnostics: DiagnosticsConfig,
    pub attendance: AttendancePolicy,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub overdue_ratio: f64,
    pub overdue_days: f64,
    pub work_days: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            overdue_ratio: 0.4,
            overdue_days: 0.4,
            work_days: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverdueRatioParams {
    pub baseline: f64,
    pub multiplier: f64,
    pub max_score: f64,
    pub min_score: f64,
}

impl Default for OverdueRatioParams {
    fn default() -> Self {
        Self {
            baseline: 20.0,
            multiplier: 2.0,
            max_score: 100.0,
            min_score: 0.0,
        }
    }
}

/// Shape of the overdue-days transfer function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaysDecay {
    /// Straight-line decay; flattens at `min_score` once the delay is large.
    Linear,
    /// `max * (baseline + buffer) / (days + buffer)`; approaches but never
    /// reaches zero.
    #[default]
    Reciprocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverdueDaysParams {
    pub decay: DaysDecay,
    pub baseline: f64,
    /// Points lost per day over baseline. Only read by [`DaysDecay::Linear`].
    pub multiplier: f64,
    /// Smoothing term. Only read by [`DaysDecay::Reciprocal`].
    pub buffer: f64,
    pub max_score: f64,
    pub min_score: f64,
}

impl Default for OverdueDaysParams {
    fn default() -> Self {
        Self {
            decay: DaysDecay::Reciprocal,
            baseline: 2.0,
            multiplier: 15.0,
            buffer: 2.0,
            max_score: 100.0,
            min_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkDaysParams {
    /// Work-days value that scores exactly 100.
    pub standard: f64,
    pub tier1_max: f64,
    pub tier2_max: f64,
    pub tier1_rate: f64,
    pub tier2_rate: f64,
    pub tier3_rate: f64,
    pub base_penalty_rate: f64,
    pub progressive_multiplier: f64,
    pub max_score: f64,
    pub min_score: f64,
    /// Above this the reported effort should be verified by hand.
    pub inflation_threshold: f64,
    pub overload_threshold: f64,
}

impl Default for WorkDaysParams {
    fn default() -> Self {
        Self {
            standard: 10.0,
            tier1_max: 15.0,
            tier2_max: 20.0,
            tier1_rate: 2.0,
            tier2_rate: 1.0,
            tier3_rate: 0.5,
            base_penalty_rate: 5.0,
            progressive_multiplier: 1.2,
            max_score: 130.0,
            min_score: 20.0,
            inflation_threshold: 15.0,
            overload_threshold: 20.0,
        }
    }
}

/// Inclusive lower bounds for each grade; anything below `c` is a D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradeThresholds {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            s: 85.0,
            a: 70.0,
            b: 55.0,
            c: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplexityFactors {
    pub simple: f64,
    pub medium: f64,
    pub complex: f64,
    pub very_complex: f64,
}

impl Default for ComplexityFactors {
    fn default() -> Self {
        Self {
            simple: 1.0,
            medium: 0.8,
            complex: 0.6,
            very_complex: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    pub trend_bonus: f64,
    pub trend_penalty: f64,
    /// Points per percentage point of difference against the historical mean.
    pub trend_sensitivity: f64,

    pub high_ratio: f64,
    pub healthy_ratio: f64,
    pub tolerable_ratio: f64,
    pub underload_threshold: f64,

    pub estimation_excellent: f64,
    pub estimation_good: f64,
    pub estimation_fair: f64,

    pub workload_moderate: f64,
    pub workload_severe: f64,

    pub stability_min_points: usize,
    pub stability_excellent_std: f64,
    pub stability_good_std: f64,
    pub stability_excellent_bonus: f64,
    pub stability_good_bonus: f64,
    pub stability_unstable_penalty: f64,

    pub urgency_excellent_rate: f64,
    pub urgency_good_rate: f64,
    pub urgency_excellent_bonus: f64,
    pub urgency_good_bonus: f64,
    pub urgency_poor_penalty: f64,

    pub complexity: ComplexityFactors,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            trend_bonus: 5.0,
            trend_penalty: 5.0,
            trend_sensitivity: 0.5,
            high_ratio: 50.0,
            healthy_ratio: 20.0,
            tolerable_ratio: 30.0,
            underload_threshold: 5.0,
            estimation_excellent: 0.1,
            estimation_good: 0.2,
            estimation_fair: 0.3,
            workload_moderate: 0.5,
            workload_severe: 1.0,
            stability_min_points: 3,
            stability_excellent_std: 5.0,
            stability_good_std: 10.0,
            stability_excellent_bonus: 3.0,
            stability_good_bonus: 1.0,
            stability_unstable_penalty: 3.0,
            urgency_excellent_rate: 0.9,
            urgency_good_rate: 0.7,
            urgency_excellent_bonus: 5.0,
            urgency_good_bonus: 2.0,
            urgency_poor_penalty: 3.0,
            complexity: ComplexityFactors::default(),
        }
    }
}

/// Attenuates the comprehensive score of employees whose reported work-days
/// indicate leave. Off unless a policy turns it on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttendancePolicy {
    pub enabled: bool,
    pub absent_max_days: f64,
    pub absent_factor: f64,
    pub partial_max_days: f64,
    pub partial_factor: f64,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            absent_max_days: 0.0,
            absent_factor: 0.3,
            partial_max_days: 2.0,
            partial_factor: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    pub high_ratio_mark: f64,
    pub long_delay_mark: f64,
    pub mean_ratio_alert: f64,
    pub mean_days_alert: f64,
    pub shortfall_share_alert: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            high_ratio_mark: 50.0,
            long_delay_mark: 5.0,
            mean_ratio_alert: 30.0,
            mean_days_alert: 3.0,
            shortfall_share_alert: 0.2,
        }
    }
}

impl ScoringConfig {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("default")
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for (key, weight) in [
            ("weights.overdue_ratio", self.weights.overdue_ratio),
            ("weights.overdue_days", self.weights.overdue_days),
            ("weights.work_days", self.weights.work_days),
        ] {
            ensure_non_negative(key, weight)?;
        }

        ensure_bounds(
            "overdue_ratio",
            self.overdue_ratio.min_score,
            self.overdue_ratio.max_score,
        )?;
        ensure_non_negative("overdue_ratio.multiplier", self.overdue_ratio.multiplier)?;

        let days = &self.overdue_days;
        ensure_bounds("overdue_days", days.min_score, days.max_score)?;
        ensure_non_negative("overdue_days.baseline", days.baseline)?;
        ensure_non_negative("overdue_days.multiplier", days.multiplier)?;
        if days.buffer.is_nan() || days.buffer <= 0.0 {
            return Err(ScoringError::ConfigParse(
                "overdue_days.buffer must be greater than 0".to_string(),
            ));
        }

        let work = &self.work_days;
        ensure_bounds("work_days", work.min_score, work.max_score)?;
        if work.min_score > 100.0 || work.max_score < 100.0 {
            return Err(ScoringError::ConfigParse(format!(
                "work_days.min_score and work_days.max_score must bracket the score of 100 at standard (found {} / {})",
                work.min_score, work.max_score
            )));
        }
        if !(work.standard < work.tier1_max && work.tier1_max <= work.tier2_max) {
            return Err(ScoringError::ConfigParse(format!(
                "work_days tiers must satisfy standard < tier1_max <= tier2_max (found {} / {} / {})",
                work.standard, work.tier1_max, work.tier2_max
            )));
        }
        for (key, value) in [
            ("work_days.standard", work.standard),
            ("work_days.tier1_rate", work.tier1_rate),
            ("work_days.tier2_rate", work.tier2_rate),
            ("work_days.tier3_rate", work.tier3_rate),
            ("work_days.base_penalty_rate", work.base_penalty_rate),
        ] {
            ensure_non_negative(key, value)?;
        }
        if work.progressive_multiplier.is_nan() || work.progressive_multiplier < 1.0 {
            return Err(ScoringError::ConfigParse(
                "work_days.progressive_multiplier must be at least 1.0".to_string(),
            ));
        }

        let grades = &self.grades;
        if !(grades.s > grades.a && grades.a > grades.b && grades.b > grades.c) {
            return Err(ScoringError::ConfigParse(format!(
                "grades must be strictly descending s > a > b > c (found {} / {} / {} / {})",
                grades.s, grades.a, grades.b, grades.c
            )));
        }

        self.diagnostics.validate()?;

        let attendance = &self.attendance;
        if attendance.absent_max_days > attendance.partial_max_days {
            return Err(ScoringError::ConfigParse(
                "attendance.absent_max_days cannot exceed attendance.partial_max_days".to_string(),
            ));
        }
        for (key, factor) in [
            ("attendance.absent_factor", attendance.absent_factor),
            ("attendance.partial_factor", attendance.partial_factor),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return Err(ScoringError::ConfigParse(format!(
                    "{key} must be between 0.0 and 1.0"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.summary.shortfall_share_alert) {
            return Err(ScoringError::ConfigParse(
                "summary.shortfall_share_alert must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

impl DiagnosticsConfig {
    fn validate(&self) -> Result<(), ScoringError> {
        ensure_non_negative("diagnostics.trend_bonus", self.trend_bonus)?;
        ensure_non_negative("diagnostics.trend_penalty", self.trend_penalty)?;
        ensure_non_negative("diagnostics.trend_sensitivity", self.trend_sensitivity)?;

        ensure_ascending(
            "diagnostics.healthy_ratio",
            self.healthy_ratio,
            "diagnostics.tolerable_ratio",
            self.tolerable_ratio,
        )?;
        ensure_ascending(
            "diagnostics.tolerable_ratio",
            self.tolerable_ratio,
            "diagnostics.high_ratio",
            self.high_ratio,
        )?;
        ensure_ascending(
            "diagnostics.estimation_excellent",
            self.estimation_excellent,
            "diagnostics.estimation_good",
            self.estimation_good,
        )?;
        ensure_ascending(
            "diagnostics.estimation_good",
            self.estimation_good,
            "diagnostics.estimation_fair",
            self.estimation_fair,
        )?;
        ensure_ascending(
            "diagnostics.workload_moderate",
            self.workload_moderate,
            "diagnostics.workload_severe",
            self.workload_severe,
        )?;
        ensure_ascending(
            "diagnostics.stability_excellent_std",
            self.stability_excellent_std,
            "diagnostics.stability_good_std",
            self.stability_good_std,
        )?;
        ensure_ascending(
            "diagnostics.urgency_good_rate",
            self.urgency_good_rate,
            "diagnostics.urgency_excellent_rate",
            self.urgency_excellent_rate,
        )?;

        if self.stability_min_points < 2 {
            return Err(ScoringError::ConfigParse(
                "diagnostics.stability_min_points must be at least 2".to_string(),
            ));
        }

        let factors = &self.complexity;
        for (key, factor) in [
            ("diagnostics.complexity.simple", factors.simple),
            ("diagnostics.complexity.medium", factors.medium),
            ("diagnostics.complexity.complex", factors.complex),
            ("diagnostics.complexity.very_complex", factors.very_complex),
        ] {
            ensure_non_negative(key, factor)?;
        }

        Ok(())
    }
}

fn ensure_non_negative(key: &str, value: f64) -> Result<(), ScoringError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ScoringError::ConfigParse(format!(
            "{key} must be a non-negative number (found {value})"
        )))
    }
}

fn ensure_bounds(section: &str, min_score: f64, max_score: f64) -> Result<(), ScoringError> {
    if min_score <= max_score {
        Ok(())
    } else {
        Err(ScoringError::ConfigParse(format!(
            "{section}.min_score ({min_score}) cannot exceed {section}.max_score ({max_score})"
        )))
    }
}

fn ensure_ascending(
    lower_key: &str,
    lower: f64,
    upper_key: &str,
    upper: f64,
) -> Result<(), ScoringError> {
    if lower <= upper {
        Ok(())
    } else {
        Err(ScoringError::ConfigParse(format!(
            "{lower_key} ({lower}) cannot exceed {upper_key} ({upper})"
        )))
    }
}
