use crate::analyze::overdue_ratio::overdue_ratio_score;
use crate::types::config::{ComplexityFactors, OverdueRatioParams};
use crate::types::diagnostics::{ComplexityAdjustment, TaskComplexity};
use crate::types::scoring::round2;

pub fn complexity_factor(complexity: TaskComplexity, factors: &ComplexityFactors) -> f64 {
    match complexity {
        TaskComplexity::Simple => factors.simple,
        TaskComplexity::Medium => factors.medium,
        TaskComplexity::Complex => factors.complex,
        TaskComplexity::VeryComplex => factors.very_complex,
    }
}

/// Harder work gets a proportionally lighter overdue penalty: the raw ratio
/// is scaled by the complexity factor before re-scoring.
pub fn complexity_adjusted_ratio(
    ratio: f64,
    complexity: TaskComplexity,
    factors: &ComplexityFactors,
) -> f64 {
    ratio * complexity_factor(complexity, factors)
}

pub fn complexity_adjustment(
    ratio: f64,
    complexity: TaskComplexity,
    factors: &ComplexityFactors,
    ratio_params: &OverdueRatioParams,
) -> ComplexityAdjustment {
    let adjusted_ratio = complexity_adjusted_ratio(ratio, complexity, factors);
    ComplexityAdjustment {
        complexity,
        factor: complexity_factor(complexity, factors),
        adjusted_ratio: round2(adjusted_ratio),
        adjusted_ratio_score: round2(overdue_ratio_score(adjusted_ratio, ratio_params)),
    }
}
