use crate::analyze::work_days::needs_review;
use crate::types::config::{ScoringConfig, WorkDaysParams};
use crate::types::scoring::MetricTriple;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadBand {
    Shortfall,
    Standard,
    Strong,
    Exceptional,
}

pub fn workload_band(work_days: f64, params: &WorkDaysParams) -> WorkloadBand {
    if work_days < params.standard {
        WorkloadBand::Shortfall
    } else if work_days == params.standard {
        WorkloadBand::Standard
    } else if work_days <= params.tier1_max {
        WorkloadBand::Strong
    } else {
        WorkloadBand::Exceptional
    }
}

/// One plain-text observation about a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MetricNote {
    OverdueRatio {
        ratio: f64,
        baseline: f64,
        within_baseline: bool,
    },
    OverdueDays {
        days: f64,
        baseline: f64,
        within_baseline: bool,
    },
    Workload {
        work_days: f64,
        band: WorkloadBand,
        needs_review: bool,
    },
}

impl fmt::Display for MetricNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricNote::OverdueRatio {
                ratio,
                baseline,
                within_baseline,
            } => {
                if *within_baseline {
                    write!(f, "overdue ratio {ratio:.1}% within baseline ({baseline}%)")
                } else {
                    write!(f, "overdue ratio {ratio:.1}% exceeds baseline ({baseline}%)")
                }
            }
            MetricNote::OverdueDays {
                days,
                baseline,
                within_baseline,
            } => {
                if *within_baseline {
                    write!(f, "overdue days {days:.1} within baseline ({baseline} days)")
                } else {
                    write!(f, "overdue days {days:.1} exceeds baseline ({baseline} days)")
                }
            }
            MetricNote::Workload {
                work_days,
                band,
                needs_review,
            } => {
                let label = match band {
                    WorkloadBand::Shortfall => "below standard",
                    WorkloadBand::Standard => "at standard",
                    WorkloadBand::Strong => "strong",
                    WorkloadBand::Exceptional => "exceptional",
                };
                write!(f, "workload {work_days:.1} people-days {label}")?;
                if *needs_review {
                    f.write_str("; verify reported effort")?;
                }
                Ok(())
            }
        }
    }
}

pub fn explain(triple: &MetricTriple, config: &ScoringConfig) -> Vec<MetricNote> {
    vec![
        MetricNote::OverdueRatio {
            ratio: triple.overdue_ratio,
            baseline: config.overdue_ratio.baseline,
            within_baseline: triple.overdue_ratio <= config.overdue_ratio.baseline,
        },
        MetricNote::OverdueDays {
            days: triple.overdue_days,
            baseline: config.overdue_days.baseline,
            within_baseline: triple.overdue_days <= config.overdue_days.baseline,
        },
        MetricNote::Workload {
            work_days: triple.work_days,
            band: workload_band(triple.work_days, &config.work_days),
            needs_review: needs_review(triple.work_days, &config.work_days),
        },
    ]
}

/// Single-line rendering, notes separated by ` | `.
pub fn render_notes(notes: &[MetricNote]) -> String {
    notes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}
