use crate::types::config::GradeThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

/// Raw delivery metrics for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTriple {
    /// Percentage of tasks delivered late, 0-100.
    pub overdue_ratio: f64,
    /// Mean lateness in days across overdue tasks.
    pub overdue_days: f64,
    /// Reported effort in people-days.
    pub work_days: f64,
}

impl MetricTriple {
    pub fn new(overdue_ratio: f64, overdue_days: f64, work_days: f64) -> Self {
        Self {
            overdue_ratio,
            overdue_days,
            work_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D];

    /// Step function over the comprehensive score; thresholds are inclusive
    /// lower bounds.
    pub fn from_score(score: Score, thresholds: &GradeThresholds) -> Self {
        if score >= thresholds.s {
            Grade::S
        } else if score >= thresholds.a {
            Grade::A
        } else if score >= thresholds.b {
            Grade::B
        } else if score >= thresholds.c {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory signals surfaced next to the score. They never feed back into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkloadFlags {
    pub needs_review: bool,
    pub is_overloaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overdue_ratio_score: Score,
    pub overdue_days_score: Score,
    pub work_days_score: Score,
    pub comprehensive_score: Score,
    pub grade: Grade,
    /// Multiplier applied by the attendance policy; 1.0 when it did not fire.
    pub attendance_factor: f64,
    pub flags: WorkloadFlags,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
