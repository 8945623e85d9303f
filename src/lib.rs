pub mod analyze;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod summary;
pub mod types;
pub mod validate;

pub use analyze::ScoringEngine;
pub use error::{Result, ScoringError};
pub use summary::{rank, summarize, to_json, RankedEmployee, TeamSummary};
pub use types::config::ScoringConfig;
pub use types::diagnostics::{DiagnosticContext, DiagnosticReport, EnhancedScore, TaskComplexity};
pub use types::report::EmployeeScore;
pub use types::scoring::{Grade, MetricTriple, Score, ScoreBreakdown};
