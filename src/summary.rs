use crate::analyze::explain::{workload_band, WorkloadBand};
use crate::error::Result;
use crate::types::config::ScoringConfig;
use crate::types::report::EmployeeScore;
use crate::types::scoring::{round2, Grade, Score};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamAdvice {
    ReduceOverdueRatio,
    TightenSchedule,
    RaiseUtilization,
    VerifyReportedEffort,
    RecognizeOutput,
}

impl TeamAdvice {
    pub fn description(&self) -> &'static str {
        match self {
            TeamAdvice::ReduceOverdueRatio => {
                "average overdue ratio is high; revisit task planning and execution"
            }
            TeamAdvice::TightenSchedule => "delays run long; add milestone checkpoints",
            TeamAdvice::RaiseUtilization => "several people are below the standard workload",
            TeamAdvice::VerifyReportedEffort => {
                "some reported effort exceeds the inflation threshold; check for double counting"
            }
            TeamAdvice::RecognizeOutput => "several people delivered above the standard workload",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverdueStats {
    pub mean_ratio: f64,
    pub mean_days: f64,
    pub high_ratio_count: usize,
    pub long_delay_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadStats {
    pub mean_work_days: f64,
    pub median_work_days: f64,
    pub bands: BTreeMap<WorkloadBand, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub headcount: usize,
    pub mean_score: Score,
    pub median_score: Score,
    pub max_score: Score,
    pub min_score: Score,
    pub grade_distribution: BTreeMap<Grade, usize>,
    /// Grade S.
    pub highlights: Vec<String>,
    /// Grade D.
    pub lowlights: Vec<String>,
    pub needs_review: Vec<String>,
    pub overdue: OverdueStats,
    pub workload: WorkloadStats,
    pub advice: Vec<TeamAdvice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEmployee {
    pub rank: usize,
    pub name: String,
    pub comprehensive_score: Score,
    pub grade: Grade,
    pub needs_review: bool,
}

/// Aggregate statistics over a scored batch; `None` for an empty batch.
pub fn summarize(results: &BTreeMap<String, EmployeeScore>, config: &ScoringConfig) -> Option<TeamSummary> {
    if results.is_empty() {
        return None;
    }

    let headcount = results.len();
    let scores = results
        .values()
        .map(|result| result.breakdown.comprehensive_score)
        .collect::<Vec<_>>();
    let ratios = results
        .values()
        .map(|result| result.metrics.overdue_ratio)
        .collect::<Vec<_>>();
    let delays = results
        .values()
        .map(|result| result.metrics.overdue_days)
        .collect::<Vec<_>>();
    let work = results
        .values()
        .map(|result| result.metrics.work_days)
        .collect::<Vec<_>>();

    let mut grade_distribution = Grade::ALL
        .iter()
        .map(|grade| (*grade, 0))
        .collect::<BTreeMap<_, _>>();
    let mut bands = [
        WorkloadBand::Shortfall,
        WorkloadBand::Standard,
        WorkloadBand::Strong,
        WorkloadBand::Exceptional,
    ]
    .into_iter()
    .map(|band| (band, 0))
    .collect::<BTreeMap<_, _>>();

    for result in results.values() {
        *grade_distribution.entry(result.breakdown.grade).or_insert(0) += 1;
        *bands
            .entry(workload_band(result.metrics.work_days, &config.work_days))
            .or_insert(0) += 1;
    }

    let marks = &config.summary;
    let overdue = OverdueStats {
        mean_ratio: round2(mean(&ratios)),
        mean_days: round2(mean(&delays)),
        high_ratio_count: ratios.iter().filter(|ratio| **ratio > marks.high_ratio_mark).count(),
        long_delay_count: delays.iter().filter(|days| **days > marks.long_delay_mark).count(),
    };
    let workload = WorkloadStats {
        mean_work_days: round2(mean(&work)),
        median_work_days: round2(median(&work)),
        bands,
    };
    let needs_review = names_where(results, |result| result.breakdown.flags.needs_review);

    let mut advice = Vec::new();
    if overdue.mean_ratio > marks.mean_ratio_alert {
        advice.push(TeamAdvice::ReduceOverdueRatio);
    }
    if overdue.mean_days > marks.mean_days_alert {
        advice.push(TeamAdvice::TightenSchedule);
    }
    let shortfall = workload.bands[&WorkloadBand::Shortfall];
    if shortfall as f64 > headcount as f64 * marks.shortfall_share_alert {
        advice.push(TeamAdvice::RaiseUtilization);
    }
    if !needs_review.is_empty() {
        advice.push(TeamAdvice::VerifyReportedEffort);
    }
    if workload.bands[&WorkloadBand::Strong] + workload.bands[&WorkloadBand::Exceptional] > 0 {
        advice.push(TeamAdvice::RecognizeOutput);
    }

    Some(TeamSummary {
        headcount,
        mean_score: round2(mean(&scores)),
        median_score: round2(median(&scores)),
        max_score: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min_score: scores.iter().copied().fold(f64::INFINITY, f64::min),
        grade_distribution,
        highlights: names_where(results, |result| result.breakdown.grade == Grade::S),
        lowlights: names_where(results, |result| result.breakdown.grade == Grade::D),
        needs_review,
        overdue,
        workload,
        advice,
    })
}

/// Highest comprehensive score first, ties broken by name; ranks start at 1.
pub fn rank(results: &BTreeMap<String, EmployeeScore>) -> Vec<RankedEmployee> {
    let mut ranked = results
        .iter()
        .map(|(name, result)| RankedEmployee {
            rank: 0,
            name: name.clone(),
            comprehensive_score: result.breakdown.comprehensive_score,
            grade: result.breakdown.grade,
            needs_review: result.breakdown.flags.needs_review,
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|left, right| {
        right
            .comprehensive_score
            .total_cmp(&left.comprehensive_score)
            .then_with(|| left.name.cmp(&right.name))
    });
    for (index, entry) in ranked.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    ranked
}

#[derive(Serialize)]
struct BatchReport<'a> {
    policy: &'a str,
    employees: &'a BTreeMap<String, EmployeeScore>,
    ranking: Vec<RankedEmployee>,
    summary: Option<TeamSummary>,
}

pub fn to_json(results: &BTreeMap<String, EmployeeScore>, config: &ScoringConfig) -> Result<String> {
    let report = BatchReport {
        policy: config.label(),
        employees: results,
        ranking: rank(results),
        summary: summarize(results, config),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn names_where(
    results: &BTreeMap<String, EmployeeScore>,
    predicate: impl Fn(&EmployeeScore) -> bool,
) -> Vec<String> {
    results
        .iter()
        .filter(|(_, result)| predicate(result))
        .map(|(name, _)| name.clone())
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::ScoringEngine;
    use crate::types::scoring::MetricTriple;

    fn team() -> BTreeMap<String, EmployeeScore> {
        let engine = ScoringEngine::default();
        let inputs = BTreeMap::from([
            ("ann".to_string(), MetricTriple::new(15.0, 1.5, 10.0)),
            ("bob".to_string(), MetricTriple::new(83.3, 18.3, 7.0)),
            ("cid".to_string(), MetricTriple::new(18.8, 0.8, 13.0)),
            ("dee".to_string(), MetricTriple::new(70.0, 13.6, 21.0)),
        ]);
        engine.score_batch(&inputs)
    }

    #[test]
    fn empty_batch_has_no_summary() {
        assert!(summarize(&BTreeMap::new(), &ScoringConfig::default()).is_none());
    }

    #[test]
    fn summary_counts_grades_and_bands() {
        let summary = summarize(&team(), &ScoringConfig::default()).expect("summary expected");
        assert_eq!(summary.headcount, 4);
        assert_eq!(summary.grade_distribution.len(), 5);
        assert_eq!(summary.grade_distribution.values().sum::<usize>(), 4);
        assert_eq!(summary.grade_distribution[&Grade::S], 2);
        assert_eq!(summary.highlights, vec!["ann".to_string(), "cid".to_string()]);
        assert_eq!(summary.lowlights, vec!["bob".to_string(), "dee".to_string()]);
        assert_eq!(summary.needs_review, vec!["dee".to_string()]);
        assert_eq!(summary.workload.bands[&WorkloadBand::Shortfall], 1);
        assert_eq!(summary.workload.bands[&WorkloadBand::Standard], 1);
        assert_eq!(summary.workload.bands[&WorkloadBand::Strong], 1);
        assert_eq!(summary.workload.bands[&WorkloadBand::Exceptional], 1);
        assert_eq!(summary.max_score, 101.2);
        assert_eq!(summary.overdue.high_ratio_count, 2);
        assert_eq!(summary.overdue.long_delay_count, 2);
        assert_eq!(summary.workload.median_work_days, 11.5);
    }

    #[test]
    fn summary_advice_follows_team_marks() {
        let summary = summarize(&team(), &ScoringConfig::default()).expect("summary expected");
        assert_eq!(
            summary.advice,
            vec![
                TeamAdvice::ReduceOverdueRatio,
                TeamAdvice::TightenSchedule,
                TeamAdvice::RaiseUtilization,
                TeamAdvice::VerifyReportedEffort,
                TeamAdvice::RecognizeOutput,
            ]
        );
    }

    #[test]
    fn exceptional_workload_alone_earns_recognition() {
        let engine = ScoringEngine::default();
        let inputs = BTreeMap::from([
            ("amy".to_string(), MetricTriple::new(10.0, 1.0, 18.0)),
            ("kim".to_string(), MetricTriple::new(10.0, 1.0, 22.0)),
        ]);
        let summary =
            summarize(&engine.score_batch(&inputs), &ScoringConfig::default()).expect("summary expected");
        assert_eq!(summary.workload.bands[&WorkloadBand::Strong], 0);
        assert_eq!(summary.workload.bands[&WorkloadBand::Exceptional], 2);
        assert!(summary.advice.contains(&TeamAdvice::RecognizeOutput));
    }

    #[test]
    fn rank_orders_by_score_then_name() {
        let engine = ScoringEngine::default();
        let inputs = BTreeMap::from([
            ("zed".to_string(), MetricTriple::new(15.0, 1.5, 10.0)),
            ("amy".to_string(), MetricTriple::new(15.0, 1.5, 10.0)),
            ("kim".to_string(), MetricTriple::new(50.0, 5.0, 8.0)),
        ]);
        let ranked = rank(&engine.score_batch(&inputs));
        let order = ranked
            .iter()
            .map(|entry| (entry.rank, entry.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![(1, "amy"), (2, "zed"), (3, "kim")]);
    }

    #[test]
    fn json_report_contains_policy_and_summary() {
        let rendered = to_json(&team(), &ScoringConfig::default()).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["policy"], "default");
        assert_eq!(value["summary"]["headcount"], 4);
        assert_eq!(value["employees"]["ann"]["breakdown"]["grade"], "S");
        assert_eq!(value["ranking"][0]["rank"], 1);
    }

    #[test]
    fn median_handles_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }
}
