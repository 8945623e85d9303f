//! Precondition guard in front of the engine: the three raw metric sets must
//! be non-empty, share at least one employee, and stay inside their domains.

use crate::error::{Result, ScoringError};
use crate::types::scoring::MetricTriple;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

pub const OVERDUE_RATIO: &str = "overdue ratio";
pub const OVERDUE_DAYS: &str = "overdue days";
pub const WORK_DAYS: &str = "work days";

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    /// Employees present in all three sets.
    pub triples: BTreeMap<String, MetricTriple>,
    /// Employees missing from at least one set; they are not scored.
    pub excluded: BTreeSet<String>,
}

pub fn validate_inputs(
    overdue_ratios: &BTreeMap<String, f64>,
    overdue_days: &BTreeMap<String, f64>,
    work_days: &BTreeMap<String, f64>,
) -> Result<ValidatedInputs> {
    for (metric, values) in [
        (OVERDUE_RATIO, overdue_ratios),
        (OVERDUE_DAYS, overdue_days),
        (WORK_DAYS, work_days),
    ] {
        if values.is_empty() {
            return Err(ScoringError::EmptyDataset(metric));
        }
    }

    let common = overdue_ratios
        .keys()
        .filter(|name| overdue_days.contains_key(*name) && work_days.contains_key(*name))
        .cloned()
        .collect::<BTreeSet<_>>();
    if common.is_empty() {
        return Err(ScoringError::NoCommonEmployees);
    }

    check_domain(OVERDUE_RATIO, overdue_ratios, |ratio| (0.0..=100.0).contains(&ratio))?;
    check_domain(OVERDUE_DAYS, overdue_days, |days| days >= 0.0)?;
    check_domain(WORK_DAYS, work_days, |days| days >= 0.0)?;

    let excluded = overdue_ratios
        .keys()
        .chain(overdue_days.keys())
        .chain(work_days.keys())
        .filter(|name| !common.contains(*name))
        .cloned()
        .collect::<BTreeSet<_>>();
    if !excluded.is_empty() {
        warn!(
            excluded = excluded.len(),
            names = ?excluded,
            "employees missing from at least one metric set are not scored"
        );
    }

    let triples = common
        .into_iter()
        .filter_map(|name| {
            let triple = MetricTriple::new(
                *overdue_ratios.get(&name)?,
                *overdue_days.get(&name)?,
                *work_days.get(&name)?,
            );
            Some((name, triple))
        })
        .collect();

    Ok(ValidatedInputs { triples, excluded })
}

fn check_domain(
    metric: &'static str,
    values: &BTreeMap<String, f64>,
    in_domain: impl Fn(f64) -> bool,
) -> Result<()> {
    match values.iter().find(|(_, value)| !in_domain(**value)) {
        Some((employee, value)) => Err(ScoringError::OutOfRange {
            metric,
            employee: employee.clone(),
            value: *value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn rejects_empty_dataset() {
        let result = validate_inputs(&set(&[("ann", 10.0)]), &set(&[]), &set(&[("ann", 10.0)]));
        assert!(matches!(result, Err(ScoringError::EmptyDataset(OVERDUE_DAYS))));
    }

    #[test]
    fn rejects_disjoint_datasets() {
        let result = validate_inputs(
            &set(&[("ann", 10.0)]),
            &set(&[("bob", 1.0)]),
            &set(&[("ann", 10.0), ("bob", 10.0)]),
        );
        assert!(matches!(result, Err(ScoringError::NoCommonEmployees)));
    }

    #[test]
    fn rejects_ratio_outside_percentage_range() {
        let result = validate_inputs(
            &set(&[("ann", 100.5)]),
            &set(&[("ann", 1.0)]),
            &set(&[("ann", 10.0)]),
        );
        match result {
            Err(ScoringError::OutOfRange {
                metric,
                employee,
                value,
            }) => {
                assert_eq!(metric, OVERDUE_RATIO);
                assert_eq!(employee, "ann");
                assert_eq!(value, 100.5);
            }
            other => panic!("expected out-of-range error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_days_and_nan() {
        let result = validate_inputs(
            &set(&[("ann", 10.0)]),
            &set(&[("ann", -0.5)]),
            &set(&[("ann", 10.0)]),
        );
        assert!(matches!(
            result,
            Err(ScoringError::OutOfRange {
                metric: OVERDUE_DAYS,
                ..
            })
        ));

        let result = validate_inputs(
            &set(&[("ann", 10.0)]),
            &set(&[("ann", 0.5)]),
            &set(&[("ann", f64::NAN)]),
        );
        assert!(matches!(
            result,
            Err(ScoringError::OutOfRange {
                metric: WORK_DAYS,
                ..
            })
        ));
    }

    #[test]
    fn range_check_covers_employees_outside_the_intersection() {
        let result = validate_inputs(
            &set(&[("ann", 10.0), ("bob", 140.0)]),
            &set(&[("ann", 1.0)]),
            &set(&[("ann", 10.0)]),
        );
        assert!(matches!(result, Err(ScoringError::OutOfRange { .. })));
    }

    #[test]
    fn keeps_intersection_and_reports_exclusions() {
        let validated = validate_inputs(
            &set(&[("ann", 10.0), ("bob", 30.0), ("cid", 0.0)]),
            &set(&[("ann", 1.0), ("bob", 4.0)]),
            &set(&[("ann", 12.0), ("bob", 8.0), ("dee", 9.0)]),
        )
        .expect("inputs should validate");

        assert_eq!(validated.triples.len(), 2);
        assert_eq!(validated.triples["bob"], MetricTriple::new(30.0, 4.0, 8.0));
        assert_eq!(
            validated.excluded.into_iter().collect::<Vec<_>>(),
            vec!["cid".to_string(), "dee".to_string()]
        );
    }

    #[test]
    fn accepts_domain_boundaries() {
        let validated = validate_inputs(
            &set(&[("ann", 0.0), ("bob", 100.0)]),
            &set(&[("ann", 0.0), ("bob", 0.0)]),
            &set(&[("ann", 0.0), ("bob", 0.0)]),
        )
        .expect("boundary values are in domain");
        assert!(validated.excluded.is_empty());
    }
}
