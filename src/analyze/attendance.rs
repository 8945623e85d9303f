use crate::types::config::AttendancePolicy;

/// Multiplier for the comprehensive score of employees on leave. Returns 1.0
/// when the policy is disabled or the employee reported enough work-days.
pub fn attendance_factor(work_days: f64, policy: &AttendancePolicy) -> f64 {
    if !policy.enabled {
        return 1.0;
    }
    if work_days <= policy.absent_max_days {
        policy.absent_factor
    } else if work_days <= policy.partial_max_days {
        policy.partial_factor
    } else {
        1.0
    }
}
