use crate::models::routine::RoutineEntry;

/// Total logged activity volume: the sum of each entry's quantity, not the
/// entry count. A single batch of 5 calls counts as 5.
pub fn total_activities(routines: &[RoutineEntry]) -> u64 {
    routines.iter().map(|r| r.quantity as u64).sum()
}

/// Total minutes spent across all logged batches.
pub fn total_time_minutes(routines: &[RoutineEntry]) -> u64 {
    routines.iter().map(|r| r.time_spent_min as u64).sum()
}
