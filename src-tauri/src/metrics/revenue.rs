use crate::metrics::activity::{total_activities, total_time_minutes};
use crate::metrics::conversion::{conversion_rate, stage_rates, StageRates};
use crate::models::funnel::FunnelSnapshot;
use crate::models::routine::RoutineEntry;
use serde::{Deserialize, Serialize};

/// Derived dashboard read model. Recomputed from scratch on every read; the
/// input volumes are always small, so correctness wins over caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelSummary {
    pub total_activities: u64,
    pub total_time_minutes: u64,
    pub expected_revenue: f64,
    pub goal_attainment: f64,
    pub efficiency: f64,
    pub rates: StageRates,
}

/// Projected revenue from the current funnel: closed sales times average
/// ticket. No rounding; callers format for display.
pub fn expected_revenue(funnel: &FunnelSnapshot) -> f64 {
    funnel.closed_sales * funnel.avg_ticket
}

/// Sales per activity as a percentage. Defined as 0 when nothing has been
/// logged yet.
pub fn efficiency(funnel: &FunnelSnapshot, total_activities: u64) -> f64 {
    conversion_rate(funnel.closed_sales, total_activities as f64)
}

/// Expected revenue against the configured goal, as a percentage.
pub fn goal_attainment(funnel: &FunnelSnapshot) -> f64 {
    conversion_rate(expected_revenue(funnel), funnel.revenue_goal)
}

pub fn summarize(funnel: &FunnelSnapshot, routines: &[RoutineEntry]) -> FunnelSummary {
    let activities = total_activities(routines);
    FunnelSummary {
        total_activities: activities,
        total_time_minutes: total_time_minutes(routines),
        expected_revenue: expected_revenue(funnel),
        goal_attainment: goal_attainment(funnel),
        efficiency: efficiency(funnel, activities),
        rates: stage_rates(funnel, activities),
    }
}
