use crate::models::funnel::FunnelSnapshot;
use serde::{Deserialize, Serialize};

/// Stage-to-stage conversion rates, each expressed as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRates {
    pub activity_to_mql: f64,
    pub mql_to_sql: f64,
    pub sql_to_opps: f64,
    pub opps_to_sale: f64,
}

/// Generic stage conversion: `numerator / denominator * 100`, defined as 0
/// when the denominator is 0. Division by zero is a policy case here, not an
/// error.
pub fn conversion_rate(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// All four funnel stage rates. The top rate intentionally uses raw
/// `leads_generated_mql` over total activities, matching the dashboard's
/// historical definition of that metric.
pub fn stage_rates(funnel: &FunnelSnapshot, total_activities: u64) -> StageRates {
    StageRates {
        activity_to_mql: conversion_rate(funnel.leads_generated_mql, total_activities as f64),
        mql_to_sql: conversion_rate(funnel.leads_qualified_sql, funnel.leads_generated_mql),
        sql_to_opps: conversion_rate(funnel.opportunities_opps, funnel.leads_qualified_sql),
        opps_to_sale: conversion_rate(funnel.closed_sales, funnel.opportunities_opps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_funnel() -> FunnelSnapshot {
        FunnelSnapshot {
            leads_generated_mql: 400.0,
            leads_qualified_sql: 120.0,
            opportunities_opps: 45.0,
            closed_sales: 8.0,
            avg_ticket: 5000.0,
            revenue_goal: 60000.0,
        }
    }

    #[test]
    fn zero_denominator_yields_zero_for_any_numerator() {
        assert_eq!(conversion_rate(0.0, 0.0), 0.0);
        assert_eq!(conversion_rate(42.0, 0.0), 0.0);
    }

    #[test]
    fn computes_percentage() {
        assert!((conversion_rate(120.0, 400.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn reference_funnel_stage_rates() {
        let rates = stage_rates(&reference_funnel(), 500);
        assert!((rates.activity_to_mql - 80.0).abs() < 1e-9);
        assert!((rates.mql_to_sql - 30.0).abs() < 1e-9);
        assert!((rates.sql_to_opps - 37.5).abs() < 1e-9);
        assert!((rates.opps_to_sale - 17.777777777777779).abs() < 1e-9);
    }

    #[test]
    fn empty_routine_log_defines_top_rate_as_zero() {
        let rates = stage_rates(&reference_funnel(), 0);
        assert_eq!(rates.activity_to_mql, 0.0);
        // Downstream rates are unaffected by activity volume.
        assert!((rates.mql_to_sql - 30.0).abs() < 1e-9);
    }
}
