use serde::{Deserialize, Serialize};

/// Mathematical funnel inputs, edited wholesale from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelSnapshot {
    pub leads_generated_mql: f64,
    pub leads_qualified_sql: f64,
    pub opportunities_opps: f64,
    pub closed_sales: f64,
    pub avg_ticket: f64,
    pub revenue_goal: f64,
}

impl FunnelSnapshot {
    /// Clamp every field to a finite, non-negative number. Form input never
    /// hard-fails; bad values coerce to 0.
    pub fn sanitized(&self) -> FunnelSnapshot {
        FunnelSnapshot {
            leads_generated_mql: clamp_non_negative(self.leads_generated_mql),
            leads_qualified_sql: clamp_non_negative(self.leads_qualified_sql),
            opportunities_opps: clamp_non_negative(self.opportunities_opps),
            closed_sales: clamp_non_negative(self.closed_sales),
            avg_ticket: clamp_non_negative(self.avg_ticket),
            revenue_goal: clamp_non_negative(self.revenue_goal),
        }
    }
}

impl Default for FunnelSnapshot {
    fn default() -> Self {
        FunnelSnapshot {
            leads_generated_mql: 0.0,
            leads_qualified_sql: 0.0,
            opportunities_opps: 0.0,
            closed_sales: 0.0,
            avg_ticket: 0.0,
            revenue_goal: 0.0,
        }
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
