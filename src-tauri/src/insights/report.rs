use crate::metrics::conversion::stage_rates;
use crate::metrics::activity::total_time_minutes;
use crate::models::funnel::FunnelSnapshot;
use crate::models::pdca::PdcaEntry;
use crate::models::routine::RoutineEntry;

/// Compose the executive analysis prompt sent to the generation service.
///
/// `total_activities` is supplied by the caller so aggregation logic lives
/// in one place (the metrics engine), not here.
pub fn compose_report(
    funnel: &FunnelSnapshot,
    pdca: &[PdcaEntry],
    routines: &[RoutineEntry],
    total_activities: u64,
) -> String {
    let rates = stage_rates(funnel, total_activities);

    let pdca_block = if pdca.is_empty() {
        "No active actions.".to_string()
    } else {
        pdca.iter()
            .map(|p| {
                format!(
                    "- [Problem: {}] -> [Action: {}] -> [Deadline: {}]",
                    p.problem, p.action_plan, p.completion_deadline
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "As a Senior Sales Consultant, analyze the following data from a sales \
operation and provide 3 to 4 strategic insights.\n\
\n\
FUNNEL DATA:\n\
- Activities Logged (Total): {total_activities}\n\
- Time Invested (Minutes): {time_minutes}\n\
- Leads Generated (MQL): {mql}\n\
- Leads Qualified by Sales (SQL): {sql}\n\
- Opportunities (OPPS): {opps}\n\
- Closed Sales: {sales}\n\
- Average Ticket: {ticket}\n\
- Revenue Goal: {goal}\n\
\n\
COMPUTED CONVERSION RATES:\n\
- Activity > MQL: {r1:.1}%\n\
- MQL > SQL: {r2:.1}%\n\
- SQL > OPPS: {r3:.1}%\n\
- OPPS > Sale: {r4:.1}%\n\
\n\
ACTIVE PDCA ACTIONS:\n\
{pdca_block}\n\
\n\
The analysis must be executive, direct and action-oriented. Identify the main \
bottleneck and point out where the manager should focus the team's effort to \
hit the {goal} revenue goal.",
        time_minutes = total_time_minutes(routines),
        mql = funnel.leads_generated_mql,
        sql = funnel.leads_qualified_sql,
        opps = funnel.opportunities_opps,
        sales = funnel.closed_sales,
        ticket = funnel.avg_ticket,
        goal = funnel.revenue_goal,
        r1 = rates.activity_to_mql,
        r2 = rates.mql_to_sql,
        r3 = rates.sql_to_opps,
        r4 = rates.opps_to_sale,
    )
}
