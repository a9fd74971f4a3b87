use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use super::filter::LocationFilter;
use super::models::{IntentLabel, ParsedQuery};

const DATA_KEYWORDS: &[&str] = &[
    "visualize", "show", "chart", "graph", "plot", "display",
    "how many", "count", "total", "number of", "statistics",
    "cost", "expenditure", "budget", "spending", "progress",
    "completion", "status", "analysis", "breakdown", "distribution",
    "comparison", "trend", "data", "schemes", "projects",
];


/// Whether a query should be answered with aggregate data and a chart
/// rather than a document lookup.
pub fn should_visualize(parsed: &ParsedQuery) -> bool {
    let text_lower = parsed.original_text.to_lowercase();

    DATA_KEYWORDS.iter().any(|keyword| text_lower.contains(keyword))
        || parsed.intent.is_data_intent()
        || parsed.entities.has_location()
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AggregateKind {
    CostByYear,
    SchemeCountByType,
    AverageProgress,
    TotalSchemes,
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatePlan {
    pub kind: AggregateKind,
    pub statement: String,
    pub params: Vec<String>,
}


/// Picks the aggregate for a parsed query and renders it against `table`.
///
/// Returns `None` for queries with no data intent, no matching keywords and
/// no location restriction.
pub fn plan_aggregate(parsed: &ParsedQuery, filter: &LocationFilter, table: &str) -> Option<AggregatePlan> {
    let kind = select_kind(parsed, filter)?;

    let statement = match kind {
        AggregateKind::CostByYear => format!(
            "SELECT sanction_year, SUM(estimated_cost) AS total_cost FROM {}{} GROUP BY sanction_year ORDER BY sanction_year",
            table,
            where_clause(filter)
        ),
        AggregateKind::SchemeCountByType => format!(
            "SELECT type_of_scheme, COUNT(*) AS count FROM {}{} GROUP BY type_of_scheme",
            table,
            where_clause(filter)
        ),
        AggregateKind::AverageProgress => {
            let mut statement = format!(
                "SELECT AVG(physical_completion_progress) AS avg_progress FROM {} WHERE physical_completion_progress > 0",
                table
            );
            if !filter.is_empty() {
                statement.push_str(" AND ");
                statement.push_str(&filter.clause);
            }
            statement
        }
        AggregateKind::TotalSchemes => format!(
            "SELECT COUNT(*) AS total_schemes FROM {}{}",
            table,
            where_clause(filter)
        ),
    };

    Some(AggregatePlan {
        kind,
        statement,
        params: filter.params.clone(),
    })
}

fn select_kind(parsed: &ParsedQuery, filter: &LocationFilter) -> Option<AggregateKind> {
    let text = parsed.original_text.to_lowercase();
    let has = |word: &str| text.contains(word);

    if parsed.intent == IntentLabel::CostAnalysis || (has("cost") && has("year")) {
        Some(AggregateKind::CostByYear)
    } else if parsed.intent == IntentLabel::SchemeTypes || (has("scheme") && has("count") && has("type")) {
        Some(AggregateKind::SchemeCountByType)
    } else if parsed.intent == IntentLabel::ProgressAnalysis || has("progress") {
        Some(AggregateKind::AverageProgress)
    } else if parsed.intent == IntentLabel::CountSchemes || has("how many") || has("total") || has("count") {
        Some(AggregateKind::TotalSchemes)
    } else if !filter.is_empty() {
        Some(AggregateKind::TotalSchemes)
    } else {
        None
    }
}

fn where_clause(filter: &LocationFilter) -> String {
    if filter.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", filter.clause)
    }
}
