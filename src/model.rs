use serde::Deserialize;

/// One practice session as returned by the history API. Every field is optional;
/// missing values render as a dash in the report.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SessionRecord {
    pub created_at: Option<String>,
    pub session_type: Option<String>,
    pub overall_score: Option<f64>,
    pub grade: Option<String>,
    pub duration_secs: Option<u64>,
    pub question_text: Option<String>,
}

/// Aggregated statistics shown as summary tiles on the first page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalyticsSummary {
    pub total_sessions: Option<u64>,
    pub avg_score: Option<f64>,
    pub best_score: Option<f64>,
    pub streak_days: Option<u64>,
}
