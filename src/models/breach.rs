use serde::{Deserialize, Serialize};
use validator::Validate;

/// One simulated data-breach incident, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachRecord {
    pub source: String,
    pub date: String,
    pub risk_level: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CheckBreachRequest {
    #[validate(
        required(message = "Invalid banking detail provided"),
        length(min = 8, message = "Invalid banking detail provided")
    )]
    pub detail: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckBreachResponse {
    pub breached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaches: Option<Vec<BreachRecord>>,
}

/// Breach record as accepted by the summarize endpoint. Callers usually
/// forward records from a check-breach response, but partial records are
/// tolerated and rendered with "N/A" placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachSummaryInput {
    pub source: Option<String>,
    pub date: Option<String>,
    pub risk_level: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub breach_data: Vec<BreachSummaryInput>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
