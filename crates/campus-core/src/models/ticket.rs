use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload sent to the support desk when an utterance escalates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub subject: String,
    pub message: String,
    pub student_name: String,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Support desk acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReceipt {
    pub id: String,
    #[serde(default)]
    pub status: String,
}
