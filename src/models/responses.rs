use serde::{Deserialize, Serialize};

use crate::models::domain::{ComplianceStatus, ScoredMatch};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Response for the single-pairing compliance check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheckResponse {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "caregiverId")]
    pub caregiver_id: String,
    pub compliance: ComplianceStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
