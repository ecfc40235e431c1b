use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Caregiver, Client, ShiftTiming};

/// Request to find matches for a client's proposed shift
///
/// The caller supplies the full caregiver pool; the service holds no
/// roster of its own.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub client: Client,
    #[serde(default)]
    pub caregivers: Vec<Caregiver>,
    pub shift: ShiftTiming,
    /// Maximum matches to return; server default applies when omitted
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to evaluate one caregiver/client pairing for compliance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheckRequest {
    pub client: Client,
    pub caregiver: Caregiver,
}
