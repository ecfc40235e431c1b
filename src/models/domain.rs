use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lifecycle state of a certification or license record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CredentialStatus {
    Valid,
    ExpiringSoon,
    Expired,
}

/// A certification/license held by a caregiver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "type")]
    pub credential_type: String,
    pub status: CredentialStatus,
    #[serde(rename = "expirationDate")]
    pub expiration_date: chrono::NaiveDate,
}

/// Geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Allowable service radius around a client's location
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationConstraint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "maxDistanceKm")]
    pub max_distance_km: f64,
}

impl LocationConstraint {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Daily time-of-day window, half-open: start inclusive, end exclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: chrono::NaiveTime,
    pub end: chrono::NaiveTime,
}

impl TimeWindow {
    pub fn contains(&self, time: chrono::NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Caregiver scheduling preferences and restrictions
///
/// `weekly_hours_cap` and `max_shifts_per_week` are carried for
/// downstream consumers but are not enforced by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityProfile {
    #[serde(rename = "weeklyHoursCap", default)]
    pub weekly_hours_cap: u16,
    #[serde(rename = "preferredHours", default)]
    pub preferred_hours: Vec<TimeWindow>,
    #[serde(rename = "blockedDates", default)]
    pub blocked_dates: HashSet<chrono::NaiveDate>,
    #[serde(rename = "maxShiftsPerWeek", default)]
    pub max_shifts_per_week: u8,
}

/// Employment state of a caregiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaregiverStatus {
    Active,
    OnLeave,
    Blocked,
}

impl CaregiverStatus {
    /// Human-readable form used in compliance messages
    pub fn label(&self) -> &'static str {
        match self {
            CaregiverStatus::Active => "active",
            CaregiverStatus::OnLeave => "on leave",
            CaregiverStatus::Blocked => "blocked",
        }
    }
}

/// A caregiver in the matching pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caregiver {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: CaregiverStatus,
    #[serde(default)]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub availability: Option<AvailabilityProfile>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl Caregiver {
    /// Look up the caregiver's credential of a given type.
    ///
    /// When duplicates of one type exist, the record with the latest
    /// expiration date wins.
    pub fn credential(&self, credential_type: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .filter(|c| c.credential_type == credential_type)
            .max_by_key(|c| c.expiration_date)
    }

    pub fn is_active(&self) -> bool {
        self.status == CaregiverStatus::Active
    }
}

/// A care recipient whose requirements drive matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub program: String,
    #[serde(rename = "requiredCredentials", default)]
    pub required_credentials: Vec<String>,
    #[serde(rename = "planOfCareTasks", default)]
    pub plan_of_care_tasks: Vec<String>,
    #[serde(rename = "preferredCaregivers", default)]
    pub preferred_caregivers: Vec<String>,
    #[serde(rename = "locationConstraint", default)]
    pub location_constraint: Option<LocationConstraint>,
}

/// Start/end of a proposed shift
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShiftTiming {
    pub start: chrono::DateTime<chrono::Utc>,
    pub end: chrono::DateTime<chrono::Utc>,
}

/// Inputs to scoring, derived from a client plus a proposed shift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingCriteria {
    #[serde(rename = "requiredCredentials", default)]
    pub required_credentials: Vec<String>,
    #[serde(rename = "preferredCaregivers", default)]
    pub preferred_caregivers: Vec<String>,
    #[serde(rename = "locationConstraint", default)]
    pub location_constraint: Option<LocationConstraint>,
    pub shift: ShiftTiming,
}

impl MatchingCriteria {
    /// Build criteria for one client and one proposed shift
    pub fn for_client(client: &Client, shift: ShiftTiming) -> Self {
        Self {
            required_credentials: client.required_credentials.clone(),
            preferred_caregivers: client.preferred_caregivers.clone(),
            location_constraint: client.location_constraint,
            shift,
        }
    }
}

/// Outcome of a single compliance rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

/// One evaluated rule, tied to a control code for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub control: String,
    pub status: CheckStatus,
    pub message: String,
}

impl ComplianceCheck {
    pub fn new(control: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            control: control.to_string(),
            status,
            message: message.into(),
        }
    }
}

/// Aggregate verdict for one caregiver/client pairing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceStatus {
    #[serde(rename = "isCompliant")]
    pub is_compliant: bool,
    pub checks: Vec<ComplianceCheck>,
}

impl ComplianceStatus {
    /// Compliant iff no check failed; warnings are permitted.
    pub fn from_checks(checks: Vec<ComplianceCheck>) -> Self {
        let is_compliant = !checks.iter().any(|c| c.status == CheckStatus::Fail);
        Self {
            is_compliant,
            checks,
        }
    }
}

/// Scored match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub caregiver: Caregiver,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    pub compliance: ComplianceStatus,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub credentials: f64,
    pub preferred: f64,
    pub proximity: f64,
    pub availability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            credentials: 0.40,
            preferred: 0.20,
            proximity: 0.20,
            availability: 0.20,
        }
    }
}
