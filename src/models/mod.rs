// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AvailabilityProfile, Caregiver, CaregiverStatus, CheckStatus, Client, ComplianceCheck,
    ComplianceStatus, Credential, CredentialStatus, GeoPoint, LocationConstraint,
    MatchingCriteria, ScoredMatch, ScoringWeights, ShiftTiming, TimeWindow,
};
pub use requests::{ComplianceCheckRequest, FindMatchesRequest};
pub use responses::{
    ComplianceCheckResponse, ErrorResponse, FindMatchesResponse, HealthResponse,
};
