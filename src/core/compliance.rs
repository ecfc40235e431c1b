use crate::core::distance::haversine_km;
use crate::models::{
    Caregiver, CheckStatus, Client, ComplianceCheck, ComplianceStatus, CredentialStatus,
};

/// Control code for credential coverage checks
pub const CONTROL_CREDENTIALS: &str = "CRD-1";
/// Control code for caregiver employment status
pub const CONTROL_STATUS: &str = "CRD-2";
/// Control code for service-area (EVV) distance checks
pub const CONTROL_SERVICE_AREA: &str = "EVV-2";

/// Evaluate whether a caregiver may be assigned to a client.
///
/// Emits one check per rule in a fixed order: credential coverage for
/// each required type, then caregiver status, then service area. The
/// verdict is compliant iff no check failed; warnings are permitted.
pub fn evaluate(client: &Client, caregiver: &Caregiver) -> ComplianceStatus {
    let mut checks = Vec::with_capacity(client.required_credentials.len() + 2);

    for required in &client.required_credentials {
        checks.push(credential_check(caregiver, required));
    }

    checks.push(status_check(caregiver));

    if let Some(check) = service_area_check(client, caregiver) {
        checks.push(check);
    }

    ComplianceStatus::from_checks(checks)
}

/// One check per required credential type, decided by the caregiver's
/// best credential of that type (latest expiration).
#[inline]
fn credential_check(caregiver: &Caregiver, credential_type: &str) -> ComplianceCheck {
    match caregiver.credential(credential_type) {
        None => ComplianceCheck::new(
            CONTROL_CREDENTIALS,
            CheckStatus::Fail,
            format!("Missing required credential: {}", credential_type),
        ),
        Some(credential) => match credential.status {
            CredentialStatus::Expired => ComplianceCheck::new(
                CONTROL_CREDENTIALS,
                CheckStatus::Fail,
                format!("{} is expired", credential_type),
            ),
            CredentialStatus::ExpiringSoon => ComplianceCheck::new(
                CONTROL_CREDENTIALS,
                CheckStatus::Warning,
                format!("{} expires soon", credential_type),
            ),
            CredentialStatus::Valid => ComplianceCheck::new(
                CONTROL_CREDENTIALS,
                CheckStatus::Pass,
                format!("{} is valid", credential_type),
            ),
        },
    }
}

/// Only active caregivers are assignable. Always emitted.
#[inline]
fn status_check(caregiver: &Caregiver) -> ComplianceCheck {
    if caregiver.is_active() {
        ComplianceCheck::new(
            CONTROL_STATUS,
            CheckStatus::Pass,
            "Caregiver status is active",
        )
    } else {
        ComplianceCheck::new(
            CONTROL_STATUS,
            CheckStatus::Fail,
            format!("Caregiver is {}", caregiver.status.label()),
        )
    }
}

/// Service-area check. Skipped entirely (no check emitted) when either
/// the client constraint or the caregiver location is missing.
#[inline]
fn service_area_check(client: &Client, caregiver: &Caregiver) -> Option<ComplianceCheck> {
    let constraint = client.location_constraint?;
    let location = caregiver.location?;

    let distance = haversine_km(constraint.point(), location);
    let check = if distance > constraint.max_distance_km {
        ComplianceCheck::new(
            CONTROL_SERVICE_AREA,
            CheckStatus::Fail,
            format!("Caregiver outside service area ({}km)", distance.round()),
        )
    } else {
        ComplianceCheck::new(
            CONTROL_SERVICE_AREA,
            CheckStatus::Pass,
            "Caregiver within service area",
        )
    };

    Some(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaregiverStatus, Credential, GeoPoint, LocationConstraint};
    use chrono::NaiveDate;

    fn credential(credential_type: &str, status: CredentialStatus) -> Credential {
        Credential {
            credential_type: credential_type.to_string(),
            status,
            expiration_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        }
    }

    fn caregiver(status: CaregiverStatus, credentials: Vec<Credential>) -> Caregiver {
        Caregiver {
            id: "cg-1".to_string(),
            name: "Maria Lopez".to_string(),
            role: "RN".to_string(),
            status,
            credentials,
            availability: None,
            location: None,
        }
    }

    fn client(required: &[&str]) -> Client {
        Client {
            id: "cl-1".to_string(),
            name: "Rob Hale".to_string(),
            program: "personal-care".to_string(),
            required_credentials: required.iter().map(|s| s.to_string()).collect(),
            plan_of_care_tasks: vec![],
            preferred_caregivers: vec![],
            location_constraint: None,
        }
    }

    #[test]
    fn test_fully_credentialed_active_caregiver_passes() {
        let client = client(&["RN License"]);
        let caregiver = caregiver(
            CaregiverStatus::Active,
            vec![credential("RN License", CredentialStatus::Valid)],
        );

        let status = evaluate(&client, &caregiver);

        assert!(status.is_compliant);
        assert_eq!(status.checks.len(), 2);
        assert_eq!(status.checks[0].control, CONTROL_CREDENTIALS);
        assert_eq!(status.checks[0].status, CheckStatus::Pass);
        assert_eq!(status.checks[0].message, "RN License is valid");
        assert_eq!(status.checks[1].control, CONTROL_STATUS);
        assert_eq!(status.checks[1].message, "Caregiver status is active");
    }

    #[test]
    fn test_missing_credential_fails() {
        let client = client(&["RN License"]);
        let caregiver = caregiver(CaregiverStatus::Active, vec![]);

        let status = evaluate(&client, &caregiver);

        assert!(!status.is_compliant);
        assert_eq!(status.checks[0].status, CheckStatus::Fail);
        assert_eq!(
            status.checks[0].message,
            "Missing required credential: RN License"
        );
    }

    #[test]
    fn test_expired_credential_fails_expiring_warns() {
        let client = client(&["CPR"]);

        let expired = caregiver(
            CaregiverStatus::Active,
            vec![credential("CPR", CredentialStatus::Expired)],
        );
        let status = evaluate(&client, &expired);
        assert!(!status.is_compliant);
        assert_eq!(status.checks[0].message, "CPR is expired");

        let expiring = caregiver(
            CaregiverStatus::Active,
            vec![credential("CPR", CredentialStatus::ExpiringSoon)],
        );
        let status = evaluate(&client, &expiring);
        assert!(status.is_compliant, "warnings must not fail compliance");
        assert_eq!(status.checks[0].status, CheckStatus::Warning);
        assert_eq!(status.checks[0].message, "CPR expires soon");
    }

    #[test]
    fn test_on_leave_caregiver_fails_status_check() {
        let client = client(&[]);
        let caregiver = caregiver(CaregiverStatus::OnLeave, vec![]);

        let status = evaluate(&client, &caregiver);

        assert!(!status.is_compliant);
        assert_eq!(status.checks.len(), 1);
        assert_eq!(status.checks[0].control, CONTROL_STATUS);
        assert_eq!(status.checks[0].message, "Caregiver is on leave");
    }

    #[test]
    fn test_service_area_check_within_radius() {
        let mut client = client(&[]);
        client.location_constraint = Some(LocationConstraint {
            latitude: 32.7767,
            longitude: -96.7970,
            max_distance_km: 25.0,
        });
        let mut caregiver = caregiver(CaregiverStatus::Active, vec![]);
        caregiver.location = Some(GeoPoint {
            latitude: 32.7866,
            longitude: -96.7970,
        });

        let status = evaluate(&client, &caregiver);

        let area = status
            .checks
            .iter()
            .find(|c| c.control == CONTROL_SERVICE_AREA)
            .unwrap();
        assert_eq!(area.status, CheckStatus::Pass);
        assert_eq!(area.message, "Caregiver within service area");
    }

    #[test]
    fn test_service_area_check_outside_radius() {
        let mut client = client(&[]);
        client.location_constraint = Some(LocationConstraint {
            latitude: 32.7767,
            longitude: -96.7970,
            max_distance_km: 25.0,
        });
        let mut caregiver = caregiver(CaregiverStatus::Active, vec![]);
        // Fort Worth is roughly 50km west of Dallas
        caregiver.location = Some(GeoPoint {
            latitude: 32.7555,
            longitude: -97.3308,
        });

        let status = evaluate(&client, &caregiver);

        assert!(!status.is_compliant);
        let area = status
            .checks
            .iter()
            .find(|c| c.control == CONTROL_SERVICE_AREA)
            .unwrap();
        assert_eq!(area.status, CheckStatus::Fail);
        assert!(
            area.message.starts_with("Caregiver outside service area ("),
            "unexpected message: {}",
            area.message
        );
    }

    #[test]
    fn test_service_area_check_skipped_without_location_data() {
        let mut client = client(&[]);
        client.location_constraint = Some(LocationConstraint {
            latitude: 32.7767,
            longitude: -96.7970,
            max_distance_km: 25.0,
        });
        let caregiver = caregiver(CaregiverStatus::Active, vec![]);

        let status = evaluate(&client, &caregiver);

        // No location on the caregiver: the rule is skipped, not failed
        assert!(status.is_compliant);
        assert!(status
            .checks
            .iter()
            .all(|c| c.control != CONTROL_SERVICE_AREA));
    }

    #[test]
    fn test_duplicate_credentials_latest_expiration_decides() {
        let client = client(&["RN License"]);
        let mut stale = credential("RN License", CredentialStatus::Expired);
        stale.expiration_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let renewed = credential("RN License", CredentialStatus::Valid);
        let caregiver = caregiver(CaregiverStatus::Active, vec![stale, renewed]);

        let status = evaluate(&client, &caregiver);

        assert!(status.is_compliant);
        assert_eq!(status.checks[0].message, "RN License is valid");
    }
}
