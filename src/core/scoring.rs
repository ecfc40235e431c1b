use crate::core::distance::haversine_km;
use crate::models::{
    AvailabilityProfile, Caregiver, CredentialStatus, LocationConstraint, MatchingCriteria,
    ScoringWeights, ShiftTiming,
};

/// Calculate a suitability score (0-100) for a caregiver against shift criteria
///
/// Scoring formula:
/// score = (
///     credential_score * 0.40 +     # Valid required credentials held
///     preferred_score * 0.20 +      # Client named this caregiver
///     proximity_score * 0.20 +      # Closer = higher score
///     availability_score * 0.20     # Shift fits stated availability
/// ) * 100
pub fn calculate_match_score(
    caregiver: &Caregiver,
    criteria: &MatchingCriteria,
    weights: &ScoringWeights,
) -> f64 {
    let credential_score = calculate_credential_score(caregiver, &criteria.required_credentials);

    let preferred_score = if criteria.preferred_caregivers.contains(&caregiver.id) {
        1.0
    } else {
        0.0
    };

    let proximity_score =
        calculate_proximity_score(caregiver, criteria.location_constraint.as_ref());

    let availability_score =
        calculate_availability_score(caregiver.availability.as_ref(), &criteria.shift);

    let total_score = (credential_score * weights.credentials
        + preferred_score * weights.preferred
        + proximity_score * weights.proximity
        + availability_score * weights.availability)
        * 100.0;

    total_score.min(100.0).max(0.0)
}

/// Calculate credential score (0-1)
///
/// Share of required credential types held with `Valid` status. An
/// expiring or expired credential does not count here even when the
/// compliance engine lets it through as a warning. No requirements
/// counts as full satisfaction.
#[inline]
fn calculate_credential_score(caregiver: &Caregiver, required: &[String]) -> f64 {
    if required.is_empty() {
        return 1.0;
    }

    let valid_count = required
        .iter()
        .filter(|credential_type| {
            caregiver
                .credential(credential_type)
                .map(|c| c.status == CredentialStatus::Valid)
                .unwrap_or(false)
        })
        .count();

    valid_count as f64 / required.len() as f64
}

/// Calculate proximity score (0-1)
///
/// Linear falloff from 1 at the client's doorstep to 0 at the service
/// radius. Missing location data scores 0 rather than being skipped.
#[inline]
fn calculate_proximity_score(
    caregiver: &Caregiver,
    constraint: Option<&LocationConstraint>,
) -> f64 {
    let (constraint, location) = match (constraint, caregiver.location) {
        (Some(c), Some(l)) => (c, l),
        _ => return 0.0,
    };

    if constraint.max_distance_km <= 0.0 {
        return 0.0;
    }

    let distance_km = haversine_km(constraint.point(), location);
    (1.0 - distance_km / constraint.max_distance_km).max(0.0)
}

/// Calculate availability score (0-1)
///
/// Shift start inside a preferred window scores 1.0, outside scores
/// 0.5; a blocked date zeroes the component. Windows compare on
/// hour:minute of the shift start only. Weekly-hours and shifts-per-week
/// caps are not enforced here.
#[inline]
fn calculate_availability_score(
    availability: Option<&AvailabilityProfile>,
    shift: &ShiftTiming,
) -> f64 {
    let availability = match availability {
        Some(a) => a,
        None => return 0.0,
    };

    if availability.blocked_dates.contains(&shift.start.date_naive()) {
        return 0.0;
    }

    let start_time = shift.start.time();
    if availability
        .preferred_hours
        .iter()
        .any(|window| window.contains(start_time))
    {
        1.0
    } else {
        0.5
    }
}
