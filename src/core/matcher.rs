use crate::core::{
    compliance::evaluate, distance::haversine_km, scoring::calculate_match_score,
};
use crate::models::{Caregiver, Client, MatchingCriteria, ScoredMatch, ScoringWeights};

/// Result of one matching run
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// For each caregiver in the pool, runs the compliance engine and the
/// scorer, keeps compliant caregivers with a positive score, and ranks
/// them best-first.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Find compliant caregivers for a client's shift, ranked by score
    ///
    /// # Arguments
    /// * `client` - The care recipient whose requirements gate compliance
    /// * `caregivers` - The caregiver pool to evaluate
    /// * `criteria` - Matching criteria derived from the client and shift
    /// * `limit` - Maximum number of matches to return
    ///
    /// Ordering is descending by score; ties break by ascending
    /// caregiver id so results are deterministic regardless of pool
    /// order.
    pub fn find_matches(
        &self,
        client: &Client,
        caregivers: Vec<Caregiver>,
        criteria: &MatchingCriteria,
        limit: usize,
    ) -> MatchOutcome {
        let total_candidates = caregivers.len();

        let mut matches: Vec<ScoredMatch> = caregivers
            .into_iter()
            .filter_map(|caregiver| {
                let compliance = evaluate(client, &caregiver);
                let score = calculate_match_score(&caregiver, criteria, &self.weights);

                if score > 0.0 && compliance.is_compliant {
                    let distance_km = match (criteria.location_constraint, caregiver.location) {
                        (Some(constraint), Some(location)) => {
                            Some(haversine_km(constraint.point(), location))
                        }
                        _ => None,
                    };

                    Some(ScoredMatch {
                        caregiver,
                        match_score: score,
                        distance_km,
                        compliance,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.caregiver.id.cmp(&b.caregiver.id))
        });

        matches.truncate(limit);

        MatchOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
