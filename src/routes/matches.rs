use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{compliance, Matcher};
use crate::models::{
    ComplianceCheckRequest, ComplianceCheckResponse, ErrorResponse, FindMatchesRequest,
    FindMatchesResponse, HealthResponse, MatchingCriteria,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/compliance", web::post().to(check_compliance));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "client": { ... },
///   "caregivers": [ ... ],
///   "shift": { "start": "...", "end": "..." },
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if req.client.id.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid client".to_string(),
            message: "client.id must not be empty".to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;
    let request = req.into_inner();

    tracing::info!(
        "Finding matches for client {}: {} caregivers in pool, limit {}",
        request.client.id,
        request.caregivers.len(),
        limit
    );

    let criteria = MatchingCriteria::for_client(&request.client, request.shift);
    let result = state
        .matcher
        .find_matches(&request.client, request.caregivers, &criteria, limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        request_id: uuid::Uuid::new_v4().to_string(),
    };

    tracing::info!(
        "Returning {} matches for client {} (from {} candidates)",
        response.matches.len(),
        request.client.id,
        result.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Compliance check endpoint
///
/// POST /api/v1/matches/compliance
///
/// Evaluates a single caregiver against a single client's requirements
/// and returns the per-control verdict without any scoring.
async fn check_compliance(req: web::Json<ComplianceCheckRequest>) -> impl Responder {
    let request = req.into_inner();

    let compliance = compliance::evaluate(&request.client, &request.caregiver);

    tracing::debug!(
        "Compliance for caregiver {} / client {}: compliant={}, {} checks",
        request.caregiver.id,
        request.client.id,
        compliance.is_compliant,
        compliance.checks.len()
    );

    HttpResponse::Ok().json(ComplianceCheckResponse {
        client_id: request.client.id,
        caregiver_id: request.caregiver.id,
        compliance,
    })
}
