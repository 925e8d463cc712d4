//! psora-api
//!
//! Stateless HTTP shell over the psoriasis instruments: scoring, severity
//! classification, recommendations and report export.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;

use state::AppState;

/// Build the application router. CORS is layered on by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instrument schemas
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/validate",
            post(routes::instruments::validate_scores),
        )
        .route(
            "/schema/registration",
            get(routes::schema::registration_schema),
        )
        // Scoring
        .route("/scores/pasi", post(routes::scores::score_pasi))
        .route("/scores/bsa", post(routes::scores::score_bsa))
        .route("/scores/dlqi", post(routes::scores::score_dlqi))
        .route("/scores/severity", post(routes::scores::score_severity))
        .route(
            "/recommendations/{tier}/{age_band}",
            get(routes::recommendations::get_recommendation_set),
        )
        .route("/diagnostic", post(routes::diagnostic::score_matrix))
        .route("/subtypes", post(routes::diagnostic::identify))
        // Whole assessments
        .route(
            "/assessments/outcome",
            post(routes::assessments::assessment_outcome),
        )
        .route("/assessments/report", post(routes::reports::markdown_report))
        .route(
            "/assessments/report/docx",
            post(routes::reports::docx_report),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
