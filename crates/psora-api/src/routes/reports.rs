use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use psora_export::docx::generate_docx;
use psora_export::render::render_report;

use super::assessments::AssessmentRequest;
use crate::error::ApiError;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn render(state: &AppState, req: AssessmentRequest) -> Result<String, ApiError> {
    let report = req.into_state()?.report()?;
    tracing::info!(report_id = %report.id, tier = ?report.outcome.tier, "building report");
    Ok(render_report("report", &state.report_template, &report)?)
}

/// Render an assessment with the configured template, as Markdown.
pub async fn markdown_report(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let rendered = render(&state, req)?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        rendered,
    ))
}

/// Render an assessment and convert it to DOCX.
pub async fn docx_report(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let rendered = render(&state, req)?;
    let bytes = generate_docx(&rendered, &state.styles)?;
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"psoriasis-assessment.docx\"",
            ),
        ],
        bytes,
    ))
}
