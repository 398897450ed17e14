use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::batch::assess_batch;
use super::domain::CandidateProfile;
use super::{Assessment, PointsEngine, ScoreComponent};

/// Router builder exposing HTTP endpoints for single and batch scoring.
pub fn assessment_router(engine: Arc<PointsEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments/score", post(score_handler))
        .route("/api/v1/assessments/batch", post(batch_handler))
        .with_state(engine)
}

/// Response shape for a scored profile: headline sub-totals plus the full breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentView {
    pub total: u32,
    pub core_human_capital: u32,
    pub spouse: u32,
    pub additional: u32,
    pub skill_transferability: u32,
    pub breakdown: Assessment,
    pub components: Vec<ScoreComponent>,
}

impl From<&Assessment> for AssessmentView {
    fn from(assessment: &Assessment) -> Self {
        Self {
            total: assessment.total,
            core_human_capital: assessment.core_human_capital.total(),
            spouse: assessment.spouse.map(|points| points.total()).unwrap_or(0),
            additional: assessment.additional.total(),
            skill_transferability: assessment.additional.skill_transferability.total(),
            breakdown: *assessment,
            components: assessment.components(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub profiles: Vec<CandidateProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub assessments: Vec<AssessmentView>,
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<PointsEngine>>,
    axum::Json(profile): axum::Json<CandidateProfile>,
) -> Response {
    let assessment = engine.assess(&profile);
    let view = AssessmentView::from(&assessment);
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn batch_handler(
    State(engine): State<Arc<PointsEngine>>,
    axum::Json(request): axum::Json<BatchRequest>,
) -> Response {
    let assessments = assess_batch(&engine, &request.profiles);
    info!(profiles = assessments.len(), "batch assessment completed");

    let body = BatchResponse {
        assessments: assessments.iter().map(AssessmentView::from).collect(),
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}
