use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::board::BoardQueryService;
use super::domain::{ApplicationId, CandidateId, PositionId, StepId};
use super::store::{PipelineError, PipelineStore};
use super::transition::StageTransitionService;

/// Shared handler state: the read and write services over one store handle.
pub struct PipelineState<S> {
    pub board: BoardQueryService<S>,
    pub transitions: StageTransitionService<S>,
}

/// Body of `PUT /candidates/:id`, as issued by the board client when a card
/// is dropped onto another column.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCandidateRequest {
    pub application_id: i64,
    pub current_interview_step: i64,
}

/// Router builder exposing the REST surface of the pipeline core.
pub fn pipeline_router<S>(store: Arc<S>) -> Router
where
    S: PipelineStore + 'static,
{
    let state = Arc::new(PipelineState {
        board: BoardQueryService::new(store.clone()),
        transitions: StageTransitionService::new(store),
    });

    Router::new()
        .route("/positions", get(positions_handler::<S>))
        .route(
            "/positions/:position_id/interviewFlow",
            get(interview_flow_handler::<S>),
        )
        .route(
            "/positions/:position_id/candidates",
            get(candidates_handler::<S>),
        )
        .route("/candidates/:candidate_id", put(move_candidate_handler::<S>))
        .with_state(state)
}

pub(crate) async fn positions_handler<S>(State(state): State<Arc<PipelineState<S>>>) -> Response
where
    S: PipelineStore + 'static,
{
    match state.board.positions() {
        Ok(positions) => (StatusCode::OK, Json(positions)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn interview_flow_handler<S>(
    State(state): State<Arc<PipelineState<S>>>,
    Path(position_id): Path<i64>,
) -> Response
where
    S: PipelineStore + 'static,
{
    match state.board.interview_flow(PositionId(position_id)) {
        Ok(flow) => (StatusCode::OK, Json(flow)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn candidates_handler<S>(
    State(state): State<Arc<PipelineState<S>>>,
    Path(position_id): Path<i64>,
) -> Response
where
    S: PipelineStore + 'static,
{
    match state.board.candidates(PositionId(position_id)) {
        Ok(candidates) => (StatusCode::OK, Json(candidates)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn move_candidate_handler<S>(
    State(state): State<Arc<PipelineState<S>>>,
    Path(candidate_id): Path<i64>,
    Json(request): Json<MoveCandidateRequest>,
) -> Response
where
    S: PipelineStore + 'static,
{
    let result = state.transitions.move_application(
        CandidateId(candidate_id),
        ApplicationId(request.application_id),
        StepId(request.current_interview_step),
    );

    match result {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({ "message": receipt.message })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: PipelineError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (err.status_code(), Json(payload)).into_response()
}
