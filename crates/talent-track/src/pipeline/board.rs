use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    ApplicationId, CandidateId, FlowId, InterviewStep, Position, PositionId, StepId, TypeId,
};
use super::store::{BoardSnapshot, PipelineError, PipelineStore};

/// Catalog entry for `GET /positions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSummaryView {
    pub id: PositionId,
    pub title: String,
    pub status: String,
    pub location: String,
    pub employment_type: String,
}

impl From<&Position> for PositionSummaryView {
    fn from(position: &Position) -> Self {
        Self {
            id: position.id,
            title: position.title.clone(),
            status: position.status.clone(),
            location: position.location.clone(),
            employment_type: position.employment_type.clone(),
        }
    }
}

/// Wire shape of one interview step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStepView {
    pub id: StepId,
    pub interview_flow_id: FlowId,
    pub interview_type_id: TypeId,
    pub name: String,
    pub order_index: u32,
}

impl From<&InterviewStep> for InterviewStepView {
    fn from(step: &InterviewStep) -> Self {
        Self {
            id: step.id,
            interview_flow_id: step.interview_flow_id,
            interview_type_id: step.interview_type_id,
            name: step.name.clone(),
            order_index: step.order_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFlowView {
    pub id: FlowId,
    pub description: String,
    pub interview_steps: Vec<InterviewStepView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFlowEnvelope {
    pub position_name: String,
    pub interview_flow: InterviewFlowView,
}

/// Response body of `GET /positions/:id/interviewFlow`. Existing clients read
/// `interviewFlow.interviewFlow.interviewSteps`, so the double wrapper stays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFlowResponse {
    pub interview_flow: InterviewFlowEnvelope,
}

/// One candidate row of `GET /positions/:id/candidates`. The current stage is
/// reported by name, matching the column headers the board renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateBoardView {
    pub candidate_id: CandidateId,
    pub application_id: ApplicationId,
    pub full_name: String,
    pub current_interview_step: String,
    pub application_date: NaiveDate,
}

/// Combined board view: ordered stages plus applications annotated by stage.
/// Both halves come from the same store snapshot, so every
/// `currentInterviewStep` value names a step present in `flow`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub flow: Vec<InterviewStepView>,
    pub applications: Vec<CandidateBoardView>,
}

/// Read path of the pipeline: everything the Kanban board needs to render.
pub struct BoardQueryService<S> {
    store: Arc<S>,
}

impl<S> BoardQueryService<S>
where
    S: PipelineStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn positions(&self) -> Result<Vec<PositionSummaryView>, PipelineError> {
        let positions = self.store.positions()?;
        Ok(positions.iter().map(PositionSummaryView::from).collect())
    }

    pub fn interview_flow(
        &self,
        position_id: PositionId,
    ) -> Result<InterviewFlowResponse, PipelineError> {
        let snapshot = self.store.board_snapshot(position_id)?;
        Ok(interview_flow_response(&snapshot))
    }

    pub fn candidates(
        &self,
        position_id: PositionId,
    ) -> Result<Vec<CandidateBoardView>, PipelineError> {
        let snapshot = self.store.board_snapshot(position_id)?;
        Ok(candidate_views(&snapshot))
    }

    pub fn board(&self, position_id: PositionId) -> Result<BoardView, PipelineError> {
        let snapshot = self.store.board_snapshot(position_id)?;
        Ok(BoardView {
            flow: snapshot.steps.iter().map(InterviewStepView::from).collect(),
            applications: candidate_views(&snapshot),
        })
    }
}

fn interview_flow_response(snapshot: &BoardSnapshot) -> InterviewFlowResponse {
    InterviewFlowResponse {
        interview_flow: InterviewFlowEnvelope {
            position_name: snapshot.position.title.clone(),
            interview_flow: InterviewFlowView {
                id: snapshot.flow.id,
                description: snapshot.flow.description.clone(),
                interview_steps: snapshot.steps.iter().map(InterviewStepView::from).collect(),
            },
        },
    }
}

fn candidate_views(snapshot: &BoardSnapshot) -> Vec<CandidateBoardView> {
    snapshot
        .entries
        .iter()
        .map(|entry| CandidateBoardView {
            candidate_id: entry.candidate_id,
            application_id: entry.application_id,
            full_name: entry.full_name.clone(),
            current_interview_step: entry.step_name.clone(),
            application_date: entry.application_date,
        })
        .collect()
}
