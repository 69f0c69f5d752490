use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::{ApplicationId, CandidateId, FlowId, InterviewStep, StepId};
use super::store::{AppliedMove, PipelineError, PipelineStore};

/// Membership rule shared by every store implementation: a move (or an
/// initial placement) may only target a step of the position's own flow.
/// Forward and backward targets are both acceptable; recalls and rejection
/// reversals are a supported part of the process.
pub(crate) fn resolve_target_step(
    steps: &[InterviewStep],
    flow: FlowId,
    target: StepId,
) -> Result<InterviewStep, PipelineError> {
    steps
        .iter()
        .find(|step| step.id == target)
        .cloned()
        .ok_or(PipelineError::InvalidTransition { target, flow })
}

/// Acknowledgment returned to callers after a successful move.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionReceipt {
    pub message: String,
    #[serde(skip)]
    pub applied: AppliedMove,
}

/// Write path of the pipeline: validates and applies a stage move through the
/// store's atomic `move_application` operation.
pub struct StageTransitionService<S> {
    store: Arc<S>,
}

impl<S> StageTransitionService<S>
where
    S: PipelineStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn move_application(
        &self,
        candidate_id: CandidateId,
        application_id: ApplicationId,
        target_step_id: StepId,
    ) -> Result<TransitionReceipt, PipelineError> {
        match self
            .store
            .move_application(candidate_id, application_id, target_step_id)
        {
            Ok(applied) => {
                info!(
                    application = application_id.0,
                    candidate = candidate_id.0,
                    from = applied.previous_step.0,
                    to = applied.step.id.0,
                    stage = %applied.step.name,
                    "application stage updated"
                );
                Ok(TransitionReceipt {
                    message: format!("Candidate moved to stage \"{}\"", applied.step.name),
                    applied,
                })
            }
            Err(err) => {
                warn!(
                    application = application_id.0,
                    candidate = candidate_id.0,
                    target = target_step_id.0,
                    error = %err,
                    "stage transition rejected"
                );
                Err(err)
            }
        }
    }
}
