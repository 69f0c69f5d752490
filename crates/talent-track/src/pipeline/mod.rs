//! Interview pipeline: data model, store contract, board read path, and the
//! validated stage-transition write path.
//!
//! Flow definitions, the position catalog, and the candidate registry are
//! setup-time data; the only field that changes afterwards is an
//! application's current step, and only through [`StageTransitionService`].

pub mod board;
pub mod domain;
pub mod memory;
pub mod router;
pub mod store;
pub mod transition;

#[cfg(test)]
mod tests;

pub use board::{
    BoardQueryService, BoardView, CandidateBoardView, InterviewFlowEnvelope, InterviewFlowResponse,
    InterviewFlowView, InterviewStepView, PositionSummaryView,
};
pub use domain::{
    Application, ApplicationId, Candidate, CandidateId, Company, CompanyId, Education, FlowId,
    InterviewFlow, InterviewStep, InterviewType, NewCandidate, NewPosition, Position, PositionId,
    Resume, StepId, TypeId, WorkExperience,
};
pub use memory::InMemoryPipelineStore;
pub use router::{pipeline_router, MoveCandidateRequest, PipelineState};
pub use store::{AppliedMove, BoardEntry, BoardSnapshot, PipelineError, PipelineStore};
pub use transition::{StageTransitionService, TransitionReceipt};
