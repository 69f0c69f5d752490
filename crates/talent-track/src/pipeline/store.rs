use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    Application, ApplicationId, Candidate, CandidateId, Company, FlowId, InterviewFlow,
    InterviewStep, InterviewType, NewCandidate, NewPosition, Position, PositionId, StepId, TypeId,
};

/// Failure taxonomy shared by every store operation.
///
/// The four kinds are deliberately distinguishable so callers (and the HTTP
/// layer) can tell a missing record from a rejected move, a uniqueness
/// violation, or an unavailable backend.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("step {} does not belong to interview flow {}", target.0, flow.0)]
    InvalidTransition { target: StepId, flow: FlowId },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PipelineError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::NotFound(_) => StatusCode::NOT_FOUND,
            PipelineError::InvalidTransition { .. } => StatusCode::BAD_REQUEST,
            PipelineError::Conflict(_) => StatusCode::CONFLICT,
            PipelineError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// One application on the board, joined with its candidate and resolved stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardEntry {
    pub application_id: ApplicationId,
    pub candidate_id: CandidateId,
    pub full_name: String,
    pub application_date: NaiveDate,
    pub step_id: StepId,
    pub step_name: String,
}

/// Everything the board read path needs, assembled from one consistent view
/// of the store: a torn read mixing an old stage with a new flow is impossible
/// because both halves come from the same lock scope.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub position: Position,
    pub flow: InterviewFlow,
    pub steps: Vec<InterviewStep>,
    pub entries: Vec<BoardEntry>,
}

/// Result of a validated, applied stage move.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    pub application_id: ApplicationId,
    pub candidate_id: CandidateId,
    pub previous_step: StepId,
    pub step: InterviewStep,
}

/// Storage abstraction for the whole pipeline: flow definitions, the position
/// catalog, the candidate registry, and the application ledger.
///
/// Implementations must make `move_application` atomic with respect to other
/// writers on the same application, and `board_snapshot` must observe either
/// the pre- or post-move state in full.
pub trait PipelineStore: Send + Sync {
    /// Find-or-create a company by its unique name. Safe to repeat.
    fn upsert_company(&self, name: &str) -> Result<Company, PipelineError>;

    /// Create-or-update an interview type under an explicit id. Safe to repeat.
    fn upsert_interview_type(
        &self,
        id: TypeId,
        name: &str,
        description: &str,
    ) -> Result<InterviewType, PipelineError>;

    /// Find-or-create a flow by its description. Safe to repeat.
    fn upsert_flow(&self, description: &str) -> Result<InterviewFlow, PipelineError>;

    /// Create-or-update a step under an explicit id. Rejects an `order_index`
    /// of zero or one already held by a different step of the same flow, and
    /// rejects moving an existing id into a different flow (applications may
    /// already reference it).
    fn upsert_step(
        &self,
        id: StepId,
        flow_id: FlowId,
        type_id: TypeId,
        name: &str,
        order_index: u32,
    ) -> Result<InterviewStep, PipelineError>;

    /// Steps of a flow, ascending by `order_index`.
    fn flow_steps(&self, flow_id: FlowId) -> Result<Vec<InterviewStep>, PipelineError>;

    /// Register a position. The referenced company and flow must exist and the
    /// flow must already have at least one step.
    fn create_position(&self, position: NewPosition) -> Result<Position, PipelineError>;

    /// Register a candidate with their attachments. Email is unique.
    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, PipelineError>;

    /// Open an application at a caller-supplied initial step, which must
    /// belong to the position's flow. One application per candidate per
    /// position.
    fn create_application(
        &self,
        position_id: PositionId,
        candidate_id: CandidateId,
        application_date: NaiveDate,
        step_id: StepId,
    ) -> Result<Application, PipelineError>;

    /// Catalog listing, ordered by id.
    fn positions(&self) -> Result<Vec<Position>, PipelineError>;

    /// Flow and applications for one position, read from a single consistent
    /// snapshot. Entries are sorted by application date, then application id.
    fn board_snapshot(&self, position_id: PositionId) -> Result<BoardSnapshot, PipelineError>;

    /// Validate and apply a stage move in one atomic operation. Preconditions,
    /// in order: the application exists and belongs to the candidate
    /// (NotFound), and the target step belongs to the flow of the
    /// application's position (InvalidTransition). Backward moves within the
    /// flow are allowed. A rejected move leaves the application untouched.
    fn move_application(
        &self,
        candidate_id: CandidateId,
        application_id: ApplicationId,
        target_step_id: StepId,
    ) -> Result<AppliedMove, PipelineError>;
}
