use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub i64);

/// Identifier wrapper for interview types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub i64);

/// Identifier wrapper for interview flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowId(pub i64);

/// Identifier wrapper for interview steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub i64);

/// Identifier wrapper for positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(pub i64);

/// Identifier wrapper for candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub i64);

/// Identifier wrapper for applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

/// Hiring organization. `name` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

/// Reference data describing a kind of interview, shared across flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewType {
    pub id: TypeId,
    pub name: String,
    pub description: String,
}

/// An ordered template of interview stages. `description` is the natural key
/// used by idempotent bootstrap runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewFlow {
    pub id: FlowId,
    pub description: String,
}

/// One ordered point in a flow. `order_index` starts at 1 and is unique within
/// the owning flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewStep {
    pub id: StepId,
    pub interview_flow_id: FlowId,
    pub interview_type_id: TypeId,
    pub name: String,
    pub order_index: u32,
}

/// A published opening, bound to exactly one company and one interview flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub is_visible: bool,
    pub location: String,
    pub job_description: String,
    pub company_id: CompanyId,
    pub interview_flow_id: FlowId,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub employment_type: String,
    pub benefits: String,
    pub contact_info: String,
    pub requirements: String,
    pub responsibilities: String,
    pub company_description: String,
    pub application_deadline: Option<NaiveDate>,
}

/// Attributes for a position before the catalog assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPosition {
    pub title: String,
    pub description: String,
    pub status: String,
    pub is_visible: bool,
    pub location: String,
    pub job_description: String,
    pub company_id: CompanyId,
    pub interview_flow_id: FlowId,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub employment_type: String,
    pub benefits: String,
    pub contact_info: String,
    pub requirements: String,
    pub responsibilities: String,
    pub company_description: String,
    pub application_deadline: Option<NaiveDate>,
}

/// Completed degree or program attached to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Prior employment attached to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// File metadata for an uploaded resume. The file itself lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub file_path: String,
    pub file_type: String,
    pub upload_date: NaiveDate,
}

/// A person in the registry, with dependent records owned exclusively by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub educations: Vec<Education>,
    pub work_experiences: Vec<WorkExperience>,
    pub resumes: Vec<Resume>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Attributes for a candidate and their attachments before registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub educations: Vec<Education>,
    pub work_experiences: Vec<WorkExperience>,
    pub resumes: Vec<Resume>,
}

/// One candidate's progress through one position's flow.
///
/// `current_interview_step` always references a step of the flow attached to
/// the application's position; the store enforces this at creation and on
/// every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub position_id: PositionId,
    pub candidate_id: CandidateId,
    pub application_date: NaiveDate,
    pub current_interview_step: StepId,
}
