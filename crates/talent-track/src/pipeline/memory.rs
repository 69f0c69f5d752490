use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use super::domain::{
    Application, ApplicationId, Candidate, CandidateId, Company, CompanyId, FlowId, InterviewFlow,
    InterviewStep, InterviewType, NewCandidate, NewPosition, Position, PositionId, StepId, TypeId,
};
use super::store::{AppliedMove, BoardEntry, BoardSnapshot, PipelineError, PipelineStore};
use super::transition::resolve_target_step;

/// Mutex-guarded reference store. One lock covers every table, so each trait
/// operation is a transaction: validation and write happen against the same
/// state, and board snapshots can never mix pre- and post-move data.
#[derive(Default)]
pub struct InMemoryPipelineStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    companies: BTreeMap<i64, Company>,
    interview_types: BTreeMap<i64, InterviewType>,
    flows: BTreeMap<i64, InterviewFlow>,
    steps: BTreeMap<i64, InterviewStep>,
    positions: BTreeMap<i64, Position>,
    candidates: BTreeMap<i64, Candidate>,
    applications: BTreeMap<i64, Application>,
    next_company_id: i64,
    next_flow_id: i64,
    next_position_id: i64,
    next_candidate_id: i64,
    next_application_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl Tables {
    fn sorted_flow_steps(&self, flow_id: FlowId) -> Vec<InterviewStep> {
        let mut steps: Vec<InterviewStep> = self
            .steps
            .values()
            .filter(|step| step.interview_flow_id == flow_id)
            .cloned()
            .collect();
        steps.sort_by_key(|step| step.order_index);
        steps
    }
}

impl InMemoryPipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, PipelineError> {
        self.inner
            .lock()
            .map_err(|_| PipelineError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl PipelineStore for InMemoryPipelineStore {
    fn upsert_company(&self, name: &str) -> Result<Company, PipelineError> {
        let mut tables = self.lock()?;
        if let Some(existing) = tables.companies.values().find(|c| c.name == name) {
            return Ok(existing.clone());
        }
        let company = Company {
            id: CompanyId(next_id(&mut tables.next_company_id)),
            name: name.to_string(),
        };
        tables.companies.insert(company.id.0, company.clone());
        Ok(company)
    }

    fn upsert_interview_type(
        &self,
        id: TypeId,
        name: &str,
        description: &str,
    ) -> Result<InterviewType, PipelineError> {
        let mut tables = self.lock()?;
        let interview_type = InterviewType {
            id,
            name: name.to_string(),
            description: description.to_string(),
        };
        tables.interview_types.insert(id.0, interview_type.clone());
        Ok(interview_type)
    }

    fn upsert_flow(&self, description: &str) -> Result<InterviewFlow, PipelineError> {
        let mut tables = self.lock()?;
        if let Some(existing) = tables.flows.values().find(|f| f.description == description) {
            return Ok(existing.clone());
        }
        let flow = InterviewFlow {
            id: FlowId(next_id(&mut tables.next_flow_id)),
            description: description.to_string(),
        };
        tables.flows.insert(flow.id.0, flow.clone());
        Ok(flow)
    }

    fn upsert_step(
        &self,
        id: StepId,
        flow_id: FlowId,
        type_id: TypeId,
        name: &str,
        order_index: u32,
    ) -> Result<InterviewStep, PipelineError> {
        let mut tables = self.lock()?;
        if !tables.flows.contains_key(&flow_id.0) {
            return Err(PipelineError::NotFound("interview flow"));
        }
        if !tables.interview_types.contains_key(&type_id.0) {
            return Err(PipelineError::NotFound("interview type"));
        }
        if order_index == 0 {
            return Err(PipelineError::Conflict(
                "step order index must start at 1".to_string(),
            ));
        }
        // A step id stays in the flow it was created under. Re-homing it would
        // strand every application currently pointing at it.
        if let Some(existing) = tables.steps.get(&id.0) {
            if existing.interview_flow_id != flow_id {
                return Err(PipelineError::Conflict(format!(
                    "step {} already belongs to interview flow {}",
                    id.0, existing.interview_flow_id.0
                )));
            }
        }
        let taken = tables.steps.values().any(|step| {
            step.interview_flow_id == flow_id && step.order_index == order_index && step.id != id
        });
        if taken {
            return Err(PipelineError::Conflict(format!(
                "order index {} already used in interview flow {}",
                order_index, flow_id.0
            )));
        }

        let step = InterviewStep {
            id,
            interview_flow_id: flow_id,
            interview_type_id: type_id,
            name: name.to_string(),
            order_index,
        };
        tables.steps.insert(id.0, step.clone());
        Ok(step)
    }

    fn flow_steps(&self, flow_id: FlowId) -> Result<Vec<InterviewStep>, PipelineError> {
        let tables = self.lock()?;
        if !tables.flows.contains_key(&flow_id.0) {
            return Err(PipelineError::NotFound("interview flow"));
        }
        Ok(tables.sorted_flow_steps(flow_id))
    }

    fn create_position(&self, position: NewPosition) -> Result<Position, PipelineError> {
        let mut tables = self.lock()?;
        if !tables.companies.contains_key(&position.company_id.0) {
            return Err(PipelineError::NotFound("company"));
        }
        if !tables.flows.contains_key(&position.interview_flow_id.0) {
            return Err(PipelineError::NotFound("interview flow"));
        }
        if tables.sorted_flow_steps(position.interview_flow_id).is_empty() {
            return Err(PipelineError::Conflict(format!(
                "interview flow {} has no steps",
                position.interview_flow_id.0
            )));
        }

        let stored = Position {
            id: PositionId(next_id(&mut tables.next_position_id)),
            title: position.title,
            description: position.description,
            status: position.status,
            is_visible: position.is_visible,
            location: position.location,
            job_description: position.job_description,
            company_id: position.company_id,
            interview_flow_id: position.interview_flow_id,
            salary_min: position.salary_min,
            salary_max: position.salary_max,
            employment_type: position.employment_type,
            benefits: position.benefits,
            contact_info: position.contact_info,
            requirements: position.requirements,
            responsibilities: position.responsibilities,
            company_description: position.company_description,
            application_deadline: position.application_deadline,
        };
        tables.positions.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, PipelineError> {
        let mut tables = self.lock()?;
        if tables.candidates.values().any(|c| c.email == candidate.email) {
            return Err(PipelineError::Conflict(format!(
                "candidate email '{}' already registered",
                candidate.email
            )));
        }

        let stored = Candidate {
            id: CandidateId(next_id(&mut tables.next_candidate_id)),
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email: candidate.email,
            phone: candidate.phone,
            address: candidate.address,
            educations: candidate.educations,
            work_experiences: candidate.work_experiences,
            resumes: candidate.resumes,
        };
        tables.candidates.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    fn create_application(
        &self,
        position_id: PositionId,
        candidate_id: CandidateId,
        application_date: NaiveDate,
        step_id: StepId,
    ) -> Result<Application, PipelineError> {
        let mut tables = self.lock()?;
        let flow_id = tables
            .positions
            .get(&position_id.0)
            .map(|position| position.interview_flow_id)
            .ok_or(PipelineError::NotFound("position"))?;
        if !tables.candidates.contains_key(&candidate_id.0) {
            return Err(PipelineError::NotFound("candidate"));
        }
        let duplicate = tables
            .applications
            .values()
            .any(|app| app.position_id == position_id && app.candidate_id == candidate_id);
        if duplicate {
            return Err(PipelineError::Conflict(format!(
                "candidate {} already applied to position {}",
                candidate_id.0, position_id.0
            )));
        }

        let steps = tables.sorted_flow_steps(flow_id);
        let initial = resolve_target_step(&steps, flow_id, step_id)?;

        let application = Application {
            id: ApplicationId(next_id(&mut tables.next_application_id)),
            position_id,
            candidate_id,
            application_date,
            current_interview_step: initial.id,
        };
        tables
            .applications
            .insert(application.id.0, application.clone());
        Ok(application)
    }

    fn positions(&self) -> Result<Vec<Position>, PipelineError> {
        let tables = self.lock()?;
        Ok(tables.positions.values().cloned().collect())
    }

    fn board_snapshot(&self, position_id: PositionId) -> Result<BoardSnapshot, PipelineError> {
        let tables = self.lock()?;
        let position = tables
            .positions
            .get(&position_id.0)
            .cloned()
            .ok_or(PipelineError::NotFound("position"))?;
        let flow = tables
            .flows
            .get(&position.interview_flow_id.0)
            .cloned()
            .ok_or(PipelineError::NotFound("interview flow"))?;
        let steps = tables.sorted_flow_steps(position.interview_flow_id);

        let mut entries = Vec::new();
        for application in tables
            .applications
            .values()
            .filter(|app| app.position_id == position_id)
        {
            let candidate = tables
                .candidates
                .get(&application.candidate_id.0)
                .ok_or(PipelineError::NotFound("candidate"))?;
            let step = steps
                .iter()
                .find(|step| step.id == application.current_interview_step)
                .ok_or(PipelineError::NotFound("interview step"))?;
            entries.push(BoardEntry {
                application_id: application.id,
                candidate_id: candidate.id,
                full_name: candidate.full_name(),
                application_date: application.application_date,
                step_id: step.id,
                step_name: step.name.clone(),
            });
        }
        entries.sort_by_key(|entry| (entry.application_date, entry.application_id));

        Ok(BoardSnapshot {
            position,
            flow,
            steps,
            entries,
        })
    }

    fn move_application(
        &self,
        candidate_id: CandidateId,
        application_id: ApplicationId,
        target_step_id: StepId,
    ) -> Result<AppliedMove, PipelineError> {
        let mut tables = self.lock()?;

        // Precondition 1: the application exists and belongs to the candidate.
        let application = tables
            .applications
            .get(&application_id.0)
            .filter(|app| app.candidate_id == candidate_id)
            .cloned()
            .ok_or(PipelineError::NotFound("application"))?;

        // Precondition 2: the target step is part of the position's own flow.
        let flow_id = tables
            .positions
            .get(&application.position_id.0)
            .map(|position| position.interview_flow_id)
            .ok_or(PipelineError::NotFound("position"))?;
        let steps = tables.sorted_flow_steps(flow_id);
        let step = resolve_target_step(&steps, flow_id, target_step_id)?;

        // Both checks passed while holding the lock, so the write cannot race
        // a concurrent mover on the same application.
        let stored = tables
            .applications
            .get_mut(&application_id.0)
            .ok_or(PipelineError::NotFound("application"))?;
        let previous_step = stored.current_interview_step;
        stored.current_interview_step = step.id;

        Ok(AppliedMove {
            application_id,
            candidate_id,
            previous_step,
            step,
        })
    }
}
