use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::pipeline::domain::{
    Application, ApplicationId, Candidate, CandidateId, Company, Education, FlowId, InterviewFlow,
    InterviewStep, InterviewType, NewCandidate, NewPosition, Position, PositionId, Resume, StepId,
    TypeId, WorkExperience,
};
use crate::pipeline::memory::InMemoryPipelineStore;
use crate::pipeline::router::pipeline_router;
use crate::pipeline::store::{
    AppliedMove, BoardSnapshot, PipelineError, PipelineStore,
};

/// A small but complete hiring universe: two positions on two different
/// flows, three candidates, and applications spread across stages.
pub(super) struct SeededPipeline {
    pub(super) store: Arc<InMemoryPipelineStore>,
    pub(super) engineering: Position,
    pub(super) engineering_steps: Vec<InterviewStep>,
    pub(super) product: Position,
    pub(super) product_steps: Vec<InterviewStep>,
    pub(super) alice: Candidate,
    pub(super) alice_app: Application,
    pub(super) bob: Candidate,
    pub(super) bob_app: Application,
    pub(super) carol: Candidate,
    pub(super) carol_app: Application,
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn new_candidate(first: &str, last: &str, email: &str) -> NewCandidate {
    NewCandidate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: "5550001000".to_string(),
        address: "12 Harbor Street".to_string(),
        educations: vec![Education {
            institution: "Tech University".to_string(),
            title: "BS Computer Science".to_string(),
            start_date: date(2015, 9, 1),
            end_date: Some(date(2019, 6, 1)),
        }],
        work_experiences: vec![WorkExperience {
            company: "Tech Company".to_string(),
            position: "Software Engineer".to_string(),
            description: "Built web applications".to_string(),
            start_date: date(2019, 7, 1),
            end_date: None,
        }],
        resumes: vec![Resume {
            file_path: format!("/resumes/{first}_{last}.pdf").to_lowercase(),
            file_type: "application/pdf".to_string(),
            upload_date: date(2025, 2, 20),
        }],
    }
}

pub(super) fn new_position(title: &str, company: &Company, flow: &InterviewFlow) -> NewPosition {
    NewPosition {
        title: title.to_string(),
        description: format!("{title} opening"),
        status: "Open".to_string(),
        is_visible: true,
        location: "Remote".to_string(),
        job_description: format!("{title} role"),
        company_id: company.id,
        interview_flow_id: flow.id,
        salary_min: Some(50_000),
        salary_max: Some(80_000),
        employment_type: "Full-time".to_string(),
        benefits: "Health insurance, paid time off".to_string(),
        contact_info: "hiring@lighthouse.example".to_string(),
        requirements: "3+ years of experience".to_string(),
        responsibilities: "Ship and maintain software".to_string(),
        company_description: "Talent platform".to_string(),
        application_deadline: Some(date(2025, 12, 31)),
    }
}

fn setup_flow(
    store: &InMemoryPipelineStore,
    description: &str,
    step_ids: [i64; 3],
    types: &[InterviewType],
) -> (InterviewFlow, Vec<InterviewStep>) {
    let flow = store.upsert_flow(description).expect("flow upserts");
    let names = ["Applied", "Interview", "Offer"];
    let mut steps = Vec::new();
    for (index, (id, name)) in step_ids.iter().zip(names).enumerate() {
        let step = store
            .upsert_step(
                StepId(*id),
                flow.id,
                types[index].id,
                name,
                (index + 1) as u32,
            )
            .expect("step upserts");
        steps.push(step);
    }
    (flow, steps)
}

pub(super) fn seeded_pipeline() -> SeededPipeline {
    let store = Arc::new(InMemoryPipelineStore::new());

    let company = store
        .upsert_company("Lighthouse Talent")
        .expect("company upserts");

    let types: Vec<InterviewType> = [
        (1, "HR Interview", "Overall fit and availability"),
        (2, "Technical Interview", "Technical skills"),
        (3, "Hiring Manager Interview", "Cultural fit and goals"),
    ]
    .into_iter()
    .map(|(id, name, description)| {
        store
            .upsert_interview_type(TypeId(id), name, description)
            .expect("type upserts")
    })
    .collect();

    let (engineering_flow, engineering_steps) = setup_flow(
        &store,
        "Standard development interview process",
        [101, 102, 103],
        &types,
    );
    let (product_flow, product_steps) = setup_flow(
        &store,
        "Product management interview process",
        [301, 302, 303],
        &types,
    );

    let engineering = store
        .create_position(new_position("Senior Full-Stack Engineer", &company, &engineering_flow))
        .expect("position created");
    let product = store
        .create_position(new_position("Product Manager", &company, &product_flow))
        .expect("position created");

    let alice = store
        .create_candidate(new_candidate("Alice", "Reyes", "alice.reyes@example.com"))
        .expect("candidate created");
    let bob = store
        .create_candidate(new_candidate("Bob", "Nakamura", "bob.nakamura@example.com"))
        .expect("candidate created");
    let carol = store
        .create_candidate(new_candidate("Carol", "Osei", "carol.osei@example.com"))
        .expect("candidate created");

    let alice_app = store
        .create_application(
            engineering.id,
            alice.id,
            date(2025, 3, 1),
            engineering_steps[0].id,
        )
        .expect("application created");
    let bob_app = store
        .create_application(
            engineering.id,
            bob.id,
            date(2025, 3, 2),
            engineering_steps[1].id,
        )
        .expect("application created");
    let carol_app = store
        .create_application(product.id, carol.id, date(2025, 3, 3), product_steps[0].id)
        .expect("application created");

    SeededPipeline {
        store,
        engineering,
        engineering_steps,
        product,
        product_steps,
        alice,
        alice_app,
        bob,
        bob_app,
        carol,
        carol_app,
    }
}

pub(super) fn seeded_router() -> (axum::Router, SeededPipeline) {
    let seeded = seeded_pipeline();
    let router = pipeline_router(seeded.store.clone());
    (router, seeded)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store double whose every operation fails, for exercising the
/// unavailable-backend mapping.
pub(super) struct UnavailableStore;

fn offline<T>() -> Result<T, PipelineError> {
    Err(PipelineError::Unavailable("database offline".to_string()))
}

impl PipelineStore for UnavailableStore {
    fn upsert_company(&self, _name: &str) -> Result<Company, PipelineError> {
        offline()
    }

    fn upsert_interview_type(
        &self,
        _id: TypeId,
        _name: &str,
        _description: &str,
    ) -> Result<InterviewType, PipelineError> {
        offline()
    }

    fn upsert_flow(&self, _description: &str) -> Result<InterviewFlow, PipelineError> {
        offline()
    }

    fn upsert_step(
        &self,
        _id: StepId,
        _flow_id: FlowId,
        _type_id: TypeId,
        _name: &str,
        _order_index: u32,
    ) -> Result<InterviewStep, PipelineError> {
        offline()
    }

    fn flow_steps(&self, _flow_id: FlowId) -> Result<Vec<InterviewStep>, PipelineError> {
        offline()
    }

    fn create_position(&self, _position: NewPosition) -> Result<Position, PipelineError> {
        offline()
    }

    fn create_candidate(&self, _candidate: NewCandidate) -> Result<Candidate, PipelineError> {
        offline()
    }

    fn create_application(
        &self,
        _position_id: PositionId,
        _candidate_id: CandidateId,
        _application_date: NaiveDate,
        _step_id: StepId,
    ) -> Result<Application, PipelineError> {
        offline()
    }

    fn positions(&self) -> Result<Vec<Position>, PipelineError> {
        offline()
    }

    fn board_snapshot(&self, _position_id: PositionId) -> Result<BoardSnapshot, PipelineError> {
        offline()
    }

    fn move_application(
        &self,
        _candidate_id: CandidateId,
        _application_id: ApplicationId,
        _target_step_id: StepId,
    ) -> Result<AppliedMove, PipelineError> {
        offline()
    }
}
