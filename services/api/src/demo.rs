use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;
use talent_track::error::AppError;
use talent_track::pipeline::{
    BoardQueryService, BoardView, Education, InMemoryPipelineStore, NewCandidate, NewPosition,
    PipelineStore, Resume, StageTransitionService, StepId, TypeId, WorkExperience,
};

#[derive(Args, Debug, Default)]
pub(crate) struct SeedArgs {
    /// Print every seeded position and application rather than just counts.
    #[arg(long)]
    pub(crate) verbose: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the stage-move portion of the demo.
    #[arg(long)]
    pub(crate) skip_move: bool,
}

#[derive(Debug, Default)]
pub(crate) struct SeedSummary {
    pub(crate) positions: usize,
    pub(crate) candidates: usize,
    pub(crate) applications: usize,
}

struct FlowSeed {
    description: &'static str,
    step_ids: [i64; 3],
    position_title: &'static str,
    location: &'static str,
    salary: (u32, u32),
}

const FLOW_SEEDS: [FlowSeed; 3] = [
    FlowSeed {
        description: "Standard development interview process",
        step_ids: [101, 102, 103],
        position_title: "Senior Full-Stack Engineer",
        location: "Remote",
        salary: (50_000, 80_000),
    },
    FlowSeed {
        description: "Data science interview process",
        step_ids: [201, 202, 203],
        position_title: "Data Scientist",
        location: "Hybrid",
        salary: (60_000, 90_000),
    },
    FlowSeed {
        description: "Product management interview process",
        step_ids: [301, 302, 303],
        position_title: "Product Manager",
        location: "On-site",
        salary: (70_000, 100_000),
    },
];

const STEP_NAMES: [&str; 3] = ["Applied", "Interview", "Offer"];

fn demo_candidate(first: &str, last: &str, email: &str, today: NaiveDate) -> NewCandidate {
    NewCandidate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: "5550001000".to_string(),
        address: "12 Harbor Street".to_string(),
        educations: vec![Education {
            institution: "Tech University".to_string(),
            title: "BS Computer Science".to_string(),
            start_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap_or(today),
            end_date: NaiveDate::from_ymd_opt(2019, 6, 1),
        }],
        work_experiences: vec![WorkExperience {
            company: "Tech Company".to_string(),
            position: "Software Engineer".to_string(),
            description: "Built web applications".to_string(),
            start_date: NaiveDate::from_ymd_opt(2019, 7, 1).unwrap_or(today),
            end_date: None,
        }],
        resumes: vec![Resume {
            file_path: format!("/resumes/{}_{}.pdf", first.to_lowercase(), last.to_lowercase()),
            file_type: "application/pdf".to_string(),
            upload_date: today,
        }],
    }
}

/// Populate a store with the demo hiring dataset: one company, three flows
/// with three stages each, one position per flow, and applications spread
/// across stages. Catalog rows go through the idempotent upserts; any failure
/// aborts the rest of the run.
pub(crate) fn seed_demo_data<S>(store: &S) -> Result<SeedSummary, AppError>
where
    S: PipelineStore,
{
    let today = Local::now().date_naive();
    let mut summary = SeedSummary::default();

    let company = store.upsert_company("Lighthouse Talent")?;

    let type_rows = [
        (1, "HR Interview", "Overall fit, stack, salary range and availability"),
        (2, "Technical Interview", "Assess technical skills"),
        (3, "Hiring Manager Interview", "Assess cultural fit and professional goals"),
    ];
    for (id, name, description) in type_rows {
        store.upsert_interview_type(TypeId(id), name, description)?;
    }

    for (flow_index, seed) in FLOW_SEEDS.iter().enumerate() {
        let flow = store.upsert_flow(seed.description)?;
        let mut steps = Vec::new();
        for (step_index, step_id) in seed.step_ids.iter().enumerate() {
            let step = store.upsert_step(
                StepId(*step_id),
                flow.id,
                TypeId((step_index + 1) as i64),
                STEP_NAMES[step_index],
                (step_index + 1) as u32,
            )?;
            steps.push(step);
        }

        let position = store.create_position(NewPosition {
            title: seed.position_title.to_string(),
            description: format!("{} opening", seed.position_title),
            status: "Open".to_string(),
            is_visible: true,
            location: seed.location.to_string(),
            job_description: format!("{} role", seed.position_title),
            company_id: company.id,
            interview_flow_id: flow.id,
            salary_min: Some(seed.salary.0),
            salary_max: Some(seed.salary.1),
            employment_type: "Full-time".to_string(),
            benefits: "Health insurance, paid time off".to_string(),
            contact_info: "hiring@lighthouse.example".to_string(),
            requirements: "Relevant professional experience".to_string(),
            responsibilities: "Own delivery within the team".to_string(),
            company_description: "Lighthouse Talent is a hiring platform".to_string(),
            application_deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
        })?;
        summary.positions += 1;

        // Two applicants per position, landing on different stages so the
        // board has something in every column worth looking at.
        let applicants = [
            ("Avery", 0usize),
            ("Morgan", 1usize),
        ];
        for (first, stage_index) in applicants {
            let candidate = store.create_candidate(demo_candidate(
                first,
                seed.position_title.split(' ').next().unwrap_or("Candidate"),
                &format!(
                    "{}.{}@example.com",
                    first.to_lowercase(),
                    flow_index * 2 + stage_index
                ),
                today,
            ))?;
            summary.candidates += 1;

            store.create_application(position.id, candidate.id, today, steps[stage_index].id)?;
            summary.applications += 1;
        }
    }

    Ok(summary)
}

pub(crate) fn run_seed(args: SeedArgs) -> Result<(), AppError> {
    let store = InMemoryPipelineStore::new();
    let summary = seed_demo_data(&store)?;

    println!(
        "Seeded {} positions, {} candidates, {} applications",
        summary.positions, summary.candidates, summary.applications
    );

    if args.verbose {
        let board = BoardQueryService::new(Arc::new(store));
        for position in board.positions()? {
            println!("- [{}] {} ({})", position.id.0, position.title, position.status);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryPipelineStore::new());
    seed_demo_data(&*store)?;

    let board = BoardQueryService::new(store.clone());
    let transitions = StageTransitionService::new(store.clone());

    println!("Interview pipeline demo");
    let positions = board.positions()?;
    for position in &positions {
        println!("- [{}] {} ({})", position.id.0, position.title, position.location);
    }

    let first = match positions.first() {
        Some(position) => position,
        None => {
            println!("No positions seeded; nothing to show");
            return Ok(());
        }
    };

    println!("\nBoard for '{}'", first.title);
    render_board(&board.board(first.id)?);

    if args.skip_move {
        return Ok(());
    }

    // Walk the first applicant one stage forward and show the refreshed board.
    let snapshot = store.board_snapshot(first.id)?;
    let (entry, next_step) = match snapshot.entries.first().and_then(|entry| {
        snapshot
            .steps
            .iter()
            .position(|step| step.id == entry.step_id)
            .and_then(|index| snapshot.steps.get(index + 1))
            .map(|step| (entry, step))
    }) {
        Some(found) => found,
        None => {
            println!("\nFirst applicant already sits at the final stage; no move to demo");
            return Ok(());
        }
    };

    let receipt = transitions.move_application(entry.candidate_id, entry.application_id, next_step.id)?;
    println!("\n{} -> {}", entry.full_name, next_step.name);
    println!("Server says: {}", receipt.message);

    println!("\nBoard for '{}' after the move", first.title);
    render_board(&board.board(first.id)?);

    Ok(())
}

fn render_board(view: &BoardView) {
    for step in &view.flow {
        println!("  {}:", step.name);
        let column: Vec<&str> = view
            .applications
            .iter()
            .filter(|application| application.current_interview_step == step.name)
            .map(|application| application.full_name.as_str())
            .collect();
        if column.is_empty() {
            println!("    (empty)");
        } else {
            for name in column {
                println!("    {name}");
            }
        }
    }
}
