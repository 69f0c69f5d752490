use super::common::*;
use crate::pipeline::board::BoardQueryService;
use crate::pipeline::domain::PositionId;
use crate::pipeline::store::{PipelineError, PipelineStore};
use crate::pipeline::transition::StageTransitionService;

#[test]
fn positions_listing_returns_catalog() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());

    let positions = board.positions().expect("listing succeeds");

    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].title, "Senior Full-Stack Engineer");
    assert_eq!(positions[1].title, "Product Manager");
}

#[test]
fn unknown_position_is_not_found() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());

    assert!(matches!(
        board.board(PositionId(404)),
        Err(PipelineError::NotFound(_))
    ));
    assert!(matches!(
        board.interview_flow(PositionId(404)),
        Err(PipelineError::NotFound(_))
    ));
    assert!(matches!(
        board.candidates(PositionId(404)),
        Err(PipelineError::NotFound(_))
    ));
}

#[test]
fn every_application_stage_name_appears_in_the_flow() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());

    let view = board.board(seeded.engineering.id).expect("board builds");

    let stage_names: Vec<&str> = view.flow.iter().map(|step| step.name.as_str()).collect();
    assert!(!view.applications.is_empty());
    for application in &view.applications {
        assert!(stage_names.contains(&application.current_interview_step.as_str()));
    }
}

#[test]
fn flow_view_is_ordered_by_order_index() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());

    let response = board
        .interview_flow(seeded.engineering.id)
        .expect("flow builds");
    let steps = response.interview_flow.interview_flow.interview_steps;

    assert!(steps
        .windows(2)
        .all(|pair| pair[0].order_index < pair[1].order_index));
    assert_eq!(
        response.interview_flow.position_name,
        "Senior Full-Stack Engineer"
    );
}

#[test]
fn candidates_are_sorted_by_application_date() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());

    let candidates = board
        .candidates(seeded.engineering.id)
        .expect("candidates build");

    assert_eq!(candidates.len(), 2);
    assert!(candidates
        .windows(2)
        .all(|pair| pair[0].application_date <= pair[1].application_date));
    assert_eq!(candidates[0].full_name, "Alice Reyes");
    assert_eq!(candidates[1].full_name, "Bob Nakamura");
}

#[test]
fn repeated_reads_are_stable_absent_writes() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());

    let first = board.candidates(seeded.engineering.id).expect("first read");
    let second = board
        .candidates(seeded.engineering.id)
        .expect("second read");

    let first_ids: Vec<_> = first.iter().map(|c| c.application_id).collect();
    let second_ids: Vec<_> = second.iter().map(|c| c.application_id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn board_read_after_write_shows_new_stage() {
    let seeded = seeded_pipeline();
    let board = BoardQueryService::new(seeded.store.clone());
    let transitions = StageTransitionService::new(seeded.store.clone());

    transitions
        .move_application(
            seeded.alice.id,
            seeded.alice_app.id,
            seeded.engineering_steps[1].id,
        )
        .expect("move succeeds");

    let candidates = board
        .candidates(seeded.engineering.id)
        .expect("candidates build");
    let alice = candidates
        .iter()
        .find(|c| c.candidate_id == seeded.alice.id)
        .expect("alice on board");
    assert_eq!(alice.current_interview_step, "Interview");
}

#[test]
fn snapshot_covers_only_the_requested_position() {
    let seeded = seeded_pipeline();

    let snapshot = seeded
        .store
        .board_snapshot(seeded.product.id)
        .expect("snapshot builds");

    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].candidate_id, seeded.carol.id);
    assert_eq!(snapshot.flow.description, "Product management interview process");
}
