//! Behaviour-driven development (BDD) tests for the roster assignment
//! workflow.
//!
//! These scenarios validate the lifecycle gate on mutations, per-target
//! settlement of bulk assignments, and page clamping in the roster view.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use engine::domain::{
    AssignmentService, BatchReport, Candidate, CandidatePoolService, Course, CourseCode, CourseId,
    Error, PoolFilter, RosterRole, RosterView, SelectionState, UserId,
};
use engine::test_support::clock::FixtureClock;
use engine::test_support::roster_backend::InMemoryRosterBackend;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Fixed "today" every scenario is evaluated against.
fn today_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 10, 0, 0).single().expect("valid instant")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn course_ending(end: Option<NaiveDate>) -> Course {
    Course::new(
        CourseId::new(Uuid::new_v4()),
        CourseCode::new("HIST204").expect("valid code"),
        "Early Modern History",
        date(2026, 1, 5),
        end,
    )
    .expect("valid course")
}

fn student(name: &str) -> Candidate {
    let local = name.to_lowercase().replace(' ', ".");
    Candidate::student(
        UserId::new(Uuid::new_v4()),
        name,
        format!("{local}@example.edu"),
        2024,
        "History",
    )
}

// -----------------------------------------------------------------------------
// Test World
// -----------------------------------------------------------------------------

/// Wrapper for non-Clone types to enable storage in `Slot`.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

/// Wrapper for the shared in-memory backend to enable storage in `Slot`.
#[derive(Clone)]
struct BackendHandle(Arc<InMemoryRosterBackend>);

/// Page position observed after a roster view navigation.
#[derive(Clone)]
struct PagePosition {
    page: usize,
    items: usize,
}

/// Test world holding the engine under test and observed outcomes.
#[derive(Default, ScenarioState)]
struct RosterWorkflowWorld {
    runtime: Slot<RuntimeHandle>,
    backend: Slot<BackendHandle>,
    course: Slot<Course>,
    candidates: Slot<Vec<Candidate>>,
    assignment_error: Slot<Error>,
    removal_succeeded: Slot<bool>,
    report: Slot<BatchReport>,
    page_position: Slot<PagePosition>,
}

impl RosterWorkflowWorld {
    fn setup_engine(&self, course: Course, candidates: Vec<Candidate>) {
        let runtime = Runtime::new().expect("create runtime");
        let backend = Arc::new(InMemoryRosterBackend::new());
        backend.seed_candidates(candidates.clone());

        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.backend.set(BackendHandle(backend));
        self.course.set(course);
        self.candidates.set(candidates);
    }

    fn execute_async<T>(
        &self,
        operation: impl FnOnce(&Runtime, &Arc<InMemoryRosterBackend>, &Course) -> T,
    ) -> T {
        let runtime_handle = self.runtime.get().expect("runtime");
        let backend_handle = self.backend.get().expect("backend");
        let course = self.course.get().expect("course");

        operation(&runtime_handle.0, &backend_handle.0, &course)
    }

    fn executor(
        backend: &Arc<InMemoryRosterBackend>,
    ) -> AssignmentService<InMemoryRosterBackend, InMemoryRosterBackend> {
        AssignmentService::new(
            backend.clone(),
            backend.clone(),
            Arc::new(FixtureClock::new(today_instant())),
        )
    }

    fn candidate_at(&self, index: usize) -> Candidate {
        self.candidates
            .get()
            .expect("candidates")
            .get(index)
            .expect("candidate index in range")
            .clone()
    }
}

#[fixture]
fn world() -> RosterWorkflowWorld {
    RosterWorkflowWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a course that ended yesterday with 5 assigned students")]
fn a_completed_course_with_assigned_students(world: &RosterWorkflowWorld) {
    let course = course_ending(Some(date(2026, 3, 14)));
    let mut candidates: Vec<Candidate> =
        (0..5).map(|i| student(&format!("Enrolled {i}"))).collect();
    candidates.push(student("New Comer"));

    world.setup_engine(course, candidates);
    world.execute_async(|_, backend, course| {
        let seeded = world.candidates.get().expect("candidates");
        for enrolled in seeded.iter().take(5) {
            backend.seed_assignment(course.id(), enrolled);
        }
    });
}

#[given("an active course and 3 selected students")]
fn an_active_course_and_selected_students(world: &RosterWorkflowWorld) {
    let course = course_ending(None);
    let candidates: Vec<Candidate> = (0..3).map(|i| student(&format!("Target {i}"))).collect();
    world.setup_engine(course, candidates);
}

#[given("the roster service rejects the second student")]
fn the_roster_service_rejects_the_second_student(world: &RosterWorkflowWorld) {
    let second = world.candidate_at(1);
    world.execute_async(|_, backend, _| {
        backend.reject_assignments_for(second.user_id(), "enrollment quota reached");
    });
}

#[given("an active course with 12 assigned students")]
fn an_active_course_with_a_full_roster(world: &RosterWorkflowWorld) {
    let course = course_ending(None);
    let candidates: Vec<Candidate> =
        (0..12).map(|i| student(&format!("Page Member {i}"))).collect();

    world.setup_engine(course, candidates);
    world.execute_async(|_, backend, course| {
        let seeded = world.candidates.get().expect("candidates");
        for member in &seeded {
            backend.seed_assignment(course.id(), member);
        }
    });
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("a new student is assigned and an enrolled student is removed")]
fn assign_a_newcomer_and_remove_an_enrollee(world: &RosterWorkflowWorld) {
    let newcomer = world.candidate_at(5);
    let departing = world.candidate_at(0);

    let (assignment, removal) = world.execute_async(|runtime, backend, course| {
        let service = RosterWorkflowWorld::executor(backend);
        runtime.block_on(async {
            let assignment = service
                .assign_one(course, newcomer.user_id(), RosterRole::Student)
                .await;
            let removal = service
                .remove_one(course, departing.user_id(), RosterRole::Student)
                .await;
            (assignment, removal)
        })
    });

    let error = assignment.expect_err("completed course refuses new assignments");
    world.assignment_error.set(error);
    world.removal_succeeded.set(removal.is_ok());
}

#[when("the selection is bulk-assigned")]
fn the_selection_is_bulk_assigned(world: &RosterWorkflowWorld) {
    let report = world.execute_async(|runtime, backend, course| {
        let pools = CandidatePoolService::new(backend.clone(), backend.clone());
        let service = RosterWorkflowWorld::executor(backend);
        runtime.block_on(async {
            let pool = pools
                .build_pool(course.id(), RosterRole::Student, &PoolFilter::default())
                .await
                .expect("pool built");
            let mut selection = SelectionState::new();
            selection.begin_bulk(&pool);
            service
                .assign_many(course, &selection.selected_ids(), RosterRole::Student)
                .await
        })
    });

    world.report.set(report);
}

#[when("page 5 of the roster is opened at a page size of 10")]
fn a_page_beyond_the_roster_is_opened(world: &RosterWorkflowWorld) {
    let position = world.execute_async(|runtime, backend, course| {
        let mut view = RosterView::new(backend.clone(), course.id(), RosterRole::Student, 10)
            .expect("valid page size");
        runtime.block_on(async {
            view.refresh().await.expect("refreshed");
        });
        view.go_to(5);
        PagePosition {
            page: view.current_page(),
            items: view.current().len(),
        }
    });

    world.page_position.set(position);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the new assignment is refused because the course has completed")]
fn the_assignment_is_refused(world: &RosterWorkflowWorld) {
    let error = world.assignment_error.get().expect("assignment outcome");
    let course = world.course.get().expect("course");

    assert_eq!(error, Error::course_completed(course.id()));
}

#[then("the removal succeeds")]
fn the_removal_succeeds(world: &RosterWorkflowWorld) {
    assert_eq!(world.removal_succeeded.get(), Some(true));
}

#[then("the report lists 2 successes and 1 failure")]
fn the_report_lists_the_settled_counts(world: &RosterWorkflowWorld) {
    let report = world.report.get().expect("batch report");

    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded_count(), 2);
    assert_eq!(report.failed_count(), 1);
}

#[then("the failure carries the rejection reason {reason}")]
fn the_failure_carries_the_rejection_reason(world: &RosterWorkflowWorld, reason: String) {
    let report = world.report.get().expect("batch report");
    let failure = report.failed().first().expect("one failure").clone();
    let second = world.candidate_at(1);
    let expected = reason.trim_matches('"');

    assert_eq!(failure.user_id, second.user_id());
    assert_eq!(failure.reason, Error::assignment_rejected(expected));
}

#[then("the view lands on page 2 with 2 items")]
fn the_view_lands_on_the_final_page(world: &RosterWorkflowWorld) {
    let position = world.page_position.get().expect("page position");

    assert_eq!(position.page, 2);
    assert_eq!(position.items, 2);
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/roster_workflow.feature",
    name = "A completed course refuses new assignments but allows removals"
)]
fn a_completed_course_refuses_new_assignments_but_allows_removals(world: RosterWorkflowWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roster_workflow.feature",
    name = "A bulk assignment reports each target separately"
)]
fn a_bulk_assignment_reports_each_target_separately(world: RosterWorkflowWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roster_workflow.feature",
    name = "Page requests beyond the roster clamp to the final page"
)]
fn page_requests_beyond_the_roster_clamp_to_the_final_page(world: RosterWorkflowWorld) {
    let _ = world;
}
