//! Integration tests for the enrollment workflow.
//!
//! These tests verify the end-to-end flow with in-memory adapters:
//! 1. Create handler validates citizen/school, issues a protocol, persists
//!    the pending enrollment, and publishes an event
//! 2. Transition handler plans the transition, debits the seat atomically,
//!    persists under the optimistic lock, and publishes an event
//! 3. The notification relay turns published events into inbox messages

use std::sync::Arc;

use central_cidadao::adapters::events::{InMemoryEventBus, NotificationRelay};
use central_cidadao::adapters::memory::{
    InMemoryCitizenDirectory, InMemoryEnrollmentStore, InMemorySchoolStore,
};
use central_cidadao::adapters::notification::RecordingNotifier;
use central_cidadao::adapters::protocol::SequenceProtocolIssuer;
use central_cidadao::application::handlers::enrollment::{
    CreateEnrollmentCommand, CreateEnrollmentHandler, GetEnrollmentHandler,
    TransitionEnrollmentCommand, TransitionEnrollmentHandler,
};
use central_cidadao::application::handlers::school::GetSeatAvailabilityHandler;
use central_cidadao::domain::enrollment::EnrollmentStatus;
use central_cidadao::domain::foundation::{
    CitizenId, EducationLevel, ErrorCode, SchoolId,
};
use central_cidadao::domain::school::{School, SeatStatus};
use central_cidadao::ports::NotificationKind;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    citizens: Arc<InMemoryCitizenDirectory>,
    schools: Arc<InMemorySchoolStore>,
    enrollments: Arc<InMemoryEnrollmentStore>,
    events: Arc<InMemoryEventBus>,
    notifier: Arc<RecordingNotifier>,
    create: CreateEnrollmentHandler,
    transition: TransitionEnrollmentHandler,
}

impl TestApp {
    fn new() -> Self {
        tracing_subscriber::fmt()
            .with_env_filter("central_cidadao=debug")
            .with_test_writer()
            .try_init()
            .ok();

        let citizens = Arc::new(InMemoryCitizenDirectory::new());
        let schools = Arc::new(InMemorySchoolStore::new());
        let enrollments = Arc::new(InMemoryEnrollmentStore::new());
        let events = Arc::new(InMemoryEventBus::new());
        let notifier = Arc::new(RecordingNotifier::new());

        NotificationRelay::attach(notifier.clone(), events.as_ref());

        let create = CreateEnrollmentHandler::new(
            citizens.clone(),
            schools.clone(),
            enrollments.clone(),
            Arc::new(SequenceProtocolIssuer::new()),
            events.clone(),
        );
        let transition = TransitionEnrollmentHandler::new(
            enrollments.clone(),
            schools.clone(),
            events.clone(),
        );

        Self {
            citizens,
            schools,
            enrollments,
            events,
            notifier,
            create,
            transition,
        }
    }

    fn seed_school(&self, name: &str, total: u32, occupied: u32) -> SchoolId {
        let mut school = School::new(
            SchoolId::new(),
            name.to_string(),
            EducationLevel::FundamentalI,
            total,
        )
        .unwrap();
        for _ in 0..occupied {
            school.debit_seat().unwrap();
        }
        let id = *school.id();
        self.schools.insert(school);
        id
    }

    fn command(&self, citizen_id: CitizenId, school_id: SchoolId, student: &str) -> CreateEnrollmentCommand {
        CreateEnrollmentCommand {
            citizen_id,
            school_id,
            student_name: student.to_string(),
            birth_date: None,
            education_level: EducationLevel::FundamentalI,
            grade: Some("1º ano".to_string()),
            notes: None,
        }
    }
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[tokio::test]
async fn enrollment_lifecycle_fills_the_last_seat() {
    let app = TestApp::new();
    let citizen = app.citizens.register("Maria Silva");
    let school = app.seed_school("EMEF Monteiro Lobato", 5, 4);

    // create: pending, MAT protocol, success notification
    let enrollment = app
        .create
        .handle(app.command(citizen, school, "Ana Souza"))
        .await
        .unwrap();
    assert_eq!(enrollment.status(), EnrollmentStatus::Pending);
    assert!(enrollment.protocol().as_str().starts_with("MAT"));

    // approval: seat consumed, school now full
    let approved = app
        .transition
        .handle(TransitionEnrollmentCommand {
            enrollment_id: *enrollment.id(),
            requested_status: EnrollmentStatus::Approved,
        })
        .await
        .unwrap();
    assert_eq!(approved.status(), EnrollmentStatus::Approved);
    assert!(approved.seat_debited());

    let availability = GetSeatAvailabilityHandler::new(app.schools.clone())
        .handle(&school)
        .await
        .unwrap();
    assert_eq!(availability.occupied_seats, 5);
    assert_eq!(availability.available_seats, 0);
    assert_eq!(availability.status, SeatStatus::Full);

    // a further create against the full school is gated
    let other = app.citizens.register("João Santos");
    let err = app
        .create
        .handle(app.command(other, school, "Pedro Santos"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SeatsExhausted);
    assert_eq!(app.enrollments.count(), 1);

    // one notification per successful operation, with the right kinds
    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].kind, NotificationKind::Success);
    assert!(sent[0].body.contains(enrollment.protocol().as_str()));
    assert_eq!(sent[1].kind, NotificationKind::Info);
    assert!(sent[1].body.contains("Approved"));
}

#[tokio::test]
async fn lookup_by_protocol_round_trips() {
    let app = TestApp::new();
    let citizen = app.citizens.register("Maria Silva");
    let school = app.seed_school("EMEF Monteiro Lobato", 3, 0);

    let enrollment = app
        .create
        .handle(app.command(citizen, school, "Ana Souza"))
        .await
        .unwrap();

    let get = GetEnrollmentHandler::new(app.enrollments.clone(), app.enrollments.clone());
    let found = get.by_protocol(enrollment.protocol()).await.unwrap();
    assert_eq!(found.id(), enrollment.id());
}

// =============================================================================
// Seat accounting under retries and downgrades
// =============================================================================

#[tokio::test]
async fn double_approval_consumes_exactly_one_seat() {
    let app = TestApp::new();
    let citizen = app.citizens.register("Maria Silva");
    let school = app.seed_school("EMEF Monteiro Lobato", 5, 0);

    let enrollment = app
        .create
        .handle(app.command(citizen, school, "Ana Souza"))
        .await
        .unwrap();

    for _ in 0..2 {
        app.transition
            .handle(TransitionEnrollmentCommand {
                enrollment_id: *enrollment.id(),
                requested_status: EnrollmentStatus::Approved,
            })
            .await
            .unwrap();
    }

    assert_eq!(app.schools.get(&school).unwrap().occupied_seats(), 1);
}

#[tokio::test]
async fn cancellation_after_approval_keeps_the_seat_occupied() {
    let app = TestApp::new();
    let citizen = app.citizens.register("Maria Silva");
    let school = app.seed_school("EMEF Monteiro Lobato", 5, 0);

    let enrollment = app
        .create
        .handle(app.command(citizen, school, "Ana Souza"))
        .await
        .unwrap();

    app.transition
        .handle(TransitionEnrollmentCommand {
            enrollment_id: *enrollment.id(),
            requested_status: EnrollmentStatus::Approved,
        })
        .await
        .unwrap();
    app.transition
        .handle(TransitionEnrollmentCommand {
            enrollment_id: *enrollment.id(),
            requested_status: EnrollmentStatus::Cancelled,
        })
        .await
        .unwrap();

    // capacity reclamation is intentionally not implemented
    assert_eq!(app.schools.get(&school).unwrap().occupied_seats(), 1);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn two_concurrent_approvals_admit_exactly_one_student() {
    let app = TestApp::new();
    let school = app.seed_school("EMEF Monteiro Lobato", 1, 0);

    let citizen_a = app.citizens.register("Maria Silva");
    let citizen_b = app.citizens.register("João Santos");
    let first = app
        .create
        .handle(app.command(citizen_a, school, "Ana Souza"))
        .await
        .unwrap();
    let second = app
        .create
        .handle(app.command(citizen_b, school, "Pedro Santos"))
        .await
        .unwrap();

    let app = Arc::new(app);
    let tasks = [*first.id(), *second.id()].map(|enrollment_id| {
        let app = app.clone();
        tokio::spawn(async move {
            app.transition
                .handle(TransitionEnrollmentCommand {
                    enrollment_id,
                    requested_status: EnrollmentStatus::Approved,
                })
                .await
        })
    });

    let mut successes = 0;
    let mut exhausted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(enrollment) => {
                assert_eq!(enrollment.status(), EnrollmentStatus::Approved);
                successes += 1;
            }
            Err(e) if e.code() == ErrorCode::SeatsExhausted => exhausted += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(exhausted, 1);
    assert_eq!(app.schools.get(&school).unwrap().occupied_seats(), 1);
}

// =============================================================================
// Event flow
// =============================================================================

#[tokio::test]
async fn every_successful_operation_publishes_one_event() {
    let app = TestApp::new();
    let citizen = app.citizens.register("Maria Silva");
    let school = app.seed_school("EMEF Monteiro Lobato", 5, 0);

    let enrollment = app
        .create
        .handle(app.command(citizen, school, "Ana Souza"))
        .await
        .unwrap();
    app.transition
        .handle(TransitionEnrollmentCommand {
            enrollment_id: *enrollment.id(),
            requested_status: EnrollmentStatus::UnderReview,
        })
        .await
        .unwrap();

    assert_eq!(app.events.events_of_type("enrollment.created.v1").len(), 1);
    assert_eq!(
        app.events
            .events_of_type("enrollment.status_changed.v1")
            .len(),
        1
    );
}
