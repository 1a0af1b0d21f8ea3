//! Worker persistence tests against an embedded `PostgreSQL` server.

use rstest::rstest;
use taskboard::domain::{PersistedWorkerData, Worker, WorkerId};
use taskboard::ports::{RepositoryError, WorkerRepository};

use crate::postgres::helpers::{RepoContext, new_worker, repo_context};

#[rstest]
fn inserted_workers_round_trip(repo_context: Option<RepoContext>) {
    let Some(context) = repo_context else {
        return;
    };

    let created = context
        .rt
        .block_on(context.workers.insert(new_worker("john@test.com")))
        .expect("insert should succeed");
    assert_eq!(created.email(), "john@test.com");
    assert_eq!(created.first_name(), Some("Test"));
    assert_eq!(created.last_name(), Some("Worker"));

    let fetched = context
        .rt
        .block_on(context.workers.find_by_id(created.id()))
        .expect("lookup should succeed")
        .expect("worker should exist");
    assert_eq!(fetched.id(), created.id());
    assert_eq!(fetched.email(), "john@test.com");

    context.finish();
}

#[rstest]
fn duplicate_emails_are_rejected(repo_context: Option<RepoContext>) {
    let Some(context) = repo_context else {
        return;
    };

    context
        .rt
        .block_on(context.workers.insert(new_worker("john@test.com")))
        .expect("first insert should succeed");
    let result = context.rt.block_on(context.workers.insert(new_worker("john@test.com")));

    assert!(
        matches!(result, Err(RepositoryError::DuplicateWorkerEmail(email)) if email == "john@test.com"),
        "duplicate worker emails must surface as a uniqueness error",
    );

    context.finish();
}

#[rstest]
fn missing_workers_read_as_none(repo_context: Option<RepoContext>) {
    let Some(context) = repo_context else {
        return;
    };

    let absent = context
        .rt
        .block_on(context.workers.find_by_id(WorkerId::new(999)))
        .expect("lookup should succeed");
    assert!(absent.is_none());

    context.finish();
}

#[rstest]
fn saving_updates_the_contact_fields(repo_context: Option<RepoContext>) {
    let Some(context) = repo_context else {
        return;
    };

    let mut stored = context
        .rt
        .block_on(context.workers.insert(new_worker("john@test.com")))
        .expect("insert should succeed");
    stored.apply_update("john@new.test".to_owned(), Some("Johnny".to_owned()), None);

    let saved = context
        .rt
        .block_on(context.workers.save(&stored))
        .expect("save should succeed");
    assert_eq!(saved.email(), "john@new.test");
    assert_eq!(saved.first_name(), Some("Johnny"));
    assert!(saved.last_name().is_none());

    let refetched = context
        .rt
        .block_on(context.workers.find_by_id(stored.id()))
        .expect("lookup should succeed")
        .expect("worker should exist");
    assert_eq!(refetched.email(), "john@new.test");

    context.finish();
}

#[rstest]
fn saving_to_a_taken_email_is_rejected(repo_context: Option<RepoContext>) {
    let Some(context) = repo_context else {
        return;
    };

    context
        .rt
        .block_on(context.workers.insert(new_worker("first@test.com")))
        .expect("first insert should succeed");
    let mut second = context
        .rt
        .block_on(context.workers.insert(new_worker("second@test.com")))
        .expect("second insert should succeed");
    second.apply_update("first@test.com".to_owned(), None, None);

    let result = context.rt.block_on(context.workers.save(&second));

    assert!(
        matches!(result, Err(RepositoryError::DuplicateWorkerEmail(email)) if email == "first@test.com")
    );

    context.finish();
}

#[rstest]
fn saving_an_unknown_worker_reports_not_found(repo_context: Option<RepoContext>) {
    let Some(context) = repo_context else {
        return;
    };

    let ghost = Worker::from_persisted(PersistedWorkerData {
        id: WorkerId::new(999),
        email: "ghost@test.com".to_owned(),
        first_name: None,
        last_name: None,
    });
    let result = context.rt.block_on(context.workers.save(&ghost));

    assert!(matches!(result, Err(RepositoryError::WorkerNotFound(id)) if id == WorkerId::new(999)));

    context.finish();
}
