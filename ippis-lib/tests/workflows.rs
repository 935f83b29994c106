//! Screen workflows: actions, submissions and reloads.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ippis_lib::error::SubmitError;
use ippis_lib::model::{Record, RecordId};
use ippis_lib::registration::{RegistrationRequest, RegistrationService, RegistrationStatus};
use ippis_lib::screens::Screen;
use ippis_lib::source::{MemoryStore, RowSource};
use ippis_lib::submit::{RequestTracker, SimulatedSubmitter, Submitter};
use ippis_lib::table::{Action, Callbacks, Change, TableEngine};

fn store() -> MemoryStore<Record> {
    MemoryStore::with_rows(vec![
        Record::new("AST-001").set("name", "Dell Latitude 5420").set("category", "Computers"),
        Record::new("AST-002").set("name", "Office Chair").set("category", "Furniture"),
        Record::new("AST-003").set("name", "Toyota Hilux").set("category", "Vehicles"),
    ])
}

#[test]
fn test_delete_action_removes_row_and_reloads() {
    let store = store();
    let engine: TableEngine<Record> =
        TableEngine::from_source(&store, Screen::Assets.columns(), Screen::Assets.filters());

    let handler_store = store.clone();
    let handler_engine = engine.clone();
    engine.set_actions(Callbacks::new().handle_delete(move |id: &RecordId| {
        if handler_store.remove(id).is_some() {
            handler_engine.reload(&handler_store);
        }
    }));

    engine.set_search_term("chair");
    assert!(engine.delete(RecordId::from("AST-002")));

    assert_eq!(engine.total_count(), 2);
    assert!(engine.search_term().is_empty());
    assert_eq!(store.version(), 1);
}

#[test]
fn test_actions_receive_ids_not_rows() {
    let engine: TableEngine<Record> =
        TableEngine::from_source(&store(), Screen::Assets.columns(), Screen::Assets.filters());

    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let edit_sink = log.clone();
    engine.set_actions(
        Callbacks::new()
            .handle_add(move || sink.lock().unwrap().push("add".to_string()))
            .handle_edit(move |id: &RecordId| edit_sink.lock().unwrap().push(format!("edit {}", id))),
    );

    assert!(engine.dispatch(Action::Add));
    assert!(engine.dispatch(Action::Edit(RecordId::from("AST-003"))));
    assert_eq!(*log.lock().unwrap(), vec!["add", "edit AST-003"]);
}

#[test]
fn test_reload_notifies_subscribers() {
    let store = store();
    let engine: TableEngine<Record> =
        TableEngine::from_source(&store, Screen::Assets.columns(), Screen::Assets.filters());

    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    engine.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    store
        .insert(Record::new("AST-004").set("name", "HP LaserJet Pro"))
        .unwrap();
    engine.reload(&store);

    assert_eq!(*changes.lock().unwrap(), vec![Change::Rows]);
    assert_eq!(engine.total_count(), 4);
}

#[tokio::test]
async fn test_add_form_submits_into_store() {
    let store = store();
    let engine: TableEngine<Record> =
        TableEngine::from_source(&store, Screen::Assets.columns(), Screen::Assets.filters());
    let version = store.version();

    let id = store
        .submit(Record::new("AST-010").set("name", "Cisco Catalyst 2960"))
        .await
        .unwrap();
    assert_eq!(id, RecordId::from("AST-010"));
    assert!(store.version() > version);

    engine.reload(&store);
    engine.set_search_term("cisco");
    assert_eq!(engine.filtered_count(), 1);
}

#[tokio::test]
async fn test_stale_submission_is_ignored() {
    let backend = Arc::new(SimulatedSubmitter::new().with_latency(Duration::from_millis(50)));
    let tracker = RequestTracker::new();

    let first = tracker.begin();
    let slow = {
        let backend = backend.clone();
        tokio::spawn(async move { backend.submit("first draft").await })
    };

    // The form was closed and reopened before the first answer came back.
    let second = tracker.begin();
    let latest = backend.submit("second draft").await;

    let stale = slow.await.unwrap();
    assert!(tracker.finish(first, stale).is_none());
    assert!(matches!(tracker.finish(second, latest), Some(Ok(_))));
    assert!(!tracker.is_pending());
}

#[tokio::test]
async fn test_failed_submission_surfaces_error() {
    let backend = SimulatedSubmitter::new()
        .with_latency(Duration::from_millis(1))
        .failing(SubmitError::Rejected("asset register is locked".into()));
    let tracker = RequestTracker::new();

    let result = tracker.run(backend.submit(Record::new(1))).await;
    assert_eq!(
        result,
        Some(Err(SubmitError::Rejected("asset register is locked".into())))
    );
}

#[tokio::test]
async fn test_registration_through_submitter() {
    let service = RegistrationService::new();
    let request = RegistrationRequest {
        full_name: "Ngozi Umeh".into(),
        email: "ngozi@fmoh.gov.ng".into(),
        ippis_number: "554120".into(),
        ministry: "Health".into(),
        role: "Pharmacist".into(),
    };

    let id = service.submit(request.clone()).await.unwrap();
    let duplicate = service.submit(request).await.unwrap_err();
    assert!(matches!(duplicate, SubmitError::Conflict(_)));

    let invalid = service
        .submit(RegistrationRequest::default())
        .await
        .unwrap_err();
    assert_eq!(invalid.field_errors().len(), 5);

    service.approve(id).unwrap();
    let rows = RowSource::list(&service);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, RegistrationStatus::Approved);
}
