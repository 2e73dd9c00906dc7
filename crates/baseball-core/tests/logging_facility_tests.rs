#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use baseball_core::baseball_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use baseball_core::errors::BaseballError;
use baseball_core::logging_facility::test_capture::init_test_capture;
use baseball_core::{log_op_end, log_op_error, log_op_start, Command, Store};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, park_id = "SEA03");

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .expect("end event");
    assert_eq!(end.field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = BaseballError::UnsupportedOperation {
        verb: "delete".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 1);

    let events = capture.events();
    let error = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event");
    assert_eq!(error.field("err.code"), Some("ERR_UNSUPPORTED_OPERATION"));
}

#[test]
fn test_execute_emits_one_start_and_one_end() {
    // GIVEN a store and a park id unique to this test
    let capture = init_test_capture();
    let mut store = Store::new();
    let entity = "park:LOGGING_UNIQUE_4";

    // WHEN a command executes successfully
    store
        .execute(Command::InsertPark {
            park_id: "LOGGING_UNIQUE_4".to_string(),
        })
        .unwrap();

    // THEN exactly one start and one end event carry that entity
    let of = |event: &'static str| {
        capture.count_events(|e| {
            e.field("entity") == Some(entity) && e.event.as_deref() == Some(event)
        })
    };
    assert_eq!(of(EVENT_START), 1);
    assert_eq!(of(EVENT_END), 1);
    assert_eq!(of(EVENT_END_ERROR), 0);

    capture.assert_event_exists("insert_park", EVENT_END);
}

#[test]
fn test_failed_execute_emits_error_event() {
    let capture = init_test_capture();
    let mut store = Store::new();

    let result = store.execute(Command::UpdateTeam {
        team_id: "LOGGING_UNIQUE_5".to_string(),
        league: None,
    });
    assert!(result.is_ok());

    let result = store.execute(Command::InsertGame {
        game: common::game(common::day(2021, 1, 1), "LOGGING_UNIQUE_6", "B"),
    });
    assert!(result.is_err());

    let errors: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_END_ERROR)
                && e.field("entity")
                    .is_some_and(|entity| entity.contains("LOGGING_UNIQUE_6"))
        })
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field("err.code"), Some("ERR_NOT_FOUND"));
}
