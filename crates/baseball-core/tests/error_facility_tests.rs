#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use baseball_core::errors::{BaseballError, EntityKind, ExError, ExErrorKind};
use baseball_core::factory::build_command;
use baseball_core::Command;
use common::{day, descriptor};

#[test]
fn test_error_kinds_have_stable_codes() {
    let cases = [
        (ExErrorKind::MissingArgument, "ERR_MISSING_ARGUMENT"),
        (ExErrorKind::InvalidFormat, "ERR_INVALID_FORMAT"),
        (ExErrorKind::UnrecognizedVerb, "ERR_UNRECOGNIZED_VERB"),
        (ExErrorKind::UnrecognizedCollection, "ERR_UNRECOGNIZED_COLLECTION"),
        (ExErrorKind::UnsupportedOperation, "ERR_UNSUPPORTED_OPERATION"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::Multiplicity, "ERR_MULTIPLICITY"),
        (ExErrorKind::Io, "ERR_IO"),
    ];
    for (kind, code) in cases {
        assert_eq!(kind.code(), code);
    }
}

#[test]
fn test_factory_errors_convert_with_context() {
    let err = build_command(&descriptor("insert", "team", &[("TeamId", "BOS")])).unwrap_err();
    assert_eq!(
        err,
        BaseballError::MissingArgument {
            command: "insert team".to_string(),
            key: "League".to_string(),
        }
    );

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::MissingArgument);
    assert_eq!(ex.op(), Some("insert team"));
    assert!(ex.message().contains("League"));
}

#[test]
fn test_format_error_names_key_and_value() {
    let err = build_command(&descriptor(
        "update",
        "game",
        &[
            ("Date", "2021-13-45"),
            ("HomeTeamId", "A"),
            ("VisitorTeamId", "B"),
            ("ParkId", "P1"),
        ],
    ))
    .unwrap_err();

    let ex: ExError = err.clone().into();
    assert_eq!(ex.code(), "ERR_INVALID_FORMAT");
    assert_eq!(ex.entity_id(), Some("Date"));
    assert!(err.to_string().contains("2021-13-45"));
}

#[test]
fn test_multiplicity_converts_with_matchup() {
    let err = BaseballError::Multiplicity {
        date: day(2021, 7, 4),
        home: "A".to_string(),
        visitor: "B".to_string(),
        matches: 2,
    };

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Multiplicity);
    assert_eq!(ex.entity_id(), Some("B@A"));
    assert!(ex.to_string().contains("found 2"));
}

#[test]
fn test_store_error_from_execution() {
    let mut store = common::seeded_store();
    let err = store
        .execute(Command::InsertGame {
            game: common::game(day(2021, 7, 4), "A", "MISSING"),
        })
        .unwrap_err();

    assert_eq!(
        err,
        BaseballError::ReferenceNotFound {
            kind: EntityKind::Team,
            id: "MISSING".to_string(),
        }
    );
    assert_eq!(ExError::from(err).code(), "ERR_NOT_FOUND");
}
