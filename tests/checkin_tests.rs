mod common;
use common::{at, form, memory_store};

use rcheckin::core::checkin::CheckinLogic;
use rcheckin::db::kv::KvBackend;
use rcheckin::db::store::RecordStore;
use rcheckin::errors::{AppError, AppResult};
use rcheckin::models::status::RecordStatus;
use uuid::Uuid;

/// Backend whose writes always fail, to exercise the persistence error path.
struct ReadOnlyKv;

impl KvBackend for ReadOnlyKv {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Other("disk is read-only".into()))
    }
}

#[test]
fn test_checkin_same_day_duplicate_then_next_day() {
    let mut store = memory_store();

    let first = CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 1, 9, 0),
    )
    .unwrap();
    assert_eq!(first.date_key, "2024-03-01");
    assert_eq!(first.time_label, "09:00");

    let err = CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 1, 10, 45),
    )
    .unwrap_err();
    match err {
        AppError::DuplicateToday(time) => assert_eq!(time, "09:00"),
        other => panic!("expected DuplicateToday, got {other:?}"),
    }

    CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 2, 9, 0),
    )
    .unwrap();

    let for_123 = store
        .list_records()
        .into_iter()
        .filter(|r| r.enrollment_id == "123")
        .count();
    assert_eq!(for_123, 2);
}

#[test]
fn test_checkin_disabled_gate_rejects_everything() {
    let mut store = memory_store();
    CheckinLogic::submit(
        &mut store,
        &form("Ana Lima", "1"),
        true,
        at(2024, 3, 1, 8, 0),
    )
    .unwrap();

    let inputs = [
        ("Bruno Costa", "2"),
        ("Bruno", "2"),
        ("Carla Dias", ""),
        ("Ana Lima", "1"),
    ];

    for (name, enrollment) in inputs {
        let err = CheckinLogic::submit(
            &mut store,
            &form(name, enrollment),
            false,
            at(2024, 3, 1, 9, 0),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CheckinDisabled), "{name}: {err:?}");
    }

    assert_eq!(store.list_records().len(), 1);
}

#[test]
fn test_checkin_rejects_single_word_names() {
    let mut store = memory_store();

    for name in ["", "   ", "João", "  João  ", "\tSilva\n"] {
        let err = CheckinLogic::submit(
            &mut store,
            &form(name, "123"),
            true,
            at(2024, 3, 1, 9, 0),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidName), "{name:?}: {err:?}");
    }

    assert!(store.list_records().is_empty());
}

#[test]
fn test_checkin_name_is_trimmed_but_inner_spacing_kept() {
    let mut store = memory_store();

    let rec = CheckinLogic::submit(
        &mut store,
        &form("  Maria \t das  Dores ", " 2023001 "),
        true,
        at(2024, 3, 1, 9, 0),
    )
    .unwrap();

    assert_eq!(rec.full_name, "Maria \t das  Dores");
    assert_eq!(rec.enrollment_id, "2023001");
}

#[test]
fn test_checkin_requires_enrollment_id() {
    let mut store = memory_store();

    for enrollment in ["", "   "] {
        let err = CheckinLogic::submit(
            &mut store,
            &form("João Silva", enrollment),
            true,
            at(2024, 3, 1, 9, 0),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MissingEnrollmentId));
    }

    assert!(store.list_records().is_empty());
}

#[test]
fn test_checkin_duplicate_ignores_surrounding_spaces() {
    let mut store = memory_store();
    CheckinLogic::submit(
        &mut store,
        &form("João Silva", " 123 "),
        true,
        at(2024, 3, 1, 9, 0),
    )
    .unwrap();

    let err = CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 1, 9, 5),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateToday(_)));
}

#[test]
fn test_checkin_different_students_same_day() {
    let mut store = memory_store();
    CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 1, 9, 0),
    )
    .unwrap();
    CheckinLogic::submit(
        &mut store,
        &form("Ana Lima", "124"),
        true,
        at(2024, 3, 1, 9, 1),
    )
    .unwrap();

    assert_eq!(store.list_records().len(), 2);
}

#[test]
fn test_checkin_record_fields() {
    let mut store = memory_store();
    let rec = CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 1, 21, 7),
    )
    .unwrap();

    assert!(Uuid::parse_str(&rec.id).is_ok());
    assert_eq!(rec.timestamp, at(2024, 3, 1, 21, 7));
    // the calendar day is the local one, not the UTC one (00:07 on March 2nd)
    assert_eq!(rec.date_key, "2024-03-01");
    assert_eq!(rec.time_label, "21:07");
    assert_eq!(rec.status, RecordStatus::Registered);
    assert_eq!(rec.client.ip, "10.0.0.7");
    assert_eq!(store.list_records(), vec![rec]);
}

#[test]
fn test_checkin_persistence_failure() {
    let mut store = RecordStore::new(ReadOnlyKv);

    let err = CheckinLogic::submit(
        &mut store,
        &form("João Silva", "123"),
        true,
        at(2024, 3, 1, 9, 0),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Persistence(_)));
    assert!(store.list_records().is_empty());
}
