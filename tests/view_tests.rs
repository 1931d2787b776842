mod common;
use common::{at, memory_store, record};

use chrono::NaiveDate;
use rcheckin::core::auth::{Credentials, hash_password};
use rcheckin::core::review::ReviewPanel;
use rcheckin::core::view::{PeriodFilter, SortMode, ViewQuery, build_view};
use rcheckin::db::kv::MemoryKv;
use rcheckin::db::store::RecordStore;
use rcheckin::errors::AppError;
use rcheckin::export::ExportFormat;
use rcheckin::models::checkin_config::UpdatedBy;
use rcheckin::models::record::AttendanceRecord;

fn day(y: i32, m: u32, d: u32) -> PeriodFilter {
    PeriodFilter::Day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn sample() -> Vec<AttendanceRecord> {
    vec![
        record("Bruno Costa", "AB123", at(2024, 3, 1, 9, 10)),
        record("ana Lima", "2023002", at(2024, 3, 1, 8, 55)),
        record("Álvaro Souza", "2023003", at(2024, 3, 1, 9, 30)),
        record("Zeca Pinto", "2023004", at(2024, 3, 15, 10, 0)),
        record("Carla Dias", "2023005", at(2024, 4, 2, 9, 0)),
        record("Diego Alves", "2023006", at(2023, 12, 11, 9, 0)),
    ]
}

fn names(view: &[&AttendanceRecord]) -> Vec<String> {
    view.iter().map(|r| r.full_name.clone()).collect()
}

fn credentials() -> Credentials {
    Credentials::new("professor", &hash_password("2020"))
}

#[test]
fn test_parse_period_selectors() {
    assert_eq!(PeriodFilter::parse("2024-03-01").unwrap(), day(2024, 3, 1));
    assert_eq!(
        PeriodFilter::parse("2024-03").unwrap(),
        PeriodFilter::Month {
            year: 2024,
            month: 3
        }
    );
    assert_eq!(PeriodFilter::parse(" 2024 ").unwrap(), PeriodFilter::Year(2024));

    for bad in ["2024-13", "24", "march", "2024-02-30", ""] {
        assert!(
            matches!(PeriodFilter::parse(bad), Err(AppError::InvalidPeriod(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_day_filter() {
    let records = sample();
    let view = build_view(&records, &ViewQuery::new(day(2024, 3, 1)));
    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|r| r.date_key == "2024-03-01"));
}

#[test]
fn test_month_filter() {
    let records = sample();
    let view = build_view(&records, &ViewQuery::new(PeriodFilter::parse("2024-03").unwrap()));
    assert_eq!(view.len(), 4);
}

#[test]
fn test_year_filter() {
    let records = sample();
    assert_eq!(
        build_view(&records, &ViewQuery::new(PeriodFilter::Year(2024))).len(),
        5
    );
    assert_eq!(
        names(&build_view(&records, &ViewQuery::new(PeriodFilter::Year(2023)))),
        vec!["Diego Alves"]
    );
}

#[test]
fn test_search_name_is_case_insensitive() {
    let records = sample();
    let q = ViewQuery::new(PeriodFilter::Year(2024)).with_search(Some("LIMA"));
    assert_eq!(names(&build_view(&records, &q)), vec!["ana Lima"]);
}

#[test]
fn test_search_enrollment_substring_as_typed() {
    let records = sample();

    let q = ViewQuery::new(PeriodFilter::Year(2024)).with_search(Some("B12"));
    assert_eq!(names(&build_view(&records, &q)), vec!["Bruno Costa"]);

    // enrollment ids are matched as typed; "b12" is neither in a name nor an id
    let q = ViewQuery::new(PeriodFilter::Year(2024)).with_search(Some("b12"));
    assert!(build_view(&records, &q).is_empty());

    let q = ViewQuery::new(PeriodFilter::Year(2024)).with_search(Some("202300"));
    assert_eq!(build_view(&records, &q).len(), 4);
}

#[test]
fn test_empty_search_is_no_filter() {
    let records = sample();
    let q = ViewQuery::new(PeriodFilter::Year(2024)).with_search(Some(""));
    assert_eq!(q.search, None);
    assert_eq!(build_view(&records, &q).len(), 5);
}

#[test]
fn test_sort_name_ignores_accents_and_case() {
    let records = sample();
    let q = ViewQuery::new(day(2024, 3, 1)).with_sort(SortMode::NameAsc);
    assert_eq!(
        names(&build_view(&records, &q)),
        vec!["Álvaro Souza", "ana Lima", "Bruno Costa"]
    );
}

#[test]
fn test_sort_name_folds_decomposed_accents() {
    let records = vec![
        record("Eva Lima", "1", at(2024, 3, 1, 9, 0)),
        record("E\u{301}lio Souza", "2", at(2024, 3, 1, 9, 1)),
        record("Élio Costa", "3", at(2024, 3, 1, 9, 2)),
    ];
    let q = ViewQuery::new(day(2024, 3, 1)).with_sort(SortMode::NameAsc);

    assert_eq!(
        names(&build_view(&records, &q)),
        vec!["Élio Costa", "E\u{301}lio Souza", "Eva Lima"]
    );
}

#[test]
fn test_default_sort_is_most_recent_first() {
    let records = sample();
    let q = ViewQuery::new(PeriodFilter::Year(2024));
    assert_eq!(q.sort, SortMode::DateDesc);
    assert_eq!(
        names(&build_view(&records, &q)),
        vec![
            "Carla Dias",
            "Zeca Pinto",
            "Álvaro Souza",
            "Bruno Costa",
            "ana Lima"
        ]
    );
}

#[test]
fn test_date_desc_and_asc_are_reversed() {
    let records = sample();
    let base = ViewQuery::new(PeriodFilter::Year(2024));

    let desc = names(&build_view(&records, &base.clone().with_sort(SortMode::DateDesc)));
    let mut asc = names(&build_view(&records, &base.with_sort(SortMode::DateAsc)));
    asc.reverse();

    assert_eq!(desc, asc);
}

#[test]
fn test_view_is_deterministic_and_leaves_input_alone() {
    let records = sample();
    let snapshot = records.clone();
    let q = ViewQuery::new(PeriodFilter::Year(2024))
        .with_search(Some("a"))
        .with_sort(SortMode::NameAsc);

    let first: Vec<String> = build_view(&records, &q).iter().map(|r| r.id.clone()).collect();
    let second: Vec<String> = build_view(&records, &q).iter().map(|r| r.id.clone()).collect();

    assert_eq!(first, second);
    assert_eq!(records, snapshot);
}

fn seeded_store() -> RecordStore<MemoryKv> {
    let mut store = memory_store();
    for r in sample() {
        store.save_record(&r).unwrap();
    }
    store
}

#[test]
fn test_panel_rejects_bad_credentials() {
    let mut store = seeded_store();

    for (user, password) in [("professor", "2021"), ("aluno", "2020"), ("", "")] {
        let res = ReviewPanel::login(
            &mut store,
            &credentials(),
            user,
            password,
            ViewQuery::new(day(2024, 3, 1)),
        );
        assert!(matches!(res, Err(AppError::InvalidCredentials)));
    }
}

#[test]
fn test_panel_toggle_gate() {
    let mut store = seeded_store();
    {
        let mut panel = ReviewPanel::login(
            &mut store,
            &credentials(),
            "professor",
            "2020",
            ViewQuery::new(day(2024, 3, 1)),
        )
        .unwrap();

        assert!(panel.config().enabled);
        let cfg = panel.toggle_gate(false, at(2024, 3, 1, 7, 50)).unwrap();
        assert!(!cfg.enabled);
        assert_eq!(cfg.updated_by, UpdatedBy::Professor);
    }

    let cfg = store.get_config();
    assert!(!cfg.enabled);
    assert_eq!(cfg.updated_by, UpdatedBy::Professor);
    assert_eq!(cfg.updated_at, at(2024, 3, 1, 7, 50));
}

#[test]
fn test_panel_delete_needs_confirmation() {
    let mut store = seeded_store();
    let target = store.list_records()[1].clone();

    let mut panel = ReviewPanel::login(
        &mut store,
        &credentials(),
        "professor",
        "2020",
        ViewQuery::new(day(2024, 3, 1)),
    )
    .unwrap();

    let mut asked = String::new();
    let declined = panel
        .delete_record(&target.id, |name| {
            asked = name.to_string();
            false
        })
        .unwrap();
    assert_eq!(declined, None);
    assert_eq!(asked, "ana Lima");
    assert_eq!(panel.view().len(), 3);

    let removed = panel.delete_record(&target.id, |_| true).unwrap();
    assert_eq!(removed, Some(target.clone()));
    assert_eq!(panel.view().len(), 2);
    assert!(panel.records().iter().all(|r| r.id != target.id));

    let unknown = panel.delete_record("nope", |_| true).unwrap();
    assert_eq!(unknown, None);
    assert_eq!(panel.records().len(), 5);
}

#[test]
fn test_panel_query_change_recomputes_view() {
    let mut store = seeded_store();
    let mut panel = ReviewPanel::login(
        &mut store,
        &credentials(),
        "professor",
        "2020",
        ViewQuery::new(day(2024, 3, 1)),
    )
    .unwrap();

    assert_eq!(panel.view().len(), 3);

    panel.set_query(ViewQuery::new(PeriodFilter::Year(2023)));
    assert_eq!(names(&panel.view()), vec!["Diego Alves"]);

    panel.set_query(ViewQuery::new(day(2020, 1, 1)));
    assert!(panel.view().is_empty());
    assert_eq!(panel.export_current_view(ExportFormat::Csv).unwrap(), None);
}
