//! Guideline listing integration tests

mod common;

use common::init_test_db;
use icu_edu::app::{guideline_create, guideline_list, GuidelineCreateReq, GuidelineDto};
use icu_edu::infra::Db;

// ──────────────────────── Helper ────────────────────────

fn make_req(title: &str, category: &str, date: &str) -> GuidelineCreateReq {
    GuidelineCreateReq {
        title: title.to_string(),
        organization: Some("SCCM".to_string()),
        category: Some(category.to_string()),
        publish_date: Some(date.to_string()),
        content: Some("Guideline body".to_string()),
        file_path: Some(format!("/pdfs/{}.pdf", title.to_lowercase())),
    }
}

fn seed(db: &Db) {
    guideline_create(db, make_req("Sepsis", "Infection", "2021-10-04")).unwrap();
    guideline_create(db, make_req("Delirium", "Neurology", "2018-09-01")).unwrap();
    guideline_create(db, make_req("Fungal", "Infection", "2022-02-10")).unwrap();
    guideline_create(db, make_req("Lowercase", "infection", "2020-01-01")).unwrap();
}

fn titles(rows: &[GuidelineDto]) -> Vec<&str> {
    rows.iter().map(|g| g.title.as_str()).collect()
}

// ══════════════════════════════════════════════════════════
//  guideline_create
// ══════════════════════════════════════════════════════════

#[test]
fn create_returns_dto_with_assigned_id() {
    let db = init_test_db();
    let a = guideline_create(&db, make_req("Sepsis", "Infection", "2021-10-04")).unwrap();
    let b = guideline_create(&db, make_req("ARDS", "Respiratory", "2023-01-01")).unwrap();
    assert!(b.id > a.id);
    assert_eq!(a.organization, "SCCM");
    assert_eq!(a.category, "Infection");
}

#[test]
fn create_defaults_optional_fields() {
    let db = init_test_db();
    let dto = guideline_create(
        &db,
        GuidelineCreateReq {
            title: "Bare".to_string(),
            organization: None,
            category: None,
            publish_date: None,
            content: None,
            file_path: None,
        },
    )
    .unwrap();
    assert_eq!(dto.organization, "");
    assert_eq!(dto.category, "");
    assert_eq!(dto.file_path, "");
}

// ══════════════════════════════════════════════════════════
//  guideline_list
// ══════════════════════════════════════════════════════════

#[test]
fn list_empty_table_returns_empty() {
    let db = init_test_db();
    assert!(guideline_list(&db, None).unwrap().is_empty());
}

#[test]
fn list_without_category_returns_all_newest_first() {
    let db = init_test_db();
    seed(&db);
    let all = guideline_list(&db, None).unwrap();
    assert_eq!(titles(&all), vec!["Fungal", "Sepsis", "Lowercase", "Delirium"]);
}

#[test]
fn list_empty_category_equals_no_category() {
    let db = init_test_db();
    seed(&db);
    let none: Vec<i64> = guideline_list(&db, None).unwrap().iter().map(|g| g.id).collect();
    let empty: Vec<i64> = guideline_list(&db, Some("")).unwrap().iter().map(|g| g.id).collect();
    assert_eq!(none, empty);
    assert_eq!(none.len(), 4);
}

#[test]
fn list_category_is_exact_and_case_sensitive() {
    let db = init_test_db();
    seed(&db);
    let infection = guideline_list(&db, Some("Infection")).unwrap();
    assert_eq!(titles(&infection), vec!["Fungal", "Sepsis"]);
    assert!(infection.iter().all(|g| g.category == "Infection"));

    let lower = guideline_list(&db, Some("infection")).unwrap();
    assert_eq!(titles(&lower), vec!["Lowercase"]);

    assert!(guideline_list(&db, Some("Infect")).unwrap().is_empty());
}
