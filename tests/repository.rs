use certs_api::domain::certification::NewCertification;
use certs_api::repository::admin::DieselDatabaseAdmin;
use certs_api::repository::certification::DieselCertificationRepository;
use certs_api::repository::{
    CertificationListQuery, CertificationReader, CertificationWriter, DatabaseAdmin, Validity,
};
use chrono::NaiveDate;

mod common;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 6, 1)
}

fn seed(repo: &DieselCertificationRepository<'_>) {
    let records = vec![
        NewCertification::new(
            "Patrick Dlamini".to_string(),
            "Microsoft".to_string(),
            "Azure fundamentals: AZ-900".to_string(),
            "https://learn.microsoft.com/az-900".to_string(),
            Some(date(2024, 5, 31)),
        ),
        NewCertification::new(
            "Naledi Mokoena".to_string(),
            "AWS".to_string(),
            "AWS Certified Cloud Practitioner".to_string(),
            "https://aws.amazon.com/ccp".to_string(),
            Some(date(2024, 6, 2)),
        ),
        NewCertification::new(
            "Thabo Nkosi".to_string(),
            "Scrum.org".to_string(),
            "Professional Scrum Master I".to_string(),
            "https://www.scrum.org/psm-i".to_string(),
            None,
        ),
        NewCertification::new(
            "Patrick Dlamini".to_string(),
            "Microsoft".to_string(),
            "Azure administrator: AZ-104".to_string(),
            "https://learn.microsoft.com/az-104".to_string(),
            Some(today()),
        ),
    ];
    for record in &records {
        repo.create(record).unwrap();
    }
}

#[test]
fn test_create_assigns_ids_and_round_trips() {
    let test_db = common::TestDb::new("test_create_round_trip.db");
    let repo = DieselCertificationRepository::new(test_db.pool());

    let new_record = NewCertification::new(
        "Lerato Molefe".to_string(),
        "Google".to_string(),
        "Professional Cloud Architect".to_string(),
        "https://cloud.google.com/learn/certification/cloud-architect".to_string(),
        Some(date(2027, 3, 1)),
    );
    let created = repo.create(&new_record).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.employee_name, new_record.employee_name);
    assert_eq!(created.certificate_type, new_record.certificate_type);
    assert_eq!(created.description, new_record.description);
    assert_eq!(created.link, new_record.link);
    assert_eq!(created.expires_on, new_record.expires_on);

    let fetched = repo.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let (total, by_name) = repo
        .list(CertificationListQuery::new(today()).employee_name("lerato molefe"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(by_name[0], created);

    assert!(repo.get_by_id(created.id + 100).unwrap().is_none());
}

#[test]
fn test_unfiltered_list_orders_by_id() {
    let test_db = common::TestDb::new("test_list_order.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let (total, items) = repo.list(CertificationListQuery::new(today())).unwrap();
    assert_eq!(total, 4);
    let ids: Vec<i32> = items.iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_validity_buckets_use_strict_comparison() {
    let test_db = common::TestDb::new("test_validity_buckets.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let (expired_total, expired) = repo
        .list(CertificationListQuery::new(today()).validity(Validity::Expired))
        .unwrap();
    assert_eq!(expired_total, 1);
    assert_eq!(expired[0].description, "Azure fundamentals: AZ-900");

    let (valid_total, valid) = repo
        .list(CertificationListQuery::new(today()).validity(Validity::Valid))
        .unwrap();
    assert_eq!(valid_total, 1);
    assert_eq!(valid[0].description, "AWS Certified Cloud Practitioner");

    let (nodate_total, nodate) = repo
        .list(CertificationListQuery::new(today()).validity(Validity::NoExpiry))
        .unwrap();
    assert_eq!(nodate_total, 1);
    assert_eq!(nodate[0].description, "Professional Scrum Master I");

    // The record expiring exactly today is in neither bucket but shows up
    // unfiltered.
    let (all_total, _) = repo.list(CertificationListQuery::new(today())).unwrap();
    assert_eq!(all_total, 4);
    assert_eq!(expired_total + valid_total + nodate_total, 3);
}

#[test]
fn test_name_filter_is_case_insensitive_exact() {
    let test_db = common::TestDb::new("test_name_filter.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let (total, items) = repo
        .list(CertificationListQuery::new(today()).employee_name("patrick dlamini"))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|c| c.employee_name == "Patrick Dlamini"));

    let (partial_total, _) = repo
        .list(CertificationListQuery::new(today()).employee_name("patrick"))
        .unwrap();
    assert_eq!(partial_total, 0);
}

#[test]
fn test_keyword_filter_matches_description_or_type() {
    let test_db = common::TestDb::new("test_keyword_filter.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    // "aws" appears in both the type and the description of one record.
    let (total, items) = repo
        .list(CertificationListQuery::new(today()).keyword("aws"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].certificate_type, "AWS");

    // "scrum" appears in the type of the Scrum.org record and its
    // description.
    let (scrum_total, _) = repo
        .list(CertificationListQuery::new(today()).keyword("SCRUM"))
        .unwrap();
    assert_eq!(scrum_total, 1);

    let (azure_total, _) = repo
        .list(CertificationListQuery::new(today()).keyword("azure"))
        .unwrap();
    assert_eq!(azure_total, 2);
}

#[test]
fn test_certificate_type_filter_is_case_sensitive() {
    let test_db = common::TestDb::new("test_certtype_filter.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let (total, _) = repo
        .list(CertificationListQuery::new(today()).certificate_type("Microsoft"))
        .unwrap();
    assert_eq!(total, 2);

    let (lowercase_total, _) = repo
        .list(CertificationListQuery::new(today()).certificate_type("microsoft"))
        .unwrap();
    assert_eq!(lowercase_total, 0);
}

#[test]
fn test_free_text_terms_are_and_combined() {
    let test_db = common::TestDb::new("test_free_text.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let query = CertificationListQuery::new(today())
        .terms(vec!["azure".to_string(), "patrick".to_string()]);
    let (total, items) = repo.list(query).unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|c| c.employee_name == "Patrick Dlamini"));

    let query = CertificationListQuery::new(today())
        .terms(vec!["azure".to_string(), "practitioner".to_string()]);
    let (none_total, _) = repo.list(query).unwrap();
    assert_eq!(none_total, 0);
}

#[test]
fn test_combined_name_and_keyword_filter() {
    let test_db = common::TestDb::new("test_combined_filters.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let query = CertificationListQuery::new(today())
        .employee_name("PATRICK DLAMINI")
        .keyword("az-104");
    let (total, items) = repo.list(query).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].description, "Azure administrator: AZ-104");
}

#[test]
fn test_window_past_the_end_is_empty_with_full_total() {
    let test_db = common::TestDb::new("test_window_past_end.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let (total, items) = repo
        .list(CertificationListQuery::new(today()).paginate(2, 3))
        .unwrap();
    assert_eq!(total, 4);
    assert_eq!(items.len(), 1);

    let (far_total, far_items) = repo
        .list(CertificationListQuery::new(today()).paginate(9, 3))
        .unwrap();
    assert_eq!(far_total, 4);
    assert!(far_items.is_empty());
}

#[test]
fn test_recreate_reseeds_sample_records() {
    let test_db = common::TestDb::new("test_recreate.db");
    let repo = DieselCertificationRepository::new(test_db.pool());
    seed(&repo);

    let admin = DieselDatabaseAdmin::new(test_db.pool());
    admin.recreate().unwrap();

    let (total, items) = repo.list(CertificationListQuery::new(today())).unwrap();
    assert_eq!(total, 4);
    assert!(
        items
            .iter()
            .any(|c| c.employee_name == "Patrick Dlamini"
                && c.description == "Azure fundamentals: AZ-900")
    );
    assert!(items.iter().any(|c| c.expires_on.is_none()));
}
