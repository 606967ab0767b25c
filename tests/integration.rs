//! Integration tests for the Stay Engine.
//!
//! This test suite covers:
//! - Stay quotes through the HTTP API
//! - Room search against the configured catalogue
//! - Document status and reminder generation at fixed points in time
//! - Rent due reminders, month suppression, and the rent ledger
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use stay_engine::api::{AppState, create_router};
use stay_engine::calculation::{
    PaymentEntry, build_reminders, compute_stay, derive_document_status, record_payment,
    refresh_statuses,
};
use stay_engine::config::ConfigLoader;
use stay_engine::models::{
    ChargeStatus, DocumentKind, DocumentStatus, PaymentStatus, RecurringCharge, ReminderKind,
    TrackedDocument,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/storefront").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn document(id: &str, expiry: Option<&str>, renewal: Option<&str>) -> TrackedDocument {
    TrackedDocument {
        id: id.to_string(),
        name: format!("Document {}", id),
        kind: DocumentKind::License,
        expiry_date: expiry.map(make_date),
        renewal_date: renewal.map(make_date),
        reminder_window_days: 30,
        status: DocumentStatus::Active,
        property_id: Some("villa-frangipani".to_string()),
        notes: None,
    }
}

fn charge(id: &str, due_day: u32) -> RecurringCharge {
    RecurringCharge {
        id: id.to_string(),
        amount: decimal("1200.00"),
        due_day_of_month: due_day,
        status: ChargeStatus::Active,
        payment_history: vec![],
        room_name: Some("Villa Melati".to_string()),
        tenant_name: Some("K. Wiryawan".to_string()),
        start_date: None,
        end_date: None,
    }
}

// =============================================================================
// SECTION 1: Stay Pricing
// =============================================================================

#[test]
fn test_three_nights_at_100_is_300() {
    let stay = compute_stay(
        Some(make_date("2024-03-01")),
        Some(make_date("2024-03-04")),
        decimal("100"),
    );
    assert_eq!(stay.nights, 3);
    assert_eq!(stay.total_price, decimal("300"));
}

#[test]
fn test_same_day_and_inverted_stays_are_free() {
    let rate = decimal("100");
    let same_day = compute_stay(
        Some(make_date("2024-03-01")),
        Some(make_date("2024-03-01")),
        rate,
    );
    assert_eq!(same_day.nights, 0);
    assert_eq!(same_day.total_price, Decimal::ZERO);

    let inverted = compute_stay(
        Some(make_date("2024-03-04")),
        Some(make_date("2024-03-01")),
        rate,
    );
    assert_eq!(inverted.nights, 0);
    assert_eq!(inverted.total_price, Decimal::ZERO);
}

#[test]
fn test_stay_across_month_and_leap_day() {
    let stay = compute_stay(
        Some(make_date("2024-02-27")),
        Some(make_date("2024-03-02")),
        decimal("320.00"),
    );
    assert_eq!(stay.nights, 4);
    assert_eq!(stay.total_price, decimal("1280.00"));
}

#[tokio::test]
async fn test_quote_villa_for_a_week() {
    let (status, json) = post(
        create_router_for_test(),
        "/quote",
        json!({
            "room_id": "villa-frangipani",
            "check_in": "2024-07-01",
            "check_out": "2024-07-08",
            "guests": 6
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["room_id"], "villa-frangipani");
    assert_eq!(json["stay"]["nights"], 7);
    assert_eq!(
        decimal(json["stay"]["total_price"].as_str().unwrap()),
        decimal("2240")
    );
    assert_eq!(json["audit_trace"]["steps"][1]["rule_id"], "stay_pricing");
}

#[tokio::test]
async fn test_quote_with_inverted_dates_returns_zero() {
    let (status, json) = post(
        create_router_for_test(),
        "/quote",
        json!({
            "room_id": "deluxe-canggu",
            "check_in": "2024-07-08",
            "check_out": "2024-07-01",
            "guests": 2
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stay"]["nights"], 0);
    assert_eq!(decimal(json["stay"]["total_price"].as_str().unwrap()), Decimal::ZERO);
}

// =============================================================================
// SECTION 2: Room Search
// =============================================================================

#[tokio::test]
async fn test_search_by_location_and_type() {
    let (status, json) = post(
        create_router_for_test(),
        "/rooms/search",
        json!({ "location": "bali", "room_type": "villa" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_search_by_price_range() {
    let (status, json) = post(
        create_router_for_test(),
        "/rooms/search",
        json!({ "min_price": "150", "max_price": "320" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["villa-frangipani", "suite-seminyak"]);
}

#[tokio::test]
async fn test_search_with_no_matches() {
    let (status, json) = post(
        create_router_for_test(),
        "/rooms/search",
        json!({ "guests": 20 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert!(json["rooms"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 3: Document Status and Reminders
// =============================================================================

#[test]
fn test_document_status_at_40_10_and_minus_1_days() {
    let doc = document("d1", Some("2024-06-30"), None);

    assert_eq!(
        derive_document_status(&doc, make_datetime("2024-05-21 00:00:00")),
        DocumentStatus::Active
    );
    assert_eq!(
        derive_document_status(&doc, make_datetime("2024-06-20 00:00:00")),
        DocumentStatus::ExpiringSoon
    );
    assert_eq!(
        derive_document_status(&doc, make_datetime("2024-07-01 00:00:00")),
        DocumentStatus::Expired
    );
}

#[test]
fn test_pipeline_refresh_then_build() {
    let now = make_datetime("2024-06-20 10:00:00");
    let documents = vec![
        document("expiring", Some("2024-07-01"), None),
        document("expired", Some("2024-06-01"), Some("2024-06-22")),
        document("evergreen", None, None),
    ];

    let refreshed = refresh_statuses(&documents, now);
    let statuses: Vec<DocumentStatus> = refreshed.iter().map(|d| d.status).collect();
    assert_eq!(
        statuses,
        vec![
            DocumentStatus::ExpiringSoon,
            DocumentStatus::Expired,
            DocumentStatus::Active
        ]
    );

    let reminders = build_reminders(&refreshed, &[], now);
    let ids: Vec<&str> = reminders.iter().map(|r| r.id.as_str()).collect();
    // The expired document gets no expiry reminder but still has a renewal in range
    assert_eq!(ids, vec!["expiry-expiring", "renewal-expired"]);
}

#[tokio::test]
async fn test_reminders_endpoint_end_to_end() {
    let (status, json) = post(
        create_router_for_test(),
        "/reminders",
        json!({
            "now": "2024-09-26T08:00:00",
            "documents": [
                { "id": "lic", "name": "Tourism licence", "expiry_date": "2024-10-10", "reminder_window_days": 14 },
                { "id": "ins", "name": "Insurance", "kind": "insurance", "expiry_date": "2024-12-31", "renewal_date": "2024-10-01" }
            ],
            "charges": [
                { "id": "r1", "amount": "1200.00", "due_day_of_month": 31, "tenant_name": "A. Putri" },
                { "id": "r2", "amount": "800.00", "due_day_of_month": 28, "status": "paused" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let reminders = json["reminders"].as_array().unwrap();
    let ids: Vec<&str> = reminders.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["expiry-lic", "renewal-ins", "rent-r1-2024-09"]);

    assert_eq!(reminders[2]["kind"], "rent_due");
    assert_eq!(reminders[2]["due_date"], "2024-09-30");
    assert_eq!(reminders[2]["subject_name"], "A. Putri");
    assert_eq!(json["documents"][0]["status"], "expiring_soon");
    assert_eq!(json["documents"][1]["status"], "active");

    // Two documents plus the one active charge
    assert_eq!(json["audit_trace"]["steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_reminders_rejects_zero_window() {
    let (status, json) = post(
        create_router_for_test(),
        "/reminders",
        json!({
            "now": "2024-09-26T08:00:00",
            "documents": [
                { "id": "lic", "name": "Tourism licence", "expiry_date": "2024-10-10", "reminder_window_days": 0 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DOCUMENT");
}

// =============================================================================
// SECTION 4: Rent Due and Ledger
// =============================================================================

#[test]
fn test_paid_payment_suppresses_until_next_month() {
    let mut rent = charge("r1", 5);
    let march = make_datetime("2024-03-03 09:00:00");

    let payment = record_payment(&rent, PaymentEntry::default(), march).unwrap();
    assert_eq!(payment.status, PaymentStatus::Paid);
    rent.payment_history.push(payment);

    assert!(build_reminders(&[], std::slice::from_ref(&rent), march).is_empty());

    // The March payment does not cover April
    let april = make_datetime("2024-04-02 09:00:00");
    let reminders = build_reminders(&[], std::slice::from_ref(&rent), april);
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].kind, ReminderKind::RentDue);
    assert_eq!(reminders[0].id, "rent-r1-2024-04");
}

#[test]
fn test_partial_payment_keeps_reminding() {
    let mut rent = charge("r1", 5);
    let now = make_datetime("2024-03-03 09:00:00");

    let entry = PaymentEntry {
        amount_paid: Some(decimal("600")),
        payment_method: Some("cash".to_string()),
        ..Default::default()
    };
    let payment = record_payment(&rent, entry, now).unwrap();
    assert_eq!(payment.status, PaymentStatus::Partial);
    assert_eq!(payment.payment_method.as_deref(), Some("cash"));
    rent.payment_history.push(payment);

    assert_eq!(build_reminders(&[], &[rent], now).len(), 1);
}

#[test]
fn test_february_due_date_for_day_30() {
    let rent = charge("r1", 30);
    let reminders = build_reminders(&[], &[rent], make_datetime("2023-02-25 00:00:00"));

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].due_date, make_date("2023-02-28"));
}

#[tokio::test]
async fn test_rent_summary_and_payment_endpoints() {
    let router = create_router_for_test();

    let (status, payment) = post(
        router.clone(),
        "/rent/payments",
        json!({
            "now": "2024-05-02T12:00:00",
            "charge": { "id": "r1", "amount": "1200.00", "due_day_of_month": 1 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["status"], "paid");
    assert_eq!(payment["due_date"], "2024-05-01");

    let (status, summary) = post(
        router,
        "/rent/summary",
        json!({
            "now": "2024-05-20T12:00:00",
            "charges": [
                { "id": "r1", "amount": "1200.00", "due_day_of_month": 1, "payment_history": [payment] },
                { "id": "r2", "amount": "950.00", "due_day_of_month": 15 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal(summary["total_monthly_rent"].as_str().unwrap()),
        decimal("2150")
    );
    assert_eq!(summary["paid_this_month"], 1);
    assert_eq!(summary["pending_this_month"], 1);
    assert_eq!(summary["charges"][1]["status"], "pending");
}

#[tokio::test]
async fn test_payment_for_invalid_charge_is_rejected() {
    let (status, json) = post(
        create_router_for_test(),
        "/rent/payments",
        json!({
            "now": "2024-05-02T12:00:00",
            "charge": { "id": "r1", "amount": "-5", "due_day_of_month": 1 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_CHARGE");
}
