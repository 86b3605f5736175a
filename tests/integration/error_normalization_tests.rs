//! Error and envelope normalization over the wire: every backend failure
//! reaches the caller as the same `{status, message, data}` shape, and
//! success bodies are unwrapped exactly once.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use quickxpos_admin::api::error::ApiError;
use quickxpos_admin::auth::roles::Role;

use crate::common::Harness;

#[tokio::test]
async fn backend_message_field_wins() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/stats"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "bad filter",
            "error": "ignored"
        })))
        .mount(&harness.server)
        .await;

    let err = harness.client.license_stats().await.unwrap_err();
    assert_eq!(err.to_string(), "bad filter");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn error_field_is_second_choice() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/stats"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden"})))
        .mount(&harness.server)
        .await;

    let err = harness.client.license_stats().await.unwrap_err();
    assert_eq!(err.to_string(), "forbidden");
}

#[tokio::test]
async fn bodyless_errors_get_the_generic_message() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/stats"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&harness.server)
        .await;

    let err = harness.client.license_stats().await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 503");
}

#[tokio::test]
async fn conflict_carries_the_existing_license() {
    let harness = Harness::start().await;
    harness.sign_in(Role::Reseller);

    Mock::given(method("POST"))
        .and(path("/api/reseller/licenses/generate"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "License already exists for this salon",
            "data": {"existingLicense": {"licenseKey": "KEY-OLD", "expiryDate": "2026-06-01"}}
        })))
        .mount(&harness.server)
        .await;

    let err = harness
        .client
        .generate_license_reseller(json!({"salonId": "s1"}))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(
        err.existing_license().unwrap()["licenseKey"],
        json!("KEY-OLD")
    );
}

#[tokio::test]
async fn unwrapped_bodies_pass_through() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    // Older endpoint shape without the envelope.
    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"topPlan": "annual"})))
        .mount(&harness.server)
        .await;

    let insights = harness.client.license_insights().await.unwrap();
    assert_eq!(insights["topPlan"], json!("annual"));
}

#[tokio::test]
async fn empty_success_body_decodes_to_null() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("POST"))
        .and(path("/api/super-admin/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&harness.server)
        .await;

    harness.client.logout_super_admin().await.unwrap();
}

#[tokio::test]
async fn malformed_shape_is_a_serialization_error() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/pending-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"requests": "not-a-list"}
        })))
        .mount(&harness.server)
        .await;

    let err = harness.client.pending_requests().await.unwrap_err();
    assert!(matches!(err, ApiError::Serialization(_)));
}

#[tokio::test]
async fn csv_export_returns_raw_bytes() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/export/salons"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("id,name\ns1,Glow\n"),
        )
        .mount(&harness.server)
        .await;

    let bytes = harness
        .client
        .export_csv(quickxpos_admin::api::ExportResource::Salons)
        .await
        .unwrap();
    assert_eq!(bytes, b"id,name\ns1,Glow\n");
}
