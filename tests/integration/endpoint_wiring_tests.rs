//! Wire-level pins for endpoints whose paths do not follow the usual
//! `/resource/:id/action` pattern, so a refactor cannot silently move them.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use quickxpos_admin::api::ExportResource;
use quickxpos_admin::auth::roles::Role;

use crate::common::Harness;

#[tokio::test]
async fn activity_log_export_uses_the_plural_path() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/export/activity-logs"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("event,at\nlogin,2026-01-01\n"))
        .expect(1)
        .mount(&harness.server)
        .await;

    let bytes = harness
        .client
        .export_csv(ExportResource::ActivityLog)
        .await
        .unwrap();
    assert_eq!(bytes, b"event,at\nlogin,2026-01-01\n");
}

#[tokio::test]
async fn unassigning_a_salon_posts_both_ids_to_a_fixed_path() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("POST"))
        .and(path("/api/super-admin/resellers/unassign-salon"))
        .and(body_partial_json(json!({"resellerId": "r-1", "salonId": "s-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": null
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness
        .client
        .unassign_salon_from_reseller("r-1", "s-1")
        .await
        .unwrap();
}
