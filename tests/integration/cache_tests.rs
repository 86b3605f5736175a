//! Query cache behavior: freshness window, tag invalidation, explicit
//! bypass and reconnect flushing. Expectations on the mocks count network
//! hits, so a cached serve shows up as a missing second request.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use quickxpos_admin::api::types::ListFilter;
use quickxpos_admin::auth::roles::Role;

use crate::common::Harness;

fn salon_list_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": {"salons": [{"_id": "s1", "name": "Glow", "status": "active"}]},
        "pagination": {"page": 1, "totalPages": 1, "total": 1}
    })
}

#[tokio::test]
async fn second_read_within_freshness_window_is_served_from_cache() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/salons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(salon_list_body()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let filter = ListFilter::default();
    let first = harness.client.list_salons_admin(&filter).await.unwrap();
    let second = harness.client.list_salons_admin(&filter).await.unwrap();

    assert_eq!(first.items.len(), 1);
    assert_eq!(second.items[0].id, "s1");
}

#[tokio::test]
async fn different_params_are_distinct_cache_entries() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/salons"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(salon_list_body()))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/super-admin/salons"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(salon_list_body()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let page_one = ListFilter {
        page: Some(1),
        ..Default::default()
    };
    let page_two = ListFilter {
        page: Some(2),
        ..Default::default()
    };
    harness.client.list_salons_admin(&page_one).await.unwrap();
    harness.client.list_salons_admin(&page_two).await.unwrap();
    // Both pages cached now; neither re-hits the network.
    harness.client.list_salons_admin(&page_one).await.unwrap();
    harness.client.list_salons_admin(&page_two).await.unwrap();
}

#[tokio::test]
async fn mutation_invalidates_tagged_reads() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/salons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(salon_list_body()))
        .expect(2)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/super-admin/salons"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {"salon": {"_id": "s2", "name": "Shear Genius"}}
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let filter = ListFilter::default();
    harness.client.list_salons_admin(&filter).await.unwrap();
    harness
        .client
        .create_salon(json!({"name": "Shear Genius"}))
        .await
        .unwrap();
    // Invalidated by the create; this one refetches.
    harness.client.list_salons_admin(&filter).await.unwrap();
}

#[tokio::test]
async fn mutation_leaves_unrelated_tags_cached() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/business-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"categories": [{"name": "Salon"}]}
        })))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/super-admin/salons"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {"salon": {"_id": "s2", "name": "New"}}
        })))
        .mount(&harness.server)
        .await;

    harness.client.list_business_categories().await.unwrap();
    harness
        .client
        .create_salon(json!({"name": "New"}))
        .await
        .unwrap();
    // Salon mutations do not touch the category tag.
    harness.client.list_business_categories().await.unwrap();
}

#[tokio::test]
async fn get_fresh_bypasses_and_repopulates() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"total": 5}
        })))
        .expect(2)
        .mount(&harness.server)
        .await;

    harness.client.license_stats().await.unwrap();
    harness
        .client
        .get_fresh("/api/super-admin/licenses/stats", &[], &[])
        .await
        .unwrap();
    // Served from the entry get_fresh repopulated.
    harness.client.license_stats().await.unwrap();
}

#[tokio::test]
async fn reconnect_clears_every_entry() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"total": 5}
        })))
        .expect(2)
        .mount(&harness.server)
        .await;

    harness.client.license_stats().await.unwrap();
    assert!(!harness.client.cache().is_empty());

    harness.client.on_reconnect();
    assert!(harness.client.cache().is_empty());

    harness.client.license_stats().await.unwrap();
}

#[tokio::test]
async fn error_responses_are_not_cached() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/licenses/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(2)
        .mount(&harness.server)
        .await;

    assert!(harness.client.license_stats().await.is_err());
    assert!(harness.client.cache().is_empty());
    assert!(harness.client.license_stats().await.is_err());
}
