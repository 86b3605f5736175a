//! Session lifecycle against the backend: the 401 policy, login
//! normalization, the return-to resume flow, and persistence across
//! processes.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use quickxpos_admin::auth::guard::{self, GuardDecision, RouteRequest};
use quickxpos_admin::auth::permissions::keys;
use quickxpos_admin::auth::roles::Role;
use quickxpos_admin::auth::routes::Route;
use quickxpos_admin::auth::session::{Credentials, SessionStore};
use quickxpos_admin::auth::storage::FileSessionStorage;

use crate::common::Harness;

#[tokio::test]
async fn expired_session_forces_logout_and_redirect() {
    let harness = Harness::start_at(Route::Dashboard).await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&harness.server)
        .await;

    let err = harness.client.get_super_admin_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Token expired");

    assert!(!harness.session.is_authenticated());
    assert_eq!(harness.navigator.redirects(), vec![Route::Login]);
    // The persisted record is gone too.
    assert!(!harness.session_file().exists());
}

#[tokio::test]
async fn no_redirect_when_already_on_the_login_view() {
    let harness = Harness::start_at(Route::Login).await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("GET"))
        .and(path("/api/super-admin/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&harness.server)
        .await;

    let err = harness.client.get_super_admin_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!harness.session.is_authenticated());
    assert!(harness.navigator.redirects().is_empty());
}

#[tokio::test]
async fn failed_login_surfaces_inline_and_leaves_session_alone() {
    let harness = Harness::start().await;
    harness.sign_in(Role::Reseller);

    Mock::given(method("POST"))
        .and(path("/api/reseller/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&harness.server)
        .await;

    let err = harness
        .client
        .login_reseller("r@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");

    // The login endpoint is exempt from the forced-logout policy.
    assert!(harness.session.is_authenticated());
    assert!(harness.navigator.redirects().is_empty());
}

#[tokio::test]
async fn login_normalizes_identity_and_installs_forced_grants() {
    let harness = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reseller/auth/login"))
        .and(body_partial_json(json!({"email": "r@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "user": {
                    "_id": "res-9",
                    "name": "Reseller Nine",
                    "email": "r@example.com",
                    "permissions": {"license:generate": false}
                },
                "accessToken": "tok",
                "refreshToken": "ref"
            }
        })))
        .mount(&harness.server)
        .await;

    let outcome = harness
        .client
        .login_reseller("r@example.com", "pw")
        .await
        .unwrap();
    assert_eq!(outcome.user.id, "res-9");
    assert_eq!(outcome.role, Role::Reseller);

    harness.session.set_credentials(Credentials {
        user: outcome.user,
        role: outcome.role,
        permissions: outcome.permissions,
        token: outcome.token,
        refresh_token: outcome.refresh_token,
    });

    let session = harness.session.snapshot();
    // The forced session grant beats the server's denial.
    assert_eq!(session.permissions.get(keys::LICENSE_GENERATE), Some(&true));
    assert_eq!(session.permissions.get(keys::LICENSE_VIEW), Some(&true));
}

#[tokio::test]
async fn denied_navigation_resumes_after_login() {
    let harness = Harness::start().await;

    // Unauthenticated: the guard points at login, remembering the target.
    let request = RouteRequest::new(Route::LicenseManagement);
    let decision = guard::decide(&harness.session.snapshot(), &request);
    let GuardDecision::RedirectToLogin { return_to } = decision else {
        panic!("expected a login redirect, got {decision:?}");
    };
    assert_eq!(return_to, Route::LicenseManagement);

    harness.sign_in(Role::Reseller);

    // Re-running the remembered request now renders.
    let resumed = RouteRequest::new(return_to);
    assert_eq!(
        guard::decide(&harness.session.snapshot(), &resumed),
        GuardDecision::Render
    );
}

#[tokio::test]
async fn session_survives_a_process_restart() {
    let harness = Harness::start().await;
    harness.sign_in(Role::Reseller);

    // A second store over the same file: what a fresh process would build.
    let storage = Arc::new(FileSessionStorage::new(harness.session_file()));
    let restarted = SessionStore::new(storage);
    restarted.hydrate();

    assert!(restarted.is_authenticated());
    assert_eq!(restarted.role(), Some(Role::Reseller));
    let session = restarted.snapshot();
    assert_eq!(session.permissions.get(keys::LICENSE_VIEW), Some(&true));
}

#[tokio::test]
async fn refresh_rotates_the_access_token() {
    let harness = Harness::start().await;
    harness.sign_in(Role::SuperAdmin);

    Mock::given(method("POST"))
        .and(path("/api/super-admin/auth/refresh-token"))
        .and(body_partial_json(json!({"refresh_token": "ref-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"accessToken": "tok-2"}
        })))
        .mount(&harness.server)
        .await;

    let token = harness
        .client
        .refresh_super_admin_token("ref-1")
        .await
        .unwrap();
    assert_eq!(token, "tok-2");

    harness.session.update_token(token);
    assert_eq!(harness.session.token().as_deref(), Some("tok-2"));
}
