//! License desk screen. Generation exists for both roles through separate
//! backend families; the approval queue is super-admin data, and a reseller
//! opening the desk gets the queue in its skipped state rather than an
//! error.

use std::collections::HashSet;

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::{ActivityEntry, ActivityLogFilter, GeneratedLicense, Page, PendingRequest};
use crate::auth::roles::Role;
use crate::screens::ScreenQuery;

pub async fn generate(client: &ApiClient, role: Role, body: Value) -> Result<GeneratedLicense> {
    match role {
        Role::SuperAdmin => client.generate_license_admin(body).await,
        Role::Reseller => client.generate_license_reseller(body).await,
    }
}

pub async fn pending(client: &ApiClient, role: Role) -> ScreenQuery<Vec<PendingRequest>> {
    match role {
        Role::SuperAdmin => client.pending_requests().await.into(),
        Role::Reseller => ScreenQuery::Skipped,
    }
}

pub async fn approve(client: &ApiClient, role: Role, id: &str) -> Result<Value> {
    match role {
        Role::SuperAdmin => client.approve_request(id).await,
        Role::Reseller => Err(ApiError::Validation(
            "only the super admin can approve license requests".into(),
        )),
    }
}

pub async fn reject(client: &ApiClient, role: Role, id: &str) -> Result<Value> {
    match role {
        Role::SuperAdmin => client.reject_request(id).await,
        Role::Reseller => Err(ApiError::Validation(
            "only the super admin can reject license requests".into(),
        )),
    }
}

pub async fn activity(
    client: &ApiClient,
    role: Role,
    filter: &ActivityLogFilter,
) -> ScreenQuery<Page<ActivityEntry>> {
    match role {
        Role::SuperAdmin => client.activity_log(filter).await.into(),
        Role::Reseller => ScreenQuery::Skipped,
    }
}

/// Which activity rows the operator has marked active in the current view.
/// Purely client-side; closing the screen discards it and nothing is sent
/// to the backend.
#[derive(Debug, Default)]
pub struct ActivityToggles {
    active: HashSet<String>,
}

impl ActivityToggles {
    pub fn toggle(&mut self, entry_id: &str) {
        if !self.active.remove(entry_id) {
            self.active.insert(entry_id.to_string());
        }
    }

    pub fn is_active(&self, entry_id: &str) -> bool {
        self.active.contains(entry_id)
    }
}
