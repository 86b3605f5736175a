//! Salon directory screen. Both roles see the same columns; which family
//! serves them (and whether create/extend controls exist at all) depends on
//! the role.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::{ListFilter, Page, Salon};
use crate::auth::roles::Role;
use crate::screens::ScreenQuery;

pub async fn list(client: &ApiClient, role: Role, filter: &ListFilter) -> ScreenQuery<Page<Salon>> {
    match role {
        Role::SuperAdmin => client.list_salons_admin(filter).await.into(),
        Role::Reseller => client.list_salons_reseller(filter).await.into(),
    }
}

pub async fn detail(client: &ApiClient, role: Role, id: &str) -> ScreenQuery<Salon> {
    match role {
        Role::SuperAdmin => client.get_salon_admin(id).await.into(),
        Role::Reseller => client.get_salon_reseller(id).await.into(),
    }
}

pub async fn update(client: &ApiClient, role: Role, id: &str, body: Value) -> Result<Salon> {
    match role {
        Role::SuperAdmin => client.update_salon_admin(id, body).await,
        Role::Reseller => client.update_salon_reseller(id, body).await,
    }
}

/// Creating salons is a super-admin operation; there is no reseller family
/// for it.
pub async fn create(client: &ApiClient, role: Role, body: Value) -> Result<Salon> {
    match role {
        Role::SuperAdmin => client.create_salon(body).await,
        Role::Reseller => Err(ApiError::Validation(
            "only the super admin can create salons".into(),
        )),
    }
}

pub async fn extend_plan(client: &ApiClient, role: Role, id: &str, body: Value) -> Result<Value> {
    match role {
        Role::SuperAdmin => client.extend_salon_plan(id, body).await,
        Role::Reseller => Err(ApiError::Validation(
            "only the super admin can extend a salon's plan".into(),
        )),
    }
}

pub async fn deactivate_key(client: &ApiClient, role: Role, id: &str) -> Result<Value> {
    match role {
        Role::SuperAdmin => client.deactivate_salon_key(id).await,
        Role::Reseller => Err(ApiError::Validation(
            "only the super admin can deactivate a license key".into(),
        )),
    }
}
