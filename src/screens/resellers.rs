//! Reseller management screen. Entirely super-admin data; a reseller never
//! reaches this screen (the route guard lands them on the dashboard), but
//! the skipped arm is still here so the service is total over roles.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::{ListFilter, Page, Reseller};
use crate::auth::roles::Role;
use crate::screens::ScreenQuery;

pub async fn list(
    client: &ApiClient,
    role: Role,
    filter: &ListFilter,
) -> ScreenQuery<Page<Reseller>> {
    match role {
        Role::SuperAdmin => client.list_resellers(filter).await.into(),
        Role::Reseller => ScreenQuery::Skipped,
    }
}

pub async fn detail(client: &ApiClient, role: Role, id: &str) -> ScreenQuery<Reseller> {
    match role {
        Role::SuperAdmin => client.get_reseller(id).await.into(),
        Role::Reseller => ScreenQuery::Skipped,
    }
}

pub async fn create(client: &ApiClient, role: Role, body: Value) -> Result<Reseller> {
    only_super_admin(role)?;
    client.create_reseller(body).await
}

pub async fn update(client: &ApiClient, role: Role, id: &str, body: Value) -> Result<Reseller> {
    only_super_admin(role)?;
    client.update_reseller(id, body).await
}

pub async fn remove(client: &ApiClient, role: Role, id: &str) -> Result<()> {
    only_super_admin(role)?;
    client.delete_reseller(id).await
}

pub async fn toggle_status(client: &ApiClient, role: Role, id: &str) -> Result<Reseller> {
    only_super_admin(role)?;
    client.toggle_reseller_status(id).await
}

fn only_super_admin(role: Role) -> Result<()> {
    match role {
        Role::SuperAdmin => Ok(()),
        Role::Reseller => Err(ApiError::Validation(
            "reseller accounts are managed by the super admin".into(),
        )),
    }
}
