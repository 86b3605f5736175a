//! Dashboard screen: platform-wide figures for the super admin, the
//! reseller's own book of business otherwise.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::types::DashboardStats;
use crate::auth::roles::Role;
use crate::screens::ScreenQuery;

/// Everything the dashboard renders.
#[derive(Debug)]
pub struct DashboardView {
    pub stats: ScreenQuery<DashboardStats>,
    /// Super-admin only; resellers see the skipped state.
    pub recent_activity: ScreenQuery<Value>,
}

pub async fn load(client: &ApiClient, role: Role) -> DashboardView {
    match role {
        Role::SuperAdmin => DashboardView {
            stats: client.platform_stats().await.into(),
            recent_activity: client.platform_recent_activity(10).await.into(),
        },
        Role::Reseller => DashboardView {
            stats: client.reseller_dashboard_stats().await.into(),
            recent_activity: ScreenQuery::Skipped,
        },
    }
}
