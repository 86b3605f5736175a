//! Wire types for backend resources
//!
//! The backend's shapes are loosely specified and have drifted over time, so
//! every field the client does not strictly need is optional and unknown
//! fields are ignored. Identifiers arrive as either `_id` or `id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::envelope::Pagination;
use crate::auth::permissions::PermissionSet;
use crate::auth::roles::Role;
use crate::auth::session::Identity;

/// A page of results plus whatever pagination block the backend sent.
#[derive(Debug, Clone, Default)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Common list filters: page/limit plus free-text search and status.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub reseller_id: Option<String>,
    pub business_category: Option<String>,
}

impl ListFilter {
    /// Query parameters in wire form; unset filters are omitted entirely.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        params.push(("page".into(), self.page.unwrap_or(1).to_string()));
        params.push(("limit".into(), self.limit.unwrap_or(10).to_string()));
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search".into(), search.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status".into(), status.to_string()));
        }
        if let Some(id) = self.reseller_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("resellerId".into(), id.to_string()));
        }
        if let Some(cat) = self.business_category.as_deref().filter(|s| !s.is_empty()) {
            params.push(("businessCategory".into(), cat.to_string()));
        }
        params
    }
}

/// A tenant business (salon or restaurant) managed through the console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub business_category: Option<String>,
    #[serde(default)]
    pub reseller_id: Option<String>,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A partner account selling and servicing salons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reseller {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_salons: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A time-bounded activation credential issued to a salon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub salon_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of a license generation call: the license plus the salon it was
/// issued for, with key data lifted to the top level.
#[derive(Debug, Clone, Default)]
pub struct GeneratedLicense {
    pub license: License,
    pub salon: Option<Value>,
}

/// A salon's outstanding ask for a license, awaiting super-admin review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub salon_id: Option<String>,
    #[serde(default)]
    pub salon_name: Option<String>,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
}

/// One line of the license activity log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub salon_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Filters for the activity log listing.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub event_type: Option<String>,
    pub salon_id: Option<String>,
}

impl ActivityLogFilter {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        params.push(("page".into(), self.page.unwrap_or(1).to_string()));
        params.push(("limit".into(), self.limit.unwrap_or(10).to_string()));
        if let Some(event) = self.event_type.as_deref().filter(|s| !s.is_empty()) {
            params.push(("eventType".into(), event.to_string()));
        }
        if let Some(id) = self.salon_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("salonId".into(), id.to_string()));
        }
        params
    }
}

/// A subscription plan sold per salon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration_days: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A business category a salon is filed under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Unified dashboard numbers across both roles. The "active" figure counts
/// active license keys platform-wide for the super admin, active
/// subscriptions for a reseller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_salons: Option<u64>,
    #[serde(default, alias = "activeKeys", alias = "activeSubscriptions")]
    pub active_count: Option<u64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_resellers: Option<u64>,
    #[serde(default)]
    pub pending_requests: Option<u64>,
}

/// Normalized outcome of a login call, ready for the session store.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: Identity,
    pub role: Role,
    pub permissions: Option<PermissionSet>,
    pub token: String,
    pub refresh_token: Option<String>,
}

/// Profile response: identity plus role and effective permissions.
#[derive(Debug, Clone)]
pub struct ProfileOutcome {
    pub user: Identity,
    pub role: Role,
    pub permissions: PermissionSet,
}

/// An active authenticated device session, as listed by the security
/// endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSession {
    #[serde(alias = "_id", alias = "sessionId")]
    pub id: String,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn salon_accepts_mongo_style_ids() {
        let salon: Salon = serde_json::from_value(json!({
            "_id": "abc123",
            "name": "Shear Genius",
            "status": "active"
        }))
        .unwrap();
        assert_eq!(salon.id, "abc123");
        assert_eq!(salon.status.as_deref(), Some("active"));
    }

    #[test]
    fn list_filter_omits_unset_params() {
        let params = ListFilter::default().to_params();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );

        let params = ListFilter {
            search: Some("glow".into()),
            status: Some("active".into()),
            ..Default::default()
        }
        .to_params();
        assert!(params.contains(&("search".to_string(), "glow".to_string())));
        assert!(params.contains(&("status".to_string(), "active".to_string())));
    }

    #[test]
    fn dashboard_stats_unify_both_role_shapes() {
        let platform: DashboardStats = serde_json::from_value(json!({
            "totalSalons": 40, "activeKeys": 31, "totalRevenue": 1200.5
        }))
        .unwrap();
        assert_eq!(platform.active_count, Some(31));

        let reseller: DashboardStats = serde_json::from_value(json!({
            "totalSalons": 6, "activeSubscriptions": 5
        }))
        .unwrap();
        assert_eq!(reseller.active_count, Some(5));
    }

    #[test]
    fn activity_filter_skips_empty_strings() {
        let params = ActivityLogFilter {
            event_type: Some(String::new()),
            salon_id: Some("s1".into()),
            ..Default::default()
        }
        .to_params();
        assert!(!params.iter().any(|(name, _)| name == "eventType"));
        assert!(params.contains(&("salonId".to_string(), "s1".to_string())));
    }
}
