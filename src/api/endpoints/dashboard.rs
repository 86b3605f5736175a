//! Dashboard analytics endpoints, one family per role.

use serde_json::Value;

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::error::Result;
use crate::api::types::DashboardStats;

impl ApiClient {
    /// GET /api/super-admin/platform/stats
    pub async fn platform_stats(&self) -> Result<DashboardStats> {
        let payload = self
            .get_cached(
                "/api/super-admin/platform/stats",
                &[],
                &[ResourceTag::Dashboard],
            )
            .await?;
        Ok(payload.decode()?)
    }

    /// GET /api/super-admin/platform/revenue-trend?period=...
    pub async fn revenue_trend(&self, period: &str) -> Result<Value> {
        self.platform_series("revenue-trend", &[("period".into(), period.into())])
            .await
    }

    /// GET /api/super-admin/platform/customer-growth?period=...
    pub async fn customer_growth(&self, period: &str) -> Result<Value> {
        self.platform_series("customer-growth", &[("period".into(), period.into())])
            .await
    }

    /// GET /api/super-admin/platform/order-distribution
    pub async fn order_distribution(&self) -> Result<Value> {
        self.platform_series("order-distribution", &[]).await
    }

    /// GET /api/super-admin/platform/plan-usage
    pub async fn plan_usage(&self) -> Result<Value> {
        self.platform_series("plan-usage", &[]).await
    }

    /// GET /api/super-admin/platform/recent-activity?limit=...
    pub async fn platform_recent_activity(&self, limit: u32) -> Result<Value> {
        let payload = self
            .get_cached(
                "/api/super-admin/platform/recent-activity",
                &[("limit".to_string(), limit.to_string())],
                &[ResourceTag::Dashboard, ResourceTag::Activity],
            )
            .await?;
        Ok(payload.data)
    }

    async fn platform_series(&self, leaf: &str, params: &[(String, String)]) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/platform/{leaf}"),
                params,
                &[ResourceTag::Dashboard],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/reseller/dashboard/stats
    pub async fn reseller_dashboard_stats(&self) -> Result<DashboardStats> {
        let payload = self
            .get_cached(
                "/api/reseller/dashboard/stats",
                &[],
                &[ResourceTag::Dashboard],
            )
            .await?;
        Ok(payload.decode()?)
    }
}
