//! License endpoints
//!
//! Generation exists in both role families; everything else (statistics,
//! pending-request review, activity log) is super-admin only. Generating,
//! approving or rejecting a license touches salons and the activity feed,
//! so those mutations invalidate all three tags.

use serde_json::Value;

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::error::Result;
use crate::api::types::{
    ActivityEntry, ActivityLogFilter, GeneratedLicense, License, Page, PendingRequest,
};

const LICENSE_MUTATION_TAGS: &[ResourceTag] = &[
    ResourceTag::License,
    ResourceTag::Salon,
    ResourceTag::Activity,
];

fn generated_license(data: Value) -> Result<GeneratedLicense> {
    // The license rides either under `license` or as the payload itself.
    let mut license: License = match data.get("license") {
        Some(license) => serde_json::from_value(license.clone())?,
        None => serde_json::from_value(data.clone()).unwrap_or_default(),
    };
    // Key data may sit at the top level instead of inside `license`.
    if license.license_key.is_none() {
        license.license_key = data
            .get("licenseKey")
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    if license.expiry_date.is_none() {
        license.expiry_date = data
            .get("expiryDate")
            .and_then(|value| serde_json::from_value(value.clone()).ok());
    }
    Ok(GeneratedLicense {
        license,
        salon: data.get("salon").cloned(),
    })
}

impl ApiClient {
    /// POST /api/super-admin/licenses/generate
    pub async fn generate_license_admin(&self, body: Value) -> Result<GeneratedLicense> {
        let payload = self
            .post(
                "/api/super-admin/licenses/generate",
                Some(body),
                LICENSE_MUTATION_TAGS,
            )
            .await?;
        generated_license(payload.data)
    }

    /// POST /api/reseller/licenses/generate
    pub async fn generate_license_reseller(&self, body: Value) -> Result<GeneratedLicense> {
        let payload = self
            .post(
                "/api/reseller/licenses/generate",
                Some(body),
                LICENSE_MUTATION_TAGS,
            )
            .await?;
        generated_license(payload.data)
    }

    /// GET /api/super-admin/licenses/stats
    pub async fn license_stats(&self) -> Result<Value> {
        let payload = self
            .get_cached(
                "/api/super-admin/licenses/stats",
                &[],
                &[ResourceTag::License],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/licenses/pending-requests
    pub async fn pending_requests(&self) -> Result<Vec<PendingRequest>> {
        let payload = self
            .get_cached(
                "/api/super-admin/licenses/pending-requests",
                &[],
                &[ResourceTag::License],
            )
            .await?;
        Ok(payload.pick("requests").decode()?)
    }

    /// POST /api/super-admin/licenses/pending-requests/:id/approve
    pub async fn approve_request(&self, id: &str) -> Result<Value> {
        let payload = self
            .post(
                &format!("/api/super-admin/licenses/pending-requests/{id}/approve"),
                None,
                LICENSE_MUTATION_TAGS,
            )
            .await?;
        Ok(payload.data)
    }

    /// POST /api/super-admin/licenses/pending-requests/:id/reject
    pub async fn reject_request(&self, id: &str) -> Result<Value> {
        let payload = self
            .post(
                &format!("/api/super-admin/licenses/pending-requests/{id}/reject"),
                None,
                LICENSE_MUTATION_TAGS,
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/licenses/recent-activities
    pub async fn recent_activities(&self) -> Result<Vec<ActivityEntry>> {
        let payload = self
            .get_cached(
                "/api/super-admin/licenses/recent-activities",
                &[],
                &[ResourceTag::License, ResourceTag::Activity],
            )
            .await?;
        Ok(payload.pick("activities").decode()?)
    }

    /// GET /api/super-admin/licenses/type-distribution
    pub async fn license_type_distribution(&self) -> Result<Value> {
        self.license_insight("type-distribution").await
    }

    /// GET /api/super-admin/licenses/renewal-ratio
    pub async fn license_renewal_ratio(&self) -> Result<Value> {
        self.license_insight("renewal-ratio").await
    }

    /// GET /api/super-admin/licenses/generation-trend
    pub async fn license_generation_trend(&self) -> Result<Value> {
        self.license_insight("generation-trend").await
    }

    /// GET /api/super-admin/licenses/insights
    pub async fn license_insights(&self) -> Result<Value> {
        self.license_insight("insights").await
    }

    /// GET /api/super-admin/licenses/dashboard-status
    pub async fn license_dashboard_status(&self) -> Result<Value> {
        self.license_insight("dashboard-status").await
    }

    async fn license_insight(&self, leaf: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/licenses/{leaf}"),
                &[],
                &[ResourceTag::License],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/licenses/activity-log
    pub async fn activity_log(&self, filter: &ActivityLogFilter) -> Result<Page<ActivityEntry>> {
        let payload = self
            .get_cached(
                "/api/super-admin/licenses/activity-log",
                &filter.to_params(),
                &[ResourceTag::Activity],
            )
            .await?;
        let pagination = payload.pagination();
        let items = payload.pick("logs").decode()?;
        Ok(Page { items, pagination })
    }

    /// GET /api/super-admin/licenses/activity-log/summary
    pub async fn activity_log_summary(&self) -> Result<Value> {
        self.activity_aggregate("summary").await
    }

    /// GET /api/super-admin/licenses/activity-log/distribution
    pub async fn activity_distribution(&self) -> Result<Value> {
        self.activity_aggregate("distribution").await
    }

    /// GET /api/super-admin/licenses/activity-log/volume
    pub async fn activity_volume(&self) -> Result<Value> {
        self.activity_aggregate("volume").await
    }

    async fn activity_aggregate(&self, leaf: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/licenses/activity-log/{leaf}"),
                &[],
                &[ResourceTag::Activity],
            )
            .await?;
        Ok(payload.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_license_merges_nested_and_top_level_fields() {
        let result = generated_license(json!({
            "license": {"licenseKey": "KEY-1", "licenseType": "annual"},
            "salon": {"name": "Glow"}
        }))
        .unwrap();
        assert_eq!(result.license.license_key.as_deref(), Some("KEY-1"));
        assert_eq!(result.salon.unwrap()["name"], json!("Glow"));

        // Key data only at the top level
        let result = generated_license(json!({
            "licenseKey": "KEY-2",
            "expiryDate": "2026-12-31T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(result.license.license_key.as_deref(), Some("KEY-2"));
        assert!(result.license.expiry_date.is_some());
        assert!(result.salon.is_none());
    }
}
