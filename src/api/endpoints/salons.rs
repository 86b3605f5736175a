//! Salon (user management) endpoints
//!
//! Two parallel families: `/api/super-admin/salons*` sees every tenant;
//! `/api/reseller/salons*` sees only the caller's assigned salons and
//! supports a reduced operation set (no create, no plan or key
//! administration).

use serde_json::Value;

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::error::Result;
use crate::api::types::{ListFilter, Page, Salon};

impl ApiClient {
    /// GET /api/super-admin/salons
    pub async fn list_salons_admin(&self, filter: &ListFilter) -> Result<Page<Salon>> {
        self.list_salons("/api/super-admin/salons", filter).await
    }

    /// GET /api/reseller/salons
    pub async fn list_salons_reseller(&self, filter: &ListFilter) -> Result<Page<Salon>> {
        self.list_salons("/api/reseller/salons", filter).await
    }

    async fn list_salons(&self, path: &str, filter: &ListFilter) -> Result<Page<Salon>> {
        let payload = self
            .get_cached(path, &filter.to_params(), &[ResourceTag::Salon])
            .await?;
        let pagination = payload.pagination();
        let items = payload.pick("salons").decode()?;
        Ok(Page { items, pagination })
    }

    /// GET /api/super-admin/salons/:id
    pub async fn get_salon_admin(&self, id: &str) -> Result<Salon> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/salons/{id}"),
                &[],
                &[ResourceTag::Salon],
            )
            .await?;
        Ok(payload.pick("salon").decode()?)
    }

    /// GET /api/reseller/salons/:id
    pub async fn get_salon_reseller(&self, id: &str) -> Result<Salon> {
        let payload = self
            .get_cached(
                &format!("/api/reseller/salons/{id}"),
                &[],
                &[ResourceTag::Salon],
            )
            .await?;
        Ok(payload.pick("salon").decode()?)
    }

    /// POST /api/super-admin/salons
    pub async fn create_salon(&self, body: Value) -> Result<Salon> {
        let payload = self
            .post("/api/super-admin/salons", Some(body), &[ResourceTag::Salon])
            .await?;
        Ok(payload.pick("salon").decode()?)
    }

    /// PUT /api/super-admin/salons/:id
    pub async fn update_salon_admin(&self, id: &str, body: Value) -> Result<Salon> {
        let payload = self
            .put(
                &format!("/api/super-admin/salons/{id}"),
                Some(body),
                &[ResourceTag::Salon],
            )
            .await?;
        Ok(payload.pick("salon").decode()?)
    }

    /// PUT /api/reseller/salons/:id
    pub async fn update_salon_reseller(&self, id: &str, body: Value) -> Result<Salon> {
        let payload = self
            .put(
                &format!("/api/reseller/salons/{id}"),
                Some(body),
                &[ResourceTag::Salon],
            )
            .await?;
        Ok(payload.pick("salon").decode()?)
    }

    /// POST /api/super-admin/salons/:id/extend-plan
    pub async fn extend_salon_plan(&self, id: &str, body: Value) -> Result<Value> {
        let payload = self
            .post(
                &format!("/api/super-admin/salons/{id}/extend-plan"),
                Some(body),
                &[ResourceTag::Salon, ResourceTag::License],
            )
            .await?;
        Ok(payload.data)
    }

    /// POST /api/super-admin/salons/:id/deactivate-key
    pub async fn deactivate_salon_key(&self, id: &str) -> Result<Value> {
        let payload = self
            .post(
                &format!("/api/super-admin/salons/{id}/deactivate-key"),
                None,
                &[ResourceTag::Salon, ResourceTag::License],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/salons/:id/revenue
    pub async fn salon_revenue(&self, id: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/salons/{id}/revenue"),
                &[],
                &[ResourceTag::Salon],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/salons/:id/customers
    pub async fn salon_customers(&self, id: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/salons/{id}/customers"),
                &[],
                &[ResourceTag::Salon],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/salons/:id/activity-log
    pub async fn salon_activity_log(&self, id: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/salons/{id}/activity-log"),
                &[],
                &[ResourceTag::Salon, ResourceTag::Activity],
            )
            .await?;
        Ok(payload.data)
    }
}
