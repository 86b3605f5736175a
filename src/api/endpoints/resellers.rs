//! Reseller management endpoints (super-admin only)

use serde_json::{Value, json};

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::error::Result;
use crate::api::types::{ListFilter, Page, Reseller};

impl ApiClient {
    /// GET /api/super-admin/resellers
    pub async fn list_resellers(&self, filter: &ListFilter) -> Result<Page<Reseller>> {
        let payload = self
            .get_cached(
                "/api/super-admin/resellers",
                &filter.to_params(),
                &[ResourceTag::Reseller],
            )
            .await?;
        let pagination = payload.pagination();
        let items = payload.pick("resellers").decode()?;
        Ok(Page { items, pagination })
    }

    /// GET /api/super-admin/resellers/:id
    pub async fn get_reseller(&self, id: &str) -> Result<Reseller> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/resellers/{id}"),
                &[],
                &[ResourceTag::Reseller],
            )
            .await?;
        Ok(payload.pick("reseller").decode()?)
    }

    /// POST /api/super-admin/resellers
    pub async fn create_reseller(&self, body: Value) -> Result<Reseller> {
        let payload = self
            .post(
                "/api/super-admin/resellers",
                Some(body),
                &[ResourceTag::Reseller],
            )
            .await?;
        Ok(payload.pick("reseller").decode()?)
    }

    /// PUT /api/super-admin/resellers/:id
    pub async fn update_reseller(&self, id: &str, body: Value) -> Result<Reseller> {
        let payload = self
            .put(
                &format!("/api/super-admin/resellers/{id}"),
                Some(body),
                &[ResourceTag::Reseller],
            )
            .await?;
        Ok(payload.pick("reseller").decode()?)
    }

    /// DELETE /api/super-admin/resellers/:id
    pub async fn delete_reseller(&self, id: &str) -> Result<()> {
        self.delete(
            &format!("/api/super-admin/resellers/{id}"),
            &[ResourceTag::Reseller],
        )
        .await?;
        Ok(())
    }

    /// POST /api/super-admin/resellers/:id/toggle-status
    pub async fn toggle_reseller_status(&self, id: &str) -> Result<Reseller> {
        let payload = self
            .post(
                &format!("/api/super-admin/resellers/{id}/toggle-status"),
                None,
                &[ResourceTag::Reseller],
            )
            .await?;
        Ok(payload.pick("reseller").decode()?)
    }

    /// POST /api/super-admin/resellers/:id/assign-salon
    pub async fn assign_salon_to_reseller(&self, reseller_id: &str, salon_id: &str) -> Result<()> {
        self.post(
            &format!("/api/super-admin/resellers/{reseller_id}/assign-salon"),
            Some(json!({"salonId": salon_id})),
            &[ResourceTag::Reseller, ResourceTag::Salon],
        )
        .await?;
        Ok(())
    }

    /// POST /api/super-admin/resellers/unassign-salon
    ///
    /// Unlike assignment, the backend takes both ids in the body here.
    pub async fn unassign_salon_from_reseller(
        &self,
        reseller_id: &str,
        salon_id: &str,
    ) -> Result<()> {
        self.post(
            "/api/super-admin/resellers/unassign-salon",
            Some(json!({"resellerId": reseller_id, "salonId": salon_id})),
            &[ResourceTag::Reseller, ResourceTag::Salon],
        )
        .await?;
        Ok(())
    }

    /// GET /api/super-admin/resellers/:id/stats
    pub async fn reseller_stats(&self, id: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/resellers/{id}/stats"),
                &[],
                &[ResourceTag::Reseller],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET /api/super-admin/resellers/:id/performance
    pub async fn reseller_performance(&self, id: &str) -> Result<Value> {
        let payload = self
            .get_cached(
                &format!("/api/super-admin/resellers/{id}/performance"),
                &[],
                &[ResourceTag::Reseller],
            )
            .await?;
        Ok(payload.data)
    }
}
