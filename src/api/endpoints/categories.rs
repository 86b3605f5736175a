//! Business category endpoints (super-admin only).
//!
//! Categories are addressed by name, so path segments are percent-encoded.

use serde_json::Value;

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::endpoints::encode_segment;
use crate::api::error::Result;
use crate::api::types::BusinessCategory;

const BASE: &str = "/api/super-admin/business-categories";

impl ApiClient {
    /// GET /api/super-admin/business-categories
    pub async fn list_business_categories(&self) -> Result<Vec<BusinessCategory>> {
        let payload = self
            .get_cached(BASE, &[], &[ResourceTag::BusinessCategory])
            .await?;
        Ok(payload.pick("categories").decode()?)
    }

    /// POST /api/super-admin/business-categories
    pub async fn create_business_category(&self, body: Value) -> Result<BusinessCategory> {
        let payload = self
            .post(BASE, Some(body), &[ResourceTag::BusinessCategory])
            .await?;
        Ok(payload.pick("category").decode()?)
    }

    /// PUT /api/super-admin/business-categories/:name
    pub async fn update_business_category(
        &self,
        name: &str,
        body: Value,
    ) -> Result<BusinessCategory> {
        let payload = self
            .put(
                &format!("{BASE}/{}", encode_segment(name)),
                Some(body),
                &[ResourceTag::BusinessCategory],
            )
            .await?;
        Ok(payload.pick("category").decode()?)
    }

    /// DELETE /api/super-admin/business-categories/:name
    pub async fn delete_business_category(&self, name: &str) -> Result<()> {
        self.delete(
            &format!("{BASE}/{}", encode_segment(name)),
            &[ResourceTag::BusinessCategory],
        )
        .await?;
        Ok(())
    }
}
