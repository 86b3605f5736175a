//! Subscription plan endpoints (super-admin only).

use serde_json::Value;

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::endpoints::encode_segment;
use crate::api::error::Result;
use crate::api::types::SubscriptionPlan;

const BASE: &str = "/api/super-admin/subscriptions/plans";

impl ApiClient {
    /// GET /api/super-admin/subscriptions/plans
    pub async fn list_subscription_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        let payload = self
            .get_cached(BASE, &[], &[ResourceTag::Subscription])
            .await?;
        Ok(payload.pick("plans").decode()?)
    }

    /// POST /api/super-admin/subscriptions/plans
    pub async fn create_subscription_plan(&self, body: Value) -> Result<SubscriptionPlan> {
        let payload = self
            .post(BASE, Some(body), &[ResourceTag::Subscription])
            .await?;
        Ok(payload.pick("plan").decode()?)
    }

    /// PUT /api/super-admin/subscriptions/plans/:name
    pub async fn update_subscription_plan(
        &self,
        name: &str,
        body: Value,
    ) -> Result<SubscriptionPlan> {
        let payload = self
            .put(
                &format!("{BASE}/{}", encode_segment(name)),
                Some(body),
                &[ResourceTag::Subscription],
            )
            .await?;
        Ok(payload.pick("plan").decode()?)
    }

    /// DELETE /api/super-admin/subscriptions/plans/:name
    pub async fn delete_subscription_plan(&self, name: &str) -> Result<()> {
        self.delete(
            &format!("{BASE}/{}", encode_segment(name)),
            &[ResourceTag::Subscription],
        )
        .await?;
        Ok(())
    }
}
