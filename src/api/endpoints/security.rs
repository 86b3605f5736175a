//! Account security endpoints: password lifecycle, two-factor auth, email
//! verification and device sessions. Every operation exists in both role
//! families under identical sub-paths, so these take the acting [`Role`]
//! instead of duplicating each method.

use serde_json::{Value, json};

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::endpoints::encode_segment;
use crate::api::error::Result;
use crate::api::types::DeviceSession;
use crate::auth::roles::Role;

fn family(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "/api/super-admin",
        Role::Reseller => "/api/reseller",
    }
}

impl ApiClient {
    /// POST {family}/password/forgot
    pub async fn forgot_password(&self, role: Role, email: &str) -> Result<Value> {
        let payload = self
            .post(
                &format!("{}/password/forgot", family(role)),
                Some(json!({ "email": email })),
                &[],
            )
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/password/reset
    pub async fn reset_password(&self, role: Role, body: Value) -> Result<Value> {
        let payload = self
            .post(&format!("{}/password/reset", family(role)), Some(body), &[])
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/password/change
    pub async fn change_password(&self, role: Role, body: Value) -> Result<Value> {
        let payload = self
            .post(
                &format!("{}/password/change", family(role)),
                Some(body),
                &[ResourceTag::User],
            )
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/2fa/setup
    pub async fn setup_two_factor(&self, role: Role) -> Result<Value> {
        let payload = self
            .post(&format!("{}/2fa/setup", family(role)), None, &[])
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/2fa/verify
    pub async fn verify_two_factor(&self, role: Role, code: &str) -> Result<Value> {
        let payload = self
            .post(
                &format!("{}/2fa/verify", family(role)),
                Some(json!({ "code": code })),
                &[],
            )
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/2fa/disable
    pub async fn disable_two_factor(&self, role: Role, body: Value) -> Result<Value> {
        let payload = self
            .post(&format!("{}/2fa/disable", family(role)), Some(body), &[])
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/email/verify/send
    pub async fn send_verification_email(&self, role: Role) -> Result<Value> {
        let payload = self
            .post(&format!("{}/email/verify/send", family(role)), None, &[])
            .await?;
        Ok(payload.data)
    }

    /// POST {family}/email/verify
    pub async fn verify_email(&self, role: Role, token: &str) -> Result<Value> {
        let payload = self
            .post(
                &format!("{}/email/verify", family(role)),
                Some(json!({ "token": token })),
                &[ResourceTag::User],
            )
            .await?;
        Ok(payload.data)
    }

    /// GET {family}/sessions
    pub async fn active_sessions(&self, role: Role) -> Result<Vec<DeviceSession>> {
        let payload = self
            .get_cached(&format!("{}/sessions", family(role)), &[], &[])
            .await?;
        Ok(payload.pick("sessions").decode()?)
    }

    /// DELETE {family}/sessions/:id
    pub async fn revoke_session(&self, role: Role, session_id: &str) -> Result<()> {
        self.delete(
            &format!("{}/sessions/{}", family(role), encode_segment(session_id)),
            &[],
        )
        .await?;
        Ok(())
    }

    /// DELETE {family}/sessions
    pub async fn revoke_all_sessions(&self, role: Role) -> Result<()> {
        self.delete(&format!("{}/sessions", family(role)), &[]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_prefix_matches_role() {
        assert_eq!(family(Role::SuperAdmin), "/api/super-admin");
        assert_eq!(family(Role::Reseller), "/api/reseller");
    }
}
