//! Authentication endpoints
//!
//! Login, logout, profile and token refresh, for both role families. Login
//! responses are normalized here: Mongo-style `_id` handling, role
//! defaulting, and the default permission profile when the backend omits
//! permissions.

use serde::Deserialize;
use serde_json::json;

use crate::api::cache::ResourceTag;
use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::{LoginOutcome, ProfileOutcome};
use crate::auth::permissions::{PermissionSet, default_permissions};
use crate::auth::roles::Role;
use crate::auth::session::Identity;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserData {
    #[serde(flatten)]
    identity: Identity,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    permissions: Option<PermissionSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    user: UserData,
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    user: UserData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshData {
    access_token: String,
}

fn login_outcome(data: LoginData, fallback_role: Role) -> LoginOutcome {
    let role = data.user.role.unwrap_or(fallback_role);
    LoginOutcome {
        user: data.user.identity,
        role,
        permissions: Some(
            data.user
                .permissions
                .unwrap_or_else(|| default_permissions(role)),
        ),
        token: data.access_token,
        refresh_token: data.refresh_token,
    }
}

fn profile_outcome(data: ProfileData, fallback_role: Role) -> ProfileOutcome {
    let role = data.user.role.unwrap_or(fallback_role);
    ProfileOutcome {
        user: data.user.identity,
        role,
        permissions: data
            .user
            .permissions
            .unwrap_or_else(|| default_permissions(role)),
    }
}

impl ApiClient {
    /// POST /api/super-admin/auth/login
    pub async fn login_super_admin(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let payload = self
            .post(
                "/api/super-admin/auth/login",
                Some(json!({"email": email, "password": password})),
                &[],
            )
            .await?;
        let data: LoginData = payload.decode()?;
        Ok(login_outcome(data, Role::SuperAdmin))
    }

    /// POST /api/reseller/auth/login
    pub async fn login_reseller(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let payload = self
            .post(
                "/api/reseller/auth/login",
                Some(json!({"email": email, "password": password})),
                &[],
            )
            .await?;
        let data: LoginData = payload.decode()?;
        Ok(login_outcome(data, Role::Reseller))
    }

    /// POST /api/super-admin/auth/logout
    pub async fn logout_super_admin(&self) -> Result<()> {
        self.post("/api/super-admin/auth/logout", None, &[]).await?;
        Ok(())
    }

    /// POST /api/reseller/auth/logout
    pub async fn logout_reseller(&self) -> Result<()> {
        self.post("/api/reseller/auth/logout", None, &[]).await?;
        Ok(())
    }

    /// GET /api/super-admin/auth/profile
    pub async fn get_super_admin_profile(&self) -> Result<ProfileOutcome> {
        let payload = self
            .get_cached("/api/super-admin/auth/profile", &[], &[ResourceTag::User])
            .await?;
        let data: ProfileData = payload.decode()?;
        Ok(profile_outcome(data, Role::SuperAdmin))
    }

    /// GET /api/reseller/auth/profile
    pub async fn get_reseller_profile(&self) -> Result<ProfileOutcome> {
        let payload = self
            .get_cached("/api/reseller/auth/profile", &[], &[ResourceTag::User])
            .await?;
        let data: ProfileData = payload.decode()?;
        Ok(profile_outcome(data, Role::Reseller))
    }

    /// PUT /api/reseller/auth/profile
    pub async fn update_reseller_profile(&self, body: serde_json::Value) -> Result<()> {
        self.put("/api/reseller/auth/profile", Some(body), &[ResourceTag::User])
            .await?;
        Ok(())
    }

    /// POST /api/super-admin/auth/refresh-token, returning the new access
    /// token.
    pub async fn refresh_super_admin_token(&self, refresh_token: &str) -> Result<String> {
        self.refresh_token("/api/super-admin/auth/refresh-token", refresh_token)
            .await
    }

    /// POST /api/reseller/auth/refresh-token, returning the new access
    /// token.
    pub async fn refresh_reseller_token(&self, refresh_token: &str) -> Result<String> {
        self.refresh_token("/api/reseller/auth/refresh-token", refresh_token)
            .await
    }

    async fn refresh_token(&self, path: &str, refresh_token: &str) -> Result<String> {
        let payload = self
            .post(path, Some(json!({"refresh_token": refresh_token})), &[])
            .await?;
        let data: RefreshData = payload.decode()?;
        if data.access_token.is_empty() {
            return Err(ApiError::Validation(
                "token refresh returned an empty access token".into(),
            ));
        }
        Ok(data.access_token)
    }
}
