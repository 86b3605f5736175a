//! Profile screen: fetch the account through the session's role family and
//! push edits back. Only resellers carry editable contact details; the
//! super-admin account is managed out of band.

use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::ProfileOutcome;
use crate::auth::roles::Role;
use crate::auth::session::{IdentityPatch, SessionStore};
use crate::screens::ScreenQuery;
use crate::utils::validation;

pub async fn load(client: &ApiClient, role: Role) -> ScreenQuery<ProfileOutcome> {
    match role {
        Role::SuperAdmin => client.get_super_admin_profile().await.into(),
        Role::Reseller => client.get_reseller_profile().await.into(),
    }
}

/// Validate and submit a profile edit, then mirror it into the session so
/// the header renders the new name without a refetch.
pub async fn update(
    client: &ApiClient,
    session: &SessionStore,
    role: Role,
    patch: IdentityPatch,
) -> Result<()> {
    match role {
        Role::Reseller => {}
        Role::SuperAdmin => {
            return Err(ApiError::Validation(
                "the super admin profile cannot be edited here".into(),
            ));
        }
    }

    if let Some(email) = patch.email.as_deref() {
        if !validation::is_valid_email(email) {
            return Err(ApiError::Validation(format!("invalid email '{email}'")));
        }
    }
    if let Some(contact) = patch.contact.as_deref() {
        if !validation::is_valid_phone(contact) {
            return Err(ApiError::Validation(
                "contact number must be 10 digits".into(),
            ));
        }
    }

    let mut body = serde_json::Map::new();
    if let Some(name) = &patch.name {
        body.insert("name".into(), json!(name));
    }
    if let Some(email) = &patch.email {
        body.insert("email".into(), json!(email));
    }
    if let Some(contact) = &patch.contact {
        body.insert("contact".into(), json!(contact));
    }
    if let Some(address) = &patch.address {
        body.insert("address".into(), json!(address));
    }
    if let Some(city) = &patch.city {
        body.insert("city".into(), json!(city));
    }

    client
        .update_reseller_profile(serde_json::Value::Object(body))
        .await?;
    session.update_user(patch);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::api::client::NullNavigator;
    use crate::auth::storage::MemorySessionStorage;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, Settings};

    fn fixtures() -> (ApiClient, Arc<SessionStore>) {
        let settings = Settings {
            api_base_url: url::Url::parse(DEFAULT_BASE_URL).unwrap(),
            session_file: std::env::temp_dir().join("qxp-profile-test.json"),
            cache_ttl: DEFAULT_CACHE_TTL,
        };
        let session = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
        let client = ApiClient::new(&settings, session.clone(), Arc::new(NullNavigator)).unwrap();
        (client, session)
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_any_request() {
        let (client, session) = fixtures();
        let patch = IdentityPatch {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        let err = update(&client, &session, Role::Reseller, patch)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn invalid_phone_is_rejected_before_any_request() {
        let (client, session) = fixtures();
        let patch = IdentityPatch {
            contact: Some("12345".into()),
            ..Default::default()
        };
        let err = update(&client, &session, Role::Reseller, patch)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
