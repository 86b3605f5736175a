//! Session store
//!
//! Single source of truth for "who is logged in, with what role and
//! rights". The live session is held behind a lock and mirrored into
//! durable storage on every mutation; persistence failures are logged and
//! swallowed so the in-memory session stays authoritative for the current
//! process lifetime.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::permissions::{self, PermissionSet};
use crate::auth::roles::Role;
use crate::auth::storage::{SessionStorage, StoredSession};

/// The authenticated identity, as delivered by a login or profile response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "resellerId", skip_serializing_if = "Option::is_none")]
    pub reseller_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Partial identity update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

impl IdentityPatch {
    fn apply(&self, identity: &mut Identity) {
        if let Some(name) = &self.name {
            identity.name = name.clone();
        }
        if let Some(email) = &self.email {
            identity.email = email.clone();
        }
        if let Some(contact) = &self.contact {
            identity.contact = Some(contact.clone());
        }
        if let Some(address) = &self.address {
            identity.address = Some(address.clone());
        }
        if let Some(city) = &self.city {
            identity.city = Some(city.clone());
        }
    }
}

/// Live session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<Identity>,
    pub role: Option<Role>,
    pub permissions: PermissionSet,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    fn to_stored(&self) -> StoredSession {
        StoredSession {
            user: self.user.clone(),
            role: self.role,
            permissions: self.permissions.clone(),
            token: self.token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// Payload accepted by [`SessionStore::set_credentials`].
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: Identity,
    pub role: Role,
    pub permissions: Option<PermissionSet>,
    pub token: String,
    pub refresh_token: Option<String>,
}

/// Holds the one live session per running client.
pub struct SessionStore {
    session: RwLock<Session>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Create an unauthenticated store over the given storage backend.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            session: RwLock::new(Session::default()),
            storage,
        }
    }

    /// Read the persisted record into the live session.
    ///
    /// Reseller records written before `license:view`/`license:generate`
    /// existed are patched in place and re-persisted once; a second hydrate
    /// of the patched record performs no further write.
    pub fn hydrate(&self) {
        let record = match self.storage.load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("no persisted session, starting unauthenticated");
                return;
            }
            Err(err) => {
                warn!("failed to load session from storage: {err}");
                return;
            }
        };

        let mut record = record;
        if record.role == Some(Role::Reseller) {
            let mut needs_update = false;
            for key in permissions::forced_session_grants(Role::Reseller) {
                // Only absent keys are filled; an explicit value survives
                // migration and is corrected at next login instead.
                if !record.permissions.contains_key(key) {
                    record.permissions.insert(key.to_string(), true);
                    needs_update = true;
                }
            }
            if needs_update {
                debug!("migrating persisted reseller session permissions");
                if let Err(err) = self.storage.save(&record) {
                    warn!("failed to persist migrated session: {err}");
                }
            }
        }

        let is_authenticated = record.token.is_some();
        *self.session.write() = Session {
            user: record.user,
            role: record.role,
            permissions: record.permissions,
            token: record.token,
            refresh_token: record.refresh_token,
            is_authenticated,
        };
    }

    /// Install credentials after a successful login and persist them.
    ///
    /// Reseller permissions are built in three layers with later layers
    /// winning: role defaults, then server-supplied values, then the forced
    /// grants.
    pub fn set_credentials(&self, credentials: Credentials) {
        let Credentials {
            user,
            role,
            permissions: supplied,
            token,
            refresh_token,
        } = credentials;

        let mut effective = match role {
            Role::Reseller => {
                let mut merged = permissions::default_permissions(Role::Reseller);
                merged.extend(supplied.unwrap_or_default());
                merged
            }
            Role::SuperAdmin => supplied.unwrap_or_default(),
        };
        if role == Role::Reseller {
            for key in permissions::forced_session_grants(Role::Reseller) {
                effective.insert(key.to_string(), true);
            }
        }

        let session = Session {
            user: Some(user),
            role: Some(role),
            permissions: effective,
            token: Some(token),
            refresh_token,
            is_authenticated: true,
        };
        let stored = session.to_stored();
        *self.session.write() = session;
        self.persist(&stored);
    }

    /// Shallow-merge identity fields into the live and persisted session.
    pub fn update_user(&self, patch: IdentityPatch) {
        {
            let mut session = self.session.write();
            if let Some(user) = session.user.as_mut() {
                patch.apply(user);
            }
        }
        self.read_modify_write(|record| {
            if let Some(user) = record.user.as_mut() {
                patch.apply(user);
            }
        });
    }

    /// Shallow-merge permission entries into the live and persisted session.
    pub fn update_permissions(&self, patch: &PermissionSet) {
        {
            let mut session = self.session.write();
            session
                .permissions
                .extend(patch.iter().map(|(k, v)| (k.clone(), *v)));
        }
        self.read_modify_write(|record| {
            record
                .permissions
                .extend(patch.iter().map(|(k, v)| (k.clone(), *v)));
        });
    }

    /// Replace the access token, typically after a refresh.
    pub fn update_token(&self, token: String) {
        {
            let mut session = self.session.write();
            session.token = Some(token.clone());
        }
        self.read_modify_write(move |record| {
            record.token = Some(token.clone());
        });
    }

    /// Clear all session fields and delete the persisted record.
    pub fn logout(&self) {
        *self.session.write() = Session::default();
        if let Err(err) = self.storage.delete() {
            warn!("failed to remove session from storage: {err}");
        }
    }

    /// A point-in-time copy of the live session.
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token.clone()
    }

    fn persist(&self, record: &StoredSession) {
        if let Err(err) = self.storage.save(record) {
            warn!("failed to save session to storage: {err}");
        }
    }

    /// Merge a mutation into the freshly re-read persisted record rather
    /// than the in-memory snapshot, so a concurrent writer's sibling fields
    /// survive (token refresh racing a profile update).
    fn read_modify_write(&self, mutate: impl FnOnce(&mut StoredSession)) {
        let mut record = match self.storage.load() {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(err) => {
                warn!("failed to re-read session from storage: {err}");
                return;
            }
        };
        mutate(&mut record);
        self.persist(&record);
    }
}
