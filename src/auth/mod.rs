//! Authentication and authorization
//!
//! The permission model (pure predicates plus the forced-grant table), the
//! persisted session store, the static route table, and the route guard.

pub mod guard;
pub mod permissions;
pub mod roles;
pub mod routes;
pub mod session;
pub mod storage;

pub use guard::{GuardDecision, RouteRequest, decide};
pub use permissions::{
    PermissionSet, default_permissions, has_all_permissions, has_any_permission, has_permission,
};
pub use roles::{Role, has_any_role, has_role};
pub use routes::{Route, can_access_route};
pub use session::{Credentials, Identity, IdentityPatch, Session, SessionStore};
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage, StoredSession};
