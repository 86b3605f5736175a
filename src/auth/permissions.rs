//! Permission model
//!
//! Pure authorization predicates over a permission set and role. Permissions
//! are namespaced `"resource:action"` strings delivered by the backend as a
//! key -> bool map; the fixed key set is enumerated in [`keys`].
//!
//! Resellers carry a small number of forced grants (see [`FORCED_GRANTS`]):
//! capabilities they always had and must keep even when the backend omits or
//! denies the flag. The table is the single source of truth for that policy.

use std::collections::HashMap;

use crate::auth::roles::Role;

/// Backend-supplied permission map, key -> granted.
pub type PermissionSet = HashMap<String, bool>;

/// The fixed permission key set.
pub mod keys {
    // Reseller management
    pub const RESELLER_CREATE: &str = "reseller:create";
    pub const RESELLER_MANAGE: &str = "reseller:manage";

    // License management
    pub const LICENSE_GENERATE: &str = "license:generate";
    pub const LICENSE_APPROVE_REJECT: &str = "license:approveReject";
    pub const LICENSE_VIEW: &str = "license:view";

    // Business management
    pub const SALON_MANAGE_ALL: &str = "salon:manageAll";
    pub const RESTAURANT_MANAGE_ALL: &str = "restaurant:manageAll";
    pub const SALON_ASSIGN_RESELLER: &str = "salon:assignReseller";
    pub const RESTAURANT_ASSIGN_RESELLER: &str = "restaurant:assignReseller";
    pub const SALON_MANAGE_ASSIGNED: &str = "salon:manageAssigned";
    pub const RESTAURANT_MANAGE_ASSIGNED: &str = "restaurant:manageAssigned";

    // Analytics
    pub const ANALYTICS_VIEW_PLATFORM: &str = "analytics:viewPlatform";
    pub const ANALYTICS_VIEW_RESELLER: &str = "analytics:viewReseller";

    // Categories & subscriptions
    pub const CATEGORIES_MANAGE: &str = "categories:manage";
    pub const SUBSCRIPTIONS_MANAGE: &str = "subscriptions:manage";

    // Export
    pub const EXPORT_DATA: &str = "export:data";
}

/// Where a forced grant is enforced.
///
/// `Predicate` grants short-circuit [`has_permission`] itself, so the
/// capability holds even against a stale or hostile permission map.
/// `SessionOnly` grants are applied when credentials are set or a persisted
/// session is hydrated, but the predicate still defers to the stored map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantScope {
    Predicate,
    SessionOnly,
}

/// Permission values granted unconditionally for a role, regardless of what
/// the backend sent. New backend permission flags must never lock resellers
/// out of license issuance, so the override lives client-side.
pub const FORCED_GRANTS: &[(Role, &str, GrantScope)] = &[
    (Role::Reseller, keys::LICENSE_GENERATE, GrantScope::Predicate),
    (Role::Reseller, keys::LICENSE_VIEW, GrantScope::SessionOnly),
];

/// Keys forced true for `role` when building or migrating a session.
pub fn forced_session_grants(role: Role) -> Vec<&'static str> {
    FORCED_GRANTS
        .iter()
        .filter(|(r, _, _)| *r == role)
        .map(|(_, key, _)| *key)
        .collect()
}

fn forced_predicate_grant(role: Role, key: &str) -> bool {
    FORCED_GRANTS
        .iter()
        .any(|(r, k, scope)| *r == role && *k == key && *scope == GrantScope::Predicate)
}

/// Check if the permission set grants `key`.
///
/// True iff the map holds an explicit `true`, or a forced grant applies for
/// `role` (reseller + `license:generate`), even when the key is absent or
/// set false.
pub fn has_permission(permissions: &PermissionSet, key: &str, role: Option<Role>) -> bool {
    if key.is_empty() {
        return false;
    }
    if permissions.get(key).copied().unwrap_or(false) {
        return true;
    }
    role.is_some_and(|role| forced_predicate_grant(role, key))
}

/// Check if at least one of `required` is granted.
///
/// An empty `required` slice yields false. Conjunction/disjunction over zero
/// elements is conventionally true/false respectively, but the platform has
/// always treated "no keys requested" as a failed check in both functions;
/// callers rely on it, so the behavior is kept pending a product decision.
pub fn has_any_permission(permissions: &PermissionSet, required: &[&str], role: Option<Role>) -> bool {
    if required.is_empty() {
        return false;
    }
    required
        .iter()
        .any(|key| has_permission(permissions, key, role))
}

/// Check if every one of `required` is granted. Empty slice yields false,
/// same caveat as [`has_any_permission`].
pub fn has_all_permissions(
    permissions: &PermissionSet,
    required: &[&str],
    role: Option<Role>,
) -> bool {
    if required.is_empty() {
        return false;
    }
    required
        .iter()
        .all(|key| has_permission(permissions, key, role))
}

/// The complete fixed permission profile for a role.
///
/// Used whenever a login or profile response omits permissions, and as the
/// base layer under server-supplied values for resellers.
pub fn default_permissions(role: Role) -> PermissionSet {
    let grant = |key: &str, value: bool| (key.to_string(), value);

    match role {
        Role::SuperAdmin => [
            grant(keys::RESELLER_CREATE, true),
            grant(keys::RESELLER_MANAGE, true),
            grant(keys::LICENSE_GENERATE, true),
            grant(keys::LICENSE_APPROVE_REJECT, true),
            grant(keys::SALON_MANAGE_ALL, true),
            grant(keys::RESTAURANT_MANAGE_ALL, true),
            grant(keys::SALON_ASSIGN_RESELLER, true),
            grant(keys::RESTAURANT_ASSIGN_RESELLER, true),
            grant(keys::ANALYTICS_VIEW_PLATFORM, true),
            grant(keys::ANALYTICS_VIEW_RESELLER, true),
            grant(keys::CATEGORIES_MANAGE, true),
            grant(keys::SUBSCRIPTIONS_MANAGE, true),
            grant(keys::EXPORT_DATA, true),
        ]
        .into_iter()
        .collect(),
        Role::Reseller => [
            grant(keys::RESELLER_CREATE, false),
            grant(keys::RESELLER_MANAGE, false),
            grant(keys::LICENSE_GENERATE, true),
            grant(keys::LICENSE_APPROVE_REJECT, false),
            grant(keys::LICENSE_VIEW, true),
            grant(keys::SALON_MANAGE_ALL, false),
            grant(keys::RESTAURANT_MANAGE_ALL, false),
            grant(keys::SALON_ASSIGN_RESELLER, false),
            grant(keys::RESTAURANT_ASSIGN_RESELLER, false),
            grant(keys::SALON_MANAGE_ASSIGNED, true),
            grant(keys::RESTAURANT_MANAGE_ASSIGNED, true),
            grant(keys::ANALYTICS_VIEW_PLATFORM, false),
            grant(keys::ANALYTICS_VIEW_RESELLER, true),
            grant(keys::CATEGORIES_MANAGE, false),
            grant(keys::SUBSCRIPTIONS_MANAGE, false),
            grant(keys::EXPORT_DATA, false),
        ]
        .into_iter()
        .collect(),
    }
}
