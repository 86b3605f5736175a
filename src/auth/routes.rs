//! Route table
//!
//! Static mapping from navigable views to the permissions that may open
//! them. A route maps to a list of acceptable permission keys with OR
//! semantics; an empty list means any authenticated identity may enter.

use crate::auth::permissions::{self, PermissionSet, keys};

/// A navigable view of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    UserManagement,
    LicenseManagement,
    ResellerManagement,
    ManageUser,
    Profile,
}

impl Route {
    /// The default authenticated landing view. Root and unknown paths
    /// resolve here, as do authorization denials for logged-in users.
    pub const LANDING: Route = Route::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::UserManagement => "/user-management",
            Route::LicenseManagement => "/license-management",
            Route::ResellerManagement => "/reseller-management",
            Route::ManageUser => "/manage-user",
            Route::Profile => "/profile",
        }
    }

    /// Resolve a path to a route. Root and unknown paths fall back to the
    /// landing view; `/manage-user/:id` style suffixes are accepted.
    pub fn from_path(path: &str) -> Route {
        let normalized = path.trim_end_matches('/');
        match normalized {
            "/login" => Route::Login,
            "" | "/" | "/dashboard" => Route::Dashboard,
            "/user-management" => Route::UserManagement,
            "/license-management" => Route::LicenseManagement,
            "/reseller-management" => Route::ResellerManagement,
            "/profile" => Route::Profile,
            other if other.starts_with("/manage-user") => Route::ManageUser,
            _ => Route::LANDING,
        }
    }
}

/// Salon management is open to both the platform-wide and the
/// assigned-scope permission holders, for either business type.
const SALON_MANAGEMENT_KEYS: &[&str] = &[
    keys::SALON_MANAGE_ALL,
    keys::RESTAURANT_MANAGE_ALL,
    keys::SALON_MANAGE_ASSIGNED,
    keys::RESTAURANT_MANAGE_ASSIGNED,
];

/// Route -> acceptable permissions (any one suffices).
///
/// Routes absent from this table are not permission-gated at the table
/// level; `/manage-user` is deliberately unmapped and relies on its
/// declared per-route requirement instead.
pub fn route_permissions(route: Route) -> Option<&'static [&'static str]> {
    match route {
        Route::Dashboard => Some(&[
            keys::ANALYTICS_VIEW_PLATFORM,
            keys::ANALYTICS_VIEW_RESELLER,
        ]),
        Route::UserManagement => Some(SALON_MANAGEMENT_KEYS),
        Route::LicenseManagement => Some(&[keys::LICENSE_GENERATE, keys::LICENSE_VIEW]),
        Route::ResellerManagement => Some(&[keys::RESELLER_MANAGE]),
        // Accessible to all authenticated users
        Route::Profile => Some(&[]),
        Route::Login | Route::ManageUser => None,
    }
}

/// Check whether the permission set may open the route at `path`.
///
/// Unmapped routes and routes with an empty requirement list are open to
/// any authenticated identity; otherwise any one listed permission
/// suffices. No role is consulted here: the table check runs over the
/// stored permission map alone.
pub fn can_access_route(permissions: &PermissionSet, path: &str) -> bool {
    let route = Route::from_path(path);
    match route_permissions(route) {
        None => true,
        Some([]) => true,
        Some(required) => permissions::has_any_permission(permissions, required, None),
    }
}

/// Per-route requirements declared on the navigation surface, checked by the
/// guard in addition to the static table.
pub fn declared_requirements(route: Route) -> &'static [&'static str] {
    match route {
        Route::Dashboard => &[
            keys::ANALYTICS_VIEW_PLATFORM,
            keys::ANALYTICS_VIEW_RESELLER,
        ],
        Route::UserManagement | Route::ManageUser => SALON_MANAGEMENT_KEYS,
        Route::LicenseManagement => &[keys::LICENSE_GENERATE, keys::LICENSE_VIEW],
        Route::ResellerManagement => &[keys::RESELLER_MANAGE],
        Route::Profile | Route::Login => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::permissions::PermissionSet;

    #[test]
    fn profile_is_open_to_any_authenticated_identity() {
        assert!(can_access_route(&PermissionSet::new(), "/profile"));
    }

    #[test]
    fn reseller_management_requires_the_manage_permission() {
        let mut perms = PermissionSet::new();
        assert!(!can_access_route(&perms, "/reseller-management"));

        perms.insert(keys::RESELLER_MANAGE.to_string(), true);
        assert!(can_access_route(&perms, "/reseller-management"));
    }

    #[test]
    fn unmapped_routes_are_not_table_gated() {
        assert!(can_access_route(&PermissionSet::new(), "/manage-user"));
        assert!(can_access_route(&PermissionSet::new(), "/manage-user/42"));
    }

    #[test]
    fn unknown_paths_resolve_to_landing() {
        assert_eq!(Route::from_path("/no-such-view"), Route::LANDING);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn dashboard_accepts_either_analytics_scope() {
        let mut perms = PermissionSet::new();
        perms.insert(keys::ANALYTICS_VIEW_RESELLER.to_string(), true);
        assert!(can_access_route(&perms, "/dashboard"));

        let mut perms = PermissionSet::new();
        perms.insert(keys::ANALYTICS_VIEW_PLATFORM.to_string(), true);
        assert!(can_access_route(&perms, "/dashboard"));
    }

    #[test]
    fn table_check_ignores_forced_role_grants() {
        // can_access_route runs without a role, so a bare map denies
        // license management even though the reseller predicate would grant
        // license:generate.
        assert!(!can_access_route(&PermissionSet::new(), "/license-management"));
    }
}
