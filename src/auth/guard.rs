//! Route guard
//!
//! Pure, synchronous authorization decision evaluated on every navigation.
//! First failing check wins; there are no retries and no partial renders.

use crate::auth::permissions;
use crate::auth::roles::Role;
use crate::auth::routes::{self, Route};
use crate::auth::session::Session;

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view.
    Render,
    /// Not authenticated: go to login, remembering where the user wanted
    /// to be so a successful login can resume there.
    RedirectToLogin { return_to: Route },
    /// Authenticated but not allowed here: go to the landing view. This is
    /// "you can't be here", not an error, so no message accompanies it.
    RedirectToLanding,
}

/// A navigation request: the target route plus any requirement the
/// navigation surface declares on top of the static route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest {
    pub route: Route,
    pub required_permissions: &'static [&'static str],
    pub required_role: Option<Role>,
}

impl RouteRequest {
    /// Request for a route with its standard declared requirements.
    pub fn new(route: Route) -> Self {
        Self {
            route,
            required_permissions: routes::declared_requirements(route),
            required_role: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }
}

/// Decide whether `session` may open `request`, in order:
/// authentication, role, declared permissions, static route table.
pub fn decide(session: &Session, request: &RouteRequest) -> GuardDecision {
    if !session.is_authenticated {
        return GuardDecision::RedirectToLogin {
            return_to: request.route,
        };
    }

    if let Some(required) = request.required_role {
        if session.role != Some(required) {
            return GuardDecision::RedirectToLanding;
        }
    }

    if !request.required_permissions.is_empty()
        && !permissions::has_any_permission(&session.permissions, request.required_permissions, None)
    {
        return GuardDecision::RedirectToLanding;
    }

    if !routes::can_access_route(&session.permissions, request.route.path()) {
        return GuardDecision::RedirectToLanding;
    }

    GuardDecision::Render
}
