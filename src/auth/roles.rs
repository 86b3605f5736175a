//! Role definitions
//!
//! The backend exposes two identity classes, each with its own endpoint
//! family and default permission profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse identity class of a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator with full access
    SuperAdmin,
    /// Partner managing their assigned salons
    Reseller,
}

impl Role {
    /// Wire representation used by the backend and the persisted session
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Reseller => "reseller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" | "super-admin" => Ok(Role::SuperAdmin),
            "reseller" => Ok(Role::Reseller),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Check if a user's role matches the required role exactly.
pub fn has_role(role: Option<Role>, required: Role) -> bool {
    role == Some(required)
}

/// Check if a user's role is one of the listed roles.
pub fn has_any_role(role: Option<Role>, required: &[Role]) -> bool {
    match role {
        Some(role) => required.contains(&role),
        None => false,
    }
}
