//! Role definitions for the permission layer.
//!
//! Defines the 7 roles an authenticated actor can hold. Roles do not nest or
//! inherit; each is checked explicitly against the transition rule table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use weevil_types::UserId;

/// Error returned when a role string is outside the recognized enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role: {0:?}")]
pub struct ParseRoleError(pub String);

/// Permission class assigned to an authenticated actor.
///
/// | Role            | Lifecycle authority                                  |
/// |-----------------|------------------------------------------------------|
/// | Admin           | Any transition                                       |
/// | ProjectManager  | Any transition                                       |
/// | Developer       | Pick up, resolve, re-start reopened bugs             |
/// | Qa              | Verify resolved bugs, reopen regressions             |
/// | Tester          | Same as Qa                                           |
/// | Client          | Reopen closed bugs only                              |
/// | Viewer          | None (read-only)                                     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full authority over the bug lifecycle and everything else.
    Admin,

    /// Full authority over the bug lifecycle within their projects.
    ///
    /// For transition purposes indistinguishable from Admin; the wider
    /// product scopes project managers to their own projects, which is a
    /// collaborator concern, not this table's.
    ProjectManager,

    /// Works on bugs: picks them up, resolves them, restarts reopened ones.
    Developer,

    /// Verifies fixes: closes resolved bugs, reopens regressions.
    Qa,

    /// Same verification authority as Qa.
    ///
    /// Kept as a distinct role because the wider product distinguishes the
    /// two for assignment and reporting.
    Tester,

    /// External customer contact. May reopen a closed bug, nothing else.
    Client,

    /// Read-only access. No transitions.
    Viewer,
}

impl Role {
    /// Every role in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::ProjectManager,
        Role::Developer,
        Role::Qa,
        Role::Tester,
        Role::Client,
        Role::Viewer,
    ];

    /// Returns whether this role may perform any transition unconditionally.
    pub fn has_universal_transition_authority(&self) -> bool {
        matches!(self, Role::Admin | Role::ProjectManager)
    }

    /// Returns the snake_case wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProjectManager => "project_manager",
            Role::Developer => "developer",
            Role::Qa => "qa",
            Role::Tester => "tester",
            Role::Client => "client",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "project_manager" => Ok(Role::ProjectManager),
            "developer" => Ok(Role::Developer),
            "qa" => Ok(Role::Qa),
            "tester" => Ok(Role::Tester),
            "client" => Ok(Role::Client),
            "viewer" => Ok(Role::Viewer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// An authenticated actor: identity plus permission class.
///
/// Always passed explicitly into the functions that need it, never read from
/// ambient storage, so permission checks stay pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,

    /// Permission class assigned to this actor.
    pub role: Role,
}

impl User {
    /// Creates a new user record.
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}
