//! The transition rule table.
//!
//! An ordered, closed mapping from (role, from, to) to allowed. The table is
//! `'static` configuration data, immutable at runtime: requests never mutate
//! it. Absence of a matching rule means denied.
//!
//! `CodeReview`, `QaTesting`, and `Rejected` appear in no rule below. That
//! mirrors the product's permission table as shipped: only the universal
//! roles can route a bug through those statuses, and for every other role
//! they are dead ends. Flagged as a probable gap in the original design;
//! adding rules for them is a deliberate policy change, not a bug fix here.

use serde::{Deserialize, Serialize};
use weevil_types::BugStatus;

use crate::roles::Role;

/// A single allowed (from, to) edge in a role's transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRule {
    /// Status the bug currently holds.
    pub from: BugStatus,

    /// Status the transition requests.
    pub to: BugStatus,
}

impl TransitionRule {
    const fn new(from: BugStatus, to: BugStatus) -> Self {
        Self { from, to }
    }
}

/// What the rule table grants a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAuthority {
    /// Every transition is allowed, no table consultation needed.
    Universal,

    /// Only the listed transitions are allowed.
    Enumerated(&'static [TransitionRule]),

    /// No transition is allowed.
    Denied,
}

/// Transitions granted to developers.
///
/// Pick up new work, resolve it, restart work on a reopened bug.
pub const DEVELOPER_RULES: &[TransitionRule] = &[
    TransitionRule::new(BugStatus::Open, BugStatus::InProgress),
    TransitionRule::new(BugStatus::InProgress, BugStatus::Resolved),
    TransitionRule::new(BugStatus::Reopened, BugStatus::InProgress),
];

/// Transitions granted to the verification roles (Qa and Tester).
///
/// Close out a resolved bug, or reopen it when verification fails; reopen a
/// closed bug on regression.
pub const VERIFICATION_RULES: &[TransitionRule] = &[
    TransitionRule::new(BugStatus::Resolved, BugStatus::Closed),
    TransitionRule::new(BugStatus::Resolved, BugStatus::Reopened),
    TransitionRule::new(BugStatus::Closed, BugStatus::Reopened),
];

/// Transitions granted to clients.
pub const CLIENT_RULES: &[TransitionRule] =
    &[TransitionRule::new(BugStatus::Closed, BugStatus::Reopened)];

/// Resolves a role to its authority class.
///
/// Priority-ordered, first match wins: universal roles short-circuit before
/// any table lookup. Every role resolves to exactly one class, which keeps
/// the table total - unmatched (role, from, to) combinations are denied, never
/// unknown.
pub fn authority_for(role: Role) -> RoleAuthority {
    match role {
        Role::Admin | Role::ProjectManager => RoleAuthority::Universal,
        Role::Developer => RoleAuthority::Enumerated(DEVELOPER_RULES),
        Role::Qa | Role::Tester => RoleAuthority::Enumerated(VERIFICATION_RULES),
        Role::Client => RoleAuthority::Enumerated(CLIENT_RULES),
        Role::Viewer => RoleAuthority::Denied,
    }
}
