//! Policy enforcement logic.
//!
//! Converts the pure decisions in [`crate::policy`] into the error taxonomy
//! callers surface to users, with structured audit logging. This is the
//! client-side guard; the server-side enforcement point is an external
//! collaborator expected to run the same check before committing the write,
//! so a pass here is advisory, never authoritative.

use thiserror::Error;
use tracing::{info, warn};
use weevil_types::BugStatus;

use crate::policy::{available_transitions, can_transition};
use crate::roles::Role;

/// Error type for transition enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Transition requested but not permitted for the actor's role.
    #[error("role {role} may not move a bug from {from} to {to}")]
    PermissionDenied {
        role: Role,
        from: BugStatus,
        to: BugStatus,
    },

    /// Role or status value outside the recognized enumeration.
    ///
    /// A programming or data error, distinguishable from a legitimate
    /// denial; raised only at the string boundary where out-of-enum values
    /// can exist at all.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for enforcement operations.
pub type Result<T> = std::result::Result<T, TransitionError>;

/// Enforcement guard for one actor's role.
///
/// Wraps the pure decision functions and:
/// - converts denials into [`TransitionError::PermissionDenied`]
/// - emits structured audit events for every decision
pub struct TransitionGuard {
    /// Role of the actor whose requests this guard checks.
    role: Role,

    /// Whether to log decisions.
    audit_enabled: bool,
}

impl TransitionGuard {
    /// Creates a guard for the given role.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            audit_enabled: true,
        }
    }

    /// Disables audit logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    /// Authorizes a transition, or explains why it is rejected.
    ///
    /// **Audit:** logs every decision.
    pub fn authorize(&self, from: BugStatus, to: BugStatus) -> Result<()> {
        let allowed = can_transition(self.role, from, to);

        if self.audit_enabled {
            if allowed {
                info!(
                    role = %self.role,
                    from = %from,
                    to = %to,
                    "Transition granted"
                );
            } else {
                warn!(
                    role = %self.role,
                    from = %from,
                    to = %to,
                    "Transition denied"
                );
            }
        }

        if allowed {
            Ok(())
        } else {
            Err(TransitionError::PermissionDenied {
                role: self.role,
                from,
                to,
            })
        }
    }

    /// Enumerates the statuses this actor may move a bug to from `from`.
    ///
    /// Used to populate transition-selection controls; an empty result means
    /// the control should be hidden or disabled.
    pub fn available(&self, from: BugStatus) -> Vec<BugStatus> {
        available_transitions(self.role, from)
    }

    /// Returns the role this guard checks.
    pub fn role(&self) -> Role {
        self.role
    }
}
