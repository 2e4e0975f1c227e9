//! Typed request boundary for status-change submissions.
//!
//! Client payloads arrive as loosely-typed strings. This module validates
//! them into tagged request structs with every field enumerated, so the rest
//! of the system only ever sees recognized enum values. Unknown role or
//! status strings are rejected with [`TransitionError::InvalidArgument`] and
//! logged - they are data errors, not legitimate permission denials.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;
use weevil_types::{BugId, BugStatus};

use crate::enforcement::{Result, TransitionError, TransitionGuard};
use crate::roles::Role;

/// A status-change submission as deserialized from a client payload.
///
/// All-string form; nothing about it is trusted until [`validate`] runs.
///
/// [`validate`]: RawStatusChange::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatusChange {
    /// Bug the change targets.
    pub bug_id: u64,

    /// Wire name of the actor's role.
    pub actor_role: String,

    /// Wire name of the status the client believes the bug holds.
    pub current_status: String,

    /// Wire name of the requested status.
    pub target_status: String,
}

impl RawStatusChange {
    /// Validates this payload into a typed request.
    ///
    /// Fails closed: any unrecognized role or status string is an
    /// [`TransitionError::InvalidArgument`], logged with the offending value.
    pub fn validate(self) -> Result<StatusChangeRequest> {
        let actor_role = Role::from_str(&self.actor_role).map_err(|e| {
            warn!(bug_id = self.bug_id, value = %self.actor_role, "Rejected payload with unknown role");
            TransitionError::InvalidArgument(e.to_string())
        })?;

        let current_status = BugStatus::from_str(&self.current_status).map_err(|e| {
            warn!(bug_id = self.bug_id, value = %self.current_status, "Rejected payload with unknown status");
            TransitionError::InvalidArgument(e.to_string())
        })?;

        let target_status = BugStatus::from_str(&self.target_status).map_err(|e| {
            warn!(bug_id = self.bug_id, value = %self.target_status, "Rejected payload with unknown status");
            TransitionError::InvalidArgument(e.to_string())
        })?;

        Ok(StatusChangeRequest {
            bug_id: BugId::new(self.bug_id),
            actor_role,
            current_status,
            target_status,
        })
    }
}

/// A validated status-change request.
///
/// Every field is a recognized enum value; downstream code never re-parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// Bug the change targets.
    pub bug_id: BugId,

    /// The actor's permission class.
    pub actor_role: Role,

    /// Status the client believes the bug holds.
    ///
    /// Advisory: the authoritative `from` is whatever the server reads under
    /// its own concurrency control at commit time.
    pub current_status: BugStatus,

    /// Requested status.
    pub target_status: BugStatus,
}

impl StatusChangeRequest {
    /// Pre-submission guard: checks the request against the policy so the UI
    /// can short-circuit with a user-facing error instead of a round trip.
    pub fn check(&self) -> Result<()> {
        TransitionGuard::new(self.actor_role).authorize(self.current_status, self.target_status)
    }
}
