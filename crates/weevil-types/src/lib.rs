//! # weevil-types: Core types for `Weevil`
//!
//! This crate contains shared types used across the `Weevil` workflow core:
//! - Entity IDs ([`BugId`], [`UserId`], [`ProjectId`], [`OrganizationId`])
//! - Temporal types ([`Timestamp`])
//! - Bug lifecycle ([`BugStatus`])
//! - The [`Bug`] record
//!
//! Records carry their fields explicitly. The actor record (`User`) lives in
//! `weevil-policy` next to `Role`: an actor is a permission-layer concern,
//! and keeping it there means permission decisions take explicit context
//! rather than an ambient session lookup.

use std::{
    fmt::{self, Display},
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Entity IDs - All Copy (cheap 8-byte values)
// ============================================================================

/// Unique identifier for a bug report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BugId(u64);

impl BugId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BugId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BugId> for u64 {
    fn from(id: BugId) -> Self {
        id.0
    }
}

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Unique identifier for a project within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProjectId> for u64 {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

/// Unique identifier for a tenant organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrganizationId(u64);

impl OrganizationId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrganizationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<OrganizationId> for u64 {
    fn from(id: OrganizationId) -> Self {
        id.0
    }
}

// ============================================================================
// Timestamp - Copy (8-byte value with monotonic guarantee)
// ============================================================================

/// Wall-clock timestamp with monotonic guarantee within the system.
///
/// Stored as nanoseconds since Unix epoch (1970-01-01 00:00:00 UTC).
/// The workflow core never reads the clock itself; callers construct a
/// timestamp and pass it in, which keeps transition application pure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch (1970-01-01 00:00:00 UTC).
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Creates a timestamp from nanoseconds since Unix epoch.
    pub fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Returns the timestamp as nanoseconds since Unix epoch.
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Creates a timestamp for the current time.
    ///
    /// # Panics
    ///
    /// Panics if the system clock is before Unix epoch (should never happen).
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before Unix epoch");
        Self(duration.as_nanos() as u64)
    }

    /// Creates a timestamp ensuring monotonicity: `max(now, last + 1ns)`.
    ///
    /// Guarantees each timestamp is strictly greater than the previous, even
    /// if the system clock moves backwards or two updates land in the same
    /// nanosecond.
    pub fn now_monotonic(last: Option<Timestamp>) -> Self {
        let now = Self::now();
        match last {
            Some(prev) => {
                if now.0 <= prev.0 {
                    Timestamp(prev.0.saturating_add(1))
                } else {
                    now
                }
            }
            None => now,
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Bug lifecycle status
// ============================================================================

/// Error returned when a status string is outside the recognized enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized bug status: {0:?}")]
pub struct ParseStatusError(pub String);

/// Lifecycle stage of a bug.
///
/// This is the authoritative 8-value enumeration. A bug is created as
/// [`BugStatus::Open`] and moves between stages only through a transition the
/// permission policy allows. There is no single terminal state: `Closed` and
/// `Rejected` end most workflows but remain valid sources for `Reopened`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugStatus {
    /// Newly reported, not yet picked up.
    Open,

    /// A developer is actively working on it.
    InProgress,

    /// Fix is written and awaiting review.
    CodeReview,

    /// Fix passed review and is being verified by QA.
    QaTesting,

    /// The assignee believes the bug is fixed.
    Resolved,

    /// Verified fixed and closed out.
    Closed,

    /// A previously resolved or closed bug that recurred.
    Reopened,

    /// Triaged as not-a-bug, duplicate, or won't-fix.
    Rejected,
}

impl BugStatus {
    /// Every status in declaration order.
    ///
    /// Drives transition enumeration and exhaustive tests; results derived
    /// from this slice are deterministic and duplicate-free.
    pub const ALL: [BugStatus; 8] = [
        BugStatus::Open,
        BugStatus::InProgress,
        BugStatus::CodeReview,
        BugStatus::QaTesting,
        BugStatus::Resolved,
        BugStatus::Closed,
        BugStatus::Reopened,
        BugStatus::Rejected,
    ];

    /// Returns the snake_case wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BugStatus::Open => "open",
            BugStatus::InProgress => "in_progress",
            BugStatus::CodeReview => "code_review",
            BugStatus::QaTesting => "qa_testing",
            BugStatus::Resolved => "resolved",
            BugStatus::Closed => "closed",
            BugStatus::Reopened => "reopened",
            BugStatus::Rejected => "rejected",
        }
    }
}

impl Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BugStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(BugStatus::Open),
            "in_progress" => Ok(BugStatus::InProgress),
            "code_review" => Ok(BugStatus::CodeReview),
            "qa_testing" => Ok(BugStatus::QaTesting),
            "resolved" => Ok(BugStatus::Resolved),
            "closed" => Ok(BugStatus::Closed),
            "reopened" => Ok(BugStatus::Reopened),
            "rejected" => Ok(BugStatus::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

// ============================================================================
// Entity records
// ============================================================================

/// A bug report record.
///
/// Owns a single current `status`, changed only through a transition the
/// permission policy allows. The policy check and the eventual status write
/// are two separate steps: the collaborator committing the write must supply
/// its own concurrency control (compare-and-swap on the current status or a
/// serializable transaction), since two concurrent requests can both pass the
/// check against a stale `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    /// Unique bug identifier.
    pub id: BugId,

    /// Project this bug was filed against.
    pub project: ProjectId,

    /// User who reported the bug.
    pub reporter: UserId,

    /// User currently assigned, if any.
    pub assignee: Option<UserId>,

    /// Current lifecycle stage.
    pub status: BugStatus,

    /// When the bug was created.
    pub created_at: Timestamp,

    /// When the bug was last updated.
    pub updated_at: Timestamp,
}

impl Bug {
    /// Creates a new bug record in the [`BugStatus::Open`] state.
    pub fn new(id: BugId, project: ProjectId, reporter: UserId, created_at: Timestamp) -> Self {
        Self {
            id,
            project,
            reporter,
            assignee: None,
            status: BugStatus::Open,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns a copy of this bug with the given assignee.
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns a copy of this bug with the given status and update time.
    ///
    /// This does not consult the permission policy; use the workflow layer
    /// for policy-checked transitions.
    pub fn with_status(mut self, status: BugStatus, updated_at: Timestamp) -> Self {
        self.status = status;
        self.updated_at = updated_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn id_conversions_round_trip() {
        assert_eq!(u64::from(BugId::new(7)), 7);
        assert_eq!(BugId::from(7), BugId::new(7));
        assert_eq!(UserId::new(3).to_string(), "3");
        assert_eq!(u64::from(ProjectId::new(11)), 11);
        assert_eq!(u64::from(OrganizationId::new(42)), 42);
    }

    #[test]
    fn timestamp_monotonic_never_regresses() {
        let first = Timestamp::now();
        let second = Timestamp::now_monotonic(Some(first));
        assert!(second > first);

        // Even against a timestamp far in the future.
        let future = Timestamp::from_nanos(u64::MAX - 1);
        let next = Timestamp::now_monotonic(Some(future));
        assert_eq!(next.as_nanos(), u64::MAX);
    }

    #[test_case(BugStatus::Open, "open")]
    #[test_case(BugStatus::InProgress, "in_progress")]
    #[test_case(BugStatus::CodeReview, "code_review")]
    #[test_case(BugStatus::QaTesting, "qa_testing")]
    #[test_case(BugStatus::Resolved, "resolved")]
    #[test_case(BugStatus::Closed, "closed")]
    #[test_case(BugStatus::Reopened, "reopened")]
    #[test_case(BugStatus::Rejected, "rejected")]
    fn status_string_round_trip(status: BugStatus, name: &str) {
        assert_eq!(status.as_str(), name);
        assert_eq!(name.parse::<BugStatus>().unwrap(), status);
    }

    #[test]
    fn status_parse_rejects_unknown() {
        let err = "escalated".parse::<BugStatus>().unwrap_err();
        assert!(err.to_string().contains("escalated"));

        // Wire names are snake_case, not the variant names.
        assert!("InProgress".parse::<BugStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_wire_names() {
        let json = serde_json::to_string(&BugStatus::QaTesting).unwrap();
        assert_eq!(json, "\"qa_testing\"");
        let back: BugStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BugStatus::QaTesting);
    }

    #[test]
    fn status_all_covers_every_variant_once() {
        for (i, a) in BugStatus::ALL.iter().enumerate() {
            for b in &BugStatus::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(BugStatus::ALL.len(), 8);
    }

    #[test]
    fn new_bug_starts_open() {
        let t = Timestamp::from_nanos(1_000);
        let bug = Bug::new(BugId::new(1), ProjectId::new(2), UserId::new(3), t);

        assert_eq!(bug.status, BugStatus::Open);
        assert_eq!(bug.assignee, None);
        assert_eq!(bug.created_at, bug.updated_at);
    }

    #[test]
    fn with_status_bumps_updated_at_only() {
        let t0 = Timestamp::from_nanos(1_000);
        let t1 = Timestamp::from_nanos(2_000);
        let bug = Bug::new(BugId::new(1), ProjectId::new(2), UserId::new(3), t0)
            .with_assignee(UserId::new(4))
            .with_status(BugStatus::InProgress, t1);

        assert_eq!(bug.status, BugStatus::InProgress);
        assert_eq!(bug.created_at, t0);
        assert_eq!(bug.updated_at, t1);
        assert_eq!(bug.assignee, Some(UserId::new(4)));
    }

    mod properties {
        use proptest::prelude::*;

        use crate::{BugStatus, Timestamp};

        proptest! {
            /// Monotonic construction never regresses, even against a
            /// corrupted far-future previous timestamp.
            #[test]
            fn monotonic_never_regresses(prev in any::<u64>()) {
                let next = Timestamp::now_monotonic(Some(Timestamp::from_nanos(prev)));
                prop_assert!(next.as_nanos() >= prev);
                if prev < u64::MAX {
                    prop_assert!(next.as_nanos() > prev);
                }
            }

            /// Wire names round-trip through FromStr for every variant.
            #[test]
            fn status_wire_round_trip(idx in 0usize..BugStatus::ALL.len()) {
                let status = BugStatus::ALL[idx];
                prop_assert_eq!(status.as_str().parse::<BugStatus>().unwrap(), status);
            }
        }
    }
}
