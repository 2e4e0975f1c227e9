//! # Weevil - workflow and permission core
//!
//! Facade crate for the `Weevil` bug tracker's transition policy: re-exports
//! the shared types and the policy surface, and provides the policy-checked
//! [`apply_transition`] workflow step.
//!
//! ## Key principles
//!
//! - **No IO**: nothing here touches disk, network, or any external resource
//! - **No clocks**: timestamps are supplied by the caller, never read here
//! - **Pure functions**: same input always produces same output
//!
//! ## Example
//!
//! ```
//! use weevil::{Bug, BugId, BugStatus, ProjectId, Role, Timestamp, User, UserId};
//! use weevil::workflow::apply_transition;
//!
//! let t0 = Timestamp::from_nanos(1_000);
//! let bug = Bug::new(BugId::new(1), ProjectId::new(1), UserId::new(7), t0);
//! let dev = User::new(UserId::new(8), Role::Developer);
//!
//! let bug = apply_transition(&bug, &dev, BugStatus::InProgress, Timestamp::from_nanos(2_000))?;
//! assert_eq!(bug.status, BugStatus::InProgress);
//! # Ok::<(), weevil::TransitionError>(())
//! ```

pub mod workflow;

// Re-export the full public surface
pub use weevil_policy::{
    ParseRoleError, RawStatusChange, Role, RoleAuthority, StatusChangeRequest, TransitionError,
    TransitionGuard, TransitionRule, User, available_transitions, can_transition,
    can_transition_raw,
};
pub use weevil_types::{
    Bug, BugId, BugStatus, OrganizationId, ParseStatusError, ProjectId, Timestamp, UserId,
};

pub use workflow::apply_transition;
