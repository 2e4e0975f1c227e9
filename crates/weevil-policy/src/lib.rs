//! # weevil-policy: Bug status transition permissions
//!
//! The decision engine for `Weevil`'s bug lifecycle: given an actor's role, a
//! bug's current status, and a requested target status, decides whether the
//! transition is allowed, and enumerates the legal next statuses used to
//! populate transition controls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Status-change request (role, from, to)      │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  TransitionGuard                             │
//! │  ├─ can_transition (rule table lookup)       │
//! │  ├─ available_transitions (UI affordances)   │
//! │  └─ audit events (grant / deny)              │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  Ok(()) or TransitionError                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Roles
//!
//! | Role            | Allowed transitions                                   |
//! |-----------------|-------------------------------------------------------|
//! | Admin           | all                                                   |
//! | ProjectManager  | all                                                   |
//! | Developer       | open→in_progress, in_progress→resolved, reopened→in_progress |
//! | Qa              | resolved→closed, resolved→reopened, closed→reopened   |
//! | Tester          | same as Qa                                            |
//! | Client          | closed→reopened                                       |
//! | Viewer          | none                                                  |
//!
//! The table is total and fails closed: a (role, from, to) combination no
//! rule covers is denied. Each role sees its own subgraph of the status
//! graph; there is no universal transition graph.
//!
//! ## Examples
//!
//! ### Pure decisions
//!
//! ```
//! use weevil_policy::{Role, available_transitions, can_transition};
//! use weevil_types::BugStatus;
//!
//! assert!(can_transition(Role::Qa, BugStatus::Resolved, BugStatus::Closed));
//! assert!(!can_transition(Role::Qa, BugStatus::Open, BugStatus::InProgress));
//!
//! assert_eq!(
//!     available_transitions(Role::Developer, BugStatus::Open),
//!     vec![BugStatus::InProgress],
//! );
//! ```
//!
//! ### Enforcement with errors and audit logging
//!
//! ```
//! use weevil_policy::{Role, TransitionGuard};
//! use weevil_types::BugStatus;
//!
//! let guard = TransitionGuard::new(Role::Client);
//! guard.authorize(BugStatus::Closed, BugStatus::Reopened)?;
//! assert!(guard.authorize(BugStatus::Open, BugStatus::Closed).is_err());
//! # Ok::<(), weevil_policy::TransitionError>(())
//! ```
//!
//! ### Boundary validation of raw payloads
//!
//! ```
//! use weevil_policy::RawStatusChange;
//!
//! let raw = RawStatusChange {
//!     bug_id: 17,
//!     actor_role: "developer".to_string(),
//!     current_status: "open".to_string(),
//!     target_status: "in_progress".to_string(),
//! };
//! let request = raw.validate()?;
//! request.check()?;
//! # Ok::<(), weevil_policy::TransitionError>(())
//! ```
//!
//! ## Concurrency
//!
//! Every function here is pure and synchronous over immutable inputs; any
//! number of threads may call them without coordination. The authoritative
//! status write is a collaborator concern: two concurrent requests can both
//! pass the check against a stale `from`, so the writer must use its own
//! compare-and-swap or transaction.

pub mod enforcement;
pub mod policy;
pub mod request;
pub mod roles;
pub mod rules;

// Re-export commonly used items
pub use enforcement::{TransitionError, TransitionGuard};
pub use policy::{available_transitions, can_transition, can_transition_raw};
pub use request::{RawStatusChange, StatusChangeRequest};
pub use roles::{ParseRoleError, Role, User};
pub use rules::{RoleAuthority, TransitionRule};

#[cfg(test)]
mod property_tests;

// Kani proofs for bounded model checking
#[cfg(kani)]
mod kani_proofs;
