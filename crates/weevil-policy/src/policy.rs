//! The transition decision functions.
//!
//! Pure, synchronous, side-effect-free functions over immutable inputs. Safe
//! to call concurrently from any number of threads without coordination; the
//! only shared resource is the `'static` rule table.

use std::str::FromStr;

use weevil_types::BugStatus;

use crate::roles::Role;
use crate::rules::{RoleAuthority, authority_for};

/// Decides whether `role` may move a bug from `from` to `to`.
///
/// Deterministic and total: every input combination yields a boolean, and a
/// combination no rule covers is denied. Never panics, never suspends.
///
/// Self-transitions (`from == to`) are not special-cased here - a universal
/// role reports `true` for them. [`available_transitions`] is the operation
/// that excludes them.
///
/// # Examples
///
/// ```
/// use weevil_policy::{Role, can_transition};
/// use weevil_types::BugStatus;
///
/// assert!(can_transition(Role::Developer, BugStatus::Open, BugStatus::InProgress));
/// assert!(!can_transition(Role::Developer, BugStatus::Open, BugStatus::Resolved));
/// assert!(can_transition(Role::Admin, BugStatus::Closed, BugStatus::Open));
/// ```
pub fn can_transition(role: Role, from: BugStatus, to: BugStatus) -> bool {
    match authority_for(role) {
        RoleAuthority::Universal => true,
        RoleAuthority::Enumerated(rules) => {
            rules.iter().any(|rule| rule.from == from && rule.to == to)
        }
        RoleAuthority::Denied => false,
    }
}

/// Enumerates the statuses `role` may move a bug to from `from`.
///
/// The result is every `to != from` for which [`can_transition`] holds, in
/// [`BugStatus::ALL`] declaration order - deterministic and duplicate-free.
/// An empty result is valid and means the caller should hide or disable the
/// transition control.
///
/// Computed fresh per call; the table lookup is O(small constant) so there is
/// nothing worth caching.
///
/// # Examples
///
/// ```
/// use weevil_policy::{Role, available_transitions};
/// use weevil_types::BugStatus;
///
/// assert_eq!(
///     available_transitions(Role::Developer, BugStatus::Open),
///     vec![BugStatus::InProgress],
/// );
/// assert!(available_transitions(Role::Viewer, BugStatus::Open).is_empty());
/// ```
pub fn available_transitions(role: Role, from: BugStatus) -> Vec<BugStatus> {
    BugStatus::ALL
        .into_iter()
        .filter(|to| *to != from && can_transition(role, from, *to))
        .collect()
}

/// Fail-closed decision over raw strings.
///
/// Parses all three inputs; any unrecognized value yields `false` rather than
/// an error. This sits on the UI hot path where malformed data must degrade
/// to "no permission", never crash. Callers that need to distinguish a
/// malformed input from a legitimate denial should go through the typed
/// request boundary instead.
///
/// # Examples
///
/// ```
/// use weevil_policy::can_transition_raw;
///
/// assert!(can_transition_raw("qa", "resolved", "closed"));
/// assert!(!can_transition_raw("intern", "resolved", "closed"));
/// assert!(!can_transition_raw("qa", "resolved", "shipped"));
/// ```
pub fn can_transition_raw(role: &str, from: &str, to: &str) -> bool {
    let (Ok(role), Ok(from), Ok(to)) = (
        Role::from_str(role),
        BugStatus::from_str(from),
        BugStatus::from_str(to),
    ) else {
        return false;
    };
    can_transition(role, from, to)
}
