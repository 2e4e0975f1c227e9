//! Kani bounded model checking proofs for transition policy correctness.
//!
//! Verifies the core policy properties over the full (role, from, to) space,
//! which is small enough to enumerate exhaustively inside each harness:
//! - Universal authority: Admin and ProjectManager pass every check
//! - Fail closed: Viewer passes no check
//! - Consistency: the enumeration query and the decision function agree
//! - Self-exclusion: no enumeration result contains its own source status

use weevil_types::BugStatus;

use crate::policy::{available_transitions, can_transition};
use crate::roles::Role;

/// Verifies that the two privileged roles are allowed universally.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_universal_authority() {
    for from in BugStatus::ALL {
        for to in BugStatus::ALL {
            assert!(can_transition(Role::Admin, from, to));
            assert!(can_transition(Role::ProjectManager, from, to));
        }
    }
}

/// Verifies that Viewer holds no transition permission at all.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_viewer_fails_closed() {
    for from in BugStatus::ALL {
        for to in BugStatus::ALL {
            assert!(!can_transition(Role::Viewer, from, to));
        }
    }
}

/// Verifies agreement between `available_transitions` and `can_transition`
/// for every role, and that self-transitions are never offered.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(12)]
fn verify_enumeration_consistency() {
    for role in Role::ALL {
        for from in BugStatus::ALL {
            let available = available_transitions(role, from);

            assert!(!available.contains(&from));

            for to in BugStatus::ALL {
                let offered = available.contains(&to);
                let allowed = to != from && can_transition(role, from, to);
                assert_eq!(offered, allowed);
            }
        }
    }
}

/// Verifies the exact non-privileged rule rows from the permission table.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_rule_table_rows() {
    // Developer
    assert!(can_transition(
        Role::Developer,
        BugStatus::Open,
        BugStatus::InProgress
    ));
    assert!(can_transition(
        Role::Developer,
        BugStatus::InProgress,
        BugStatus::Resolved
    ));
    assert!(can_transition(
        Role::Developer,
        BugStatus::Reopened,
        BugStatus::InProgress
    ));
    assert!(!can_transition(
        Role::Developer,
        BugStatus::Open,
        BugStatus::Resolved
    ));

    // Qa / Tester share the verification rows
    for role in [Role::Qa, Role::Tester] {
        assert!(can_transition(role, BugStatus::Resolved, BugStatus::Closed));
        assert!(can_transition(
            role,
            BugStatus::Resolved,
            BugStatus::Reopened
        ));
        assert!(can_transition(role, BugStatus::Closed, BugStatus::Reopened));
        assert!(!can_transition(role, BugStatus::Open, BugStatus::InProgress));
    }

    // Client
    assert!(can_transition(
        Role::Client,
        BugStatus::Closed,
        BugStatus::Reopened
    ));
    assert!(!can_transition(
        Role::Client,
        BugStatus::Resolved,
        BugStatus::Closed
    ));
}
