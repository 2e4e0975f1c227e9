//! Property-based tests using proptest.
//!
//! Tests invariants that should hold for all (role, status) inputs.

use proptest::prelude::*;
use weevil_types::BugStatus;

use crate::policy::{available_transitions, can_transition, can_transition_raw};
use crate::roles::Role;

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn any_status() -> impl Strategy<Value = BugStatus> {
    prop::sample::select(BugStatus::ALL.to_vec())
}

proptest! {
    /// Universal roles allow every pair, including self-transitions.
    #[test]
    fn universal_roles_allow_all(from in any_status(), to in any_status()) {
        prop_assert!(can_transition(Role::Admin, from, to));
        prop_assert!(can_transition(Role::ProjectManager, from, to));
    }

    /// Viewer is denied every pair.
    #[test]
    fn viewer_denied_all(from in any_status(), to in any_status()) {
        prop_assert!(!can_transition(Role::Viewer, from, to));
    }

    /// Round-trip consistency: every status offered by available_transitions
    /// independently passes can_transition.
    #[test]
    fn available_implies_can(role in any_role(), from in any_status()) {
        for to in available_transitions(role, from) {
            prop_assert!(can_transition(role, from, to));
        }
    }

    /// The converse: every allowed non-self transition is offered.
    #[test]
    fn can_implies_available(role in any_role(), from in any_status(), to in any_status()) {
        let offered = available_transitions(role, from).contains(&to);
        let expected = to != from && can_transition(role, from, to);
        prop_assert_eq!(offered, expected);
    }

    /// Self-transitions are never offered.
    #[test]
    fn self_transition_never_offered(role in any_role(), from in any_status()) {
        prop_assert!(!available_transitions(role, from).contains(&from));
    }

    /// Pure function: repeated calls with identical inputs agree.
    #[test]
    fn decisions_are_idempotent(role in any_role(), from in any_status(), to in any_status()) {
        let first = can_transition(role, from, to);
        let second = can_transition(role, from, to);
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            available_transitions(role, from),
            available_transitions(role, from)
        );
    }

    /// Results are always a duplicate-free subset of the full enumeration.
    #[test]
    fn available_is_a_set(role in any_role(), from in any_status()) {
        let available = available_transitions(role, from);
        prop_assert!(available.len() <= BugStatus::ALL.len());
        for (i, a) in available.iter().enumerate() {
            prop_assert!(BugStatus::ALL.contains(a));
            for b in &available[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// The raw string decision agrees with the typed decision on well-formed
    /// inputs, and fails closed on arbitrary garbage.
    #[test]
    fn raw_decision_agrees_with_typed(
        role in any_role(),
        from in any_status(),
        to in any_status(),
        garbage in "[a-z_]{0,16}",
    ) {
        prop_assert_eq!(
            can_transition_raw(role.as_str(), from.as_str(), to.as_str()),
            can_transition(role, from, to)
        );

        // Garbage in any position that fails to parse denies the request.
        if garbage.parse::<Role>().is_err() {
            prop_assert!(!can_transition_raw(&garbage, from.as_str(), to.as_str()));
        }
        if garbage.parse::<BugStatus>().is_err() {
            prop_assert!(!can_transition_raw(role.as_str(), &garbage, to.as_str()));
            prop_assert!(!can_transition_raw(role.as_str(), from.as_str(), &garbage));
        }
    }
}
