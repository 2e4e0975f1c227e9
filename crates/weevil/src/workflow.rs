//! Policy-checked transition application.
//!
//! The one place a `Bug` record's status changes. Pure: no IO, no clocks, no
//! randomness - callers supply `now`, and the same inputs always produce the
//! same output.

use weevil_policy::{TransitionError, TransitionGuard, User};
use weevil_types::{Bug, BugStatus, Timestamp};

/// Applies a status transition to a bug on behalf of an actor.
///
/// Authorizes the transition against the permission policy, then returns a
/// NEW record with the target status and `updated_at` set to `now`. The input
/// is never mutated. A denial returns the policy's error unchanged.
///
/// This checks permission only. Committing the returned record is the storage
/// collaborator's job, under its own concurrency control - the bug's status
/// may have changed between this check and the write.
///
/// # Errors
///
/// Returns [`TransitionError::PermissionDenied`] when the actor's role does
/// not permit moving the bug from its current status to `to`.
pub fn apply_transition(
    bug: &Bug,
    actor: &User,
    to: BugStatus,
    now: Timestamp,
) -> Result<Bug, TransitionError> {
    TransitionGuard::new(actor.role).authorize(bug.status, to)?;
    Ok(bug.clone().with_status(to, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weevil_policy::Role;
    use weevil_types::{BugId, ProjectId, UserId};

    fn make_bug(status: BugStatus) -> Bug {
        Bug::new(
            BugId::new(1),
            ProjectId::new(2),
            UserId::new(3),
            Timestamp::from_nanos(1_000),
        )
        .with_status(status, Timestamp::from_nanos(1_000))
    }

    fn make_user(role: Role) -> User {
        User::new(UserId::new(9), role)
    }

    #[test]
    fn developer_picks_up_open_bug() {
        let bug = make_bug(BugStatus::Open);
        let now = Timestamp::from_nanos(5_000);

        let next = apply_transition(&bug, &make_user(Role::Developer), BugStatus::InProgress, now)
            .unwrap();

        assert_eq!(next.status, BugStatus::InProgress);
        assert_eq!(next.updated_at, now);
        assert_eq!(next.created_at, bug.created_at);
        assert_eq!(next.id, bug.id);
    }

    #[test]
    fn denied_transition_returns_policy_error() {
        let bug = make_bug(BugStatus::Open);

        let err = apply_transition(
            &bug,
            &make_user(Role::Client),
            BugStatus::Closed,
            Timestamp::from_nanos(5_000),
        )
        .unwrap_err();

        assert_eq!(
            err,
            TransitionError::PermissionDenied {
                role: Role::Client,
                from: BugStatus::Open,
                to: BugStatus::Closed,
            }
        );
    }

    #[test]
    fn apply_does_not_mutate_original() {
        let bug = make_bug(BugStatus::Resolved);
        let before = bug.clone();

        let _ = apply_transition(
            &bug,
            &make_user(Role::Qa),
            BugStatus::Closed,
            Timestamp::from_nanos(5_000),
        );

        assert_eq!(bug, before);
    }

    #[test]
    fn admin_can_route_through_review_statuses() {
        // Only the universal roles can reach CodeReview / QaTesting at all.
        let bug = make_bug(BugStatus::InProgress);
        let now = Timestamp::from_nanos(5_000);

        let next =
            apply_transition(&bug, &make_user(Role::Admin), BugStatus::CodeReview, now).unwrap();
        assert_eq!(next.status, BugStatus::CodeReview);

        let err = apply_transition(&bug, &make_user(Role::Developer), BugStatus::CodeReview, now)
            .unwrap_err();
        assert!(matches!(err, TransitionError::PermissionDenied { .. }));
    }

    #[test]
    fn same_inputs_same_output() {
        let bug = make_bug(BugStatus::Reopened);
        let user = make_user(Role::Developer);
        let now = Timestamp::from_nanos(7_000);

        let a = apply_transition(&bug, &user, BugStatus::InProgress, now).unwrap();
        let b = apply_transition(&bug, &user, BugStatus::InProgress, now).unwrap();
        assert_eq!(a, b);
    }
}
