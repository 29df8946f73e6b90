//! Role management rules
//!
//! Who may manage whom, and which role changes are legal.

use crate::error::{RoleChangeError, RoleChangeResult};
use crate::roles::Role;

/// Check whether `actual` is at least as privileged as `required`.
///
/// # Examples
///
/// ```
/// use eventshare_event::{has_role_or_higher, Role};
///
/// assert!(has_role_or_higher(Role::Organizer, Role::Moderator));
/// assert!(has_role_or_higher(Role::Viewer, Role::Viewer));
/// assert!(!has_role_or_higher(Role::Participant, Role::Moderator));
/// ```
pub fn has_role_or_higher(actual: Role, required: Role) -> bool {
    actual.rank() >= required.rank()
}

/// Check whether a user holding `manager` may manage a user holding `target`.
///
/// - Creator manages anyone
/// - Organizer manages moderators, participants and viewers
/// - Moderator manages participants and viewers
/// - Participant and viewer manage no one
///
/// # Examples
///
/// ```
/// use eventshare_event::{can_manage_user, Role};
///
/// assert!(can_manage_user(Role::Creator, Role::Organizer));
/// assert!(!can_manage_user(Role::Organizer, Role::Creator));
/// ```
pub fn can_manage_user(manager: Role, target: Role) -> bool {
    match manager {
        Role::Creator => true,
        Role::Organizer => matches!(target, Role::Moderator | Role::Participant | Role::Viewer),
        Role::Moderator => matches!(target, Role::Participant | Role::Viewer),
        Role::Participant | Role::Viewer => false,
    }
}

/// Roles a user holding `assigner` may hand out, highest first.
pub fn assignable_roles(assigner: Role) -> Vec<Role> {
    Role::all()
        .into_iter()
        .filter(|role| role.rank() < assigner.rank() && assigner.is_moderator_tier())
        .collect()
}

/// Validate a role change by role alone.
///
/// Equal actor and target roles are treated as the actor editing their own
/// record. Checks run in order: self edit, management rights, escalation.
///
/// # Arguments
///
/// * `acting` - Role of the user performing the change
/// * `target_current` - Current role of the user being changed
/// * `proposed` - Role the actor wants to assign
///
/// # Examples
///
/// ```
/// use eventshare_event::{validate_role_change, Role, RoleChangeError};
///
/// assert!(validate_role_change(Role::Organizer, Role::Participant, Role::Moderator).is_ok());
/// assert!(matches!(
///     validate_role_change(Role::Moderator, Role::Participant, Role::Organizer),
///     Err(RoleChangeError::PrivilegeEscalation { .. })
/// ));
/// ```
pub fn validate_role_change(
    acting: Role,
    target_current: Role,
    proposed: Role,
) -> RoleChangeResult<()> {
    if acting == target_current {
        return Err(RoleChangeError::SelfRoleChange);
    }

    check_management(acting, target_current, proposed)
}

/// Management and escalation checks shared by the role-only and the
/// record-aware validators.
pub(crate) fn check_management(
    acting: Role,
    target_current: Role,
    proposed: Role,
) -> RoleChangeResult<()> {
    if !can_manage_user(acting, target_current) {
        return Err(RoleChangeError::InsufficientPrivilege {
            actor: acting,
            target: target_current,
        });
    }

    if proposed.rank() >= acting.rank() {
        return Err(RoleChangeError::PrivilegeEscalation {
            actor: acting,
            proposed,
        });
    }

    Ok(())
}
