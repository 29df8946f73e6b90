//! # Permissions
//!
//! Derivation of a participant's effective permissions inside one event.
//! Effective permissions combine the participant's explicit grants with the
//! defaults of their role tier and the event-wide settings.

use serde::{Deserialize, Serialize};

use eventshare_event::{EventSettings, ParticipantRecord};

use crate::actions::PermissionAction;

/// Effective capabilities of one user in one event.
///
/// This value is never stored; it is recomputed from a participant record
/// (or its absence) and the event settings by [`derive_permissions`].
///
/// # Example
///
/// ```
/// use eventshare_rbac::EventPermissions;
///
/// let perms = EventPermissions::none();
/// assert!(perms.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPermissions {
    /// May upload media.
    pub can_upload: bool,
    /// May download media.
    pub can_download: bool,
    /// May moderate content.
    pub can_moderate: bool,
    /// May delete media.
    pub can_delete_media: bool,
    /// May manage participants.
    pub can_manage_participants: bool,
    /// May edit the event.
    pub can_edit_event: bool,
    /// May open event analytics.
    pub can_view_analytics: bool,
    /// May invite users.
    pub can_invite_users: bool,
    /// May approve pending media.
    pub can_approve_media: bool,
    /// Holds the organizer or creator role.
    pub is_organizer: bool,
    /// Holds the creator role.
    pub is_creator: bool,
}

impl EventPermissions {
    /// Permission set with every flag off.
    pub const fn none() -> Self {
        Self {
            can_upload: false,
            can_download: false,
            can_moderate: false,
            can_delete_media: false,
            can_manage_participants: false,
            can_edit_event: false,
            can_view_analytics: false,
            can_invite_users: false,
            can_approve_media: false,
            is_organizer: false,
            is_creator: false,
        }
    }

    /// Check if no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }

    /// Check if the named action is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use eventshare_rbac::{EventPermissions, PermissionAction};
    ///
    /// let perms = EventPermissions { can_upload: true, ..EventPermissions::none() };
    /// assert!(perms.allows(PermissionAction::UploadMedia));
    /// assert!(!perms.allows(PermissionAction::DeleteMedia));
    /// ```
    pub fn allows(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::UploadMedia => self.can_upload,
            PermissionAction::DownloadMedia => self.can_download,
            PermissionAction::ApproveMedia => self.can_approve_media,
            PermissionAction::DeleteMedia => self.can_delete_media,
            PermissionAction::ModerateContent => self.can_moderate,
            PermissionAction::ManageParticipants => self.can_manage_participants,
            PermissionAction::EditEvent => self.can_edit_event,
            PermissionAction::ViewAnalytics => self.can_view_analytics,
            PermissionAction::InviteUsers => self.can_invite_users,
        }
    }

    /// All actions this permission set allows.
    pub fn granted_actions(&self) -> Vec<PermissionAction> {
        PermissionAction::all()
            .into_iter()
            .filter(|action| self.allows(*action))
            .collect()
    }
}

/// Derive the effective permissions of a participant.
///
/// Rules:
/// - No participant record: every flag is `false`
/// - Upload comes from the explicit grant only
/// - Download needs the explicit grant and the event-wide toggle
///   (the toggle counts as on when `settings` is `None`)
/// - Moderate is granted explicitly or by the moderator tier
/// - Delete media, manage participants and edit event are granted explicitly
///   or by the organizer tier
/// - Analytics follows the organizer tier; invite and approve follow the
///   moderator tier, with no explicit override
///
/// The function is total and has no side effects.
///
/// # Example
///
/// ```
/// use eventshare_event::{EventSettings, ParticipantRecord, Role};
/// use eventshare_rbac::derive_permissions;
/// use uuid::Uuid;
///
/// let record = ParticipantRecord::new(Uuid::now_v7(), Uuid::now_v7(), "Deniz", Role::Organizer);
/// let perms = derive_permissions(Some(&record), None);
/// assert!(perms.can_view_analytics);
/// assert!(perms.is_organizer);
/// assert!(!perms.is_creator);
///
/// let no_downloads = EventSettings::default().with_download(false);
/// assert!(!derive_permissions(Some(&record), Some(&no_downloads)).can_download);
/// ```
pub fn derive_permissions(
    participant: Option<&ParticipantRecord>,
    settings: Option<&EventSettings>,
) -> EventPermissions {
    let Some(participant) = participant else {
        return EventPermissions::none();
    };

    let role = participant.role;
    let grants = &participant.grants;
    let is_creator = role.is_creator();
    let is_organizer = role.is_organizer_tier();
    let is_moderator = role.is_moderator_tier();
    let allow_download = settings.map_or(true, |s| s.allow_download);

    EventPermissions {
        can_upload: grants.can_upload,
        can_download: grants.can_download && allow_download,
        can_moderate: grants.can_moderate || is_moderator,
        can_delete_media: grants.can_delete_media || is_organizer,
        can_manage_participants: grants.can_manage_participants || is_organizer,
        can_edit_event: grants.can_edit_event || is_organizer,
        can_view_analytics: is_organizer,
        can_invite_users: is_moderator,
        can_approve_media: is_moderator,
        is_organizer,
        is_creator,
    }
}

/// Check a named action against an optional permission set.
///
/// Returns `false` when there is no permission set or the action name is
/// unknown.
///
/// # Example
///
/// ```
/// use eventshare_rbac::{check_permission, EventPermissions};
///
/// let perms = EventPermissions { can_invite_users: true, ..EventPermissions::none() };
/// assert!(check_permission(Some(&perms), "invite_users"));
/// assert!(!check_permission(Some(&perms), "fly"));
/// assert!(!check_permission(None, "invite_users"));
/// ```
pub fn check_permission(permissions: Option<&EventPermissions>, action: &str) -> bool {
    let Some(permissions) = permissions else {
        return false;
    };

    match PermissionAction::parse(action) {
        Some(action) => permissions.allows(action),
        None => {
            tracing::debug!(action = %action, "Unknown permission action");
            false
        }
    }
}
