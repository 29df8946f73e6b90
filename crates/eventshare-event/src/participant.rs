//! Participant records
//!
//! A participant record links one user to one event. It carries the user's
//! role and six explicit capability grants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RoleChangeError, RoleChangeResult};
use crate::management::check_management;
use crate::roles::Role;

/// The six explicit capability grants stored on a participant record.
///
/// # Examples
///
/// ```
/// use eventshare_event::{GrantSet, Role};
///
/// let grants = GrantSet::for_role(Role::Moderator);
/// assert!(grants.can_moderate);
/// assert!(!grants.can_edit_event);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantSet {
    /// May upload media
    #[serde(default)]
    pub can_upload: bool,

    /// May download media
    #[serde(default)]
    pub can_download: bool,

    /// May moderate content
    #[serde(default)]
    pub can_moderate: bool,

    /// May delete media
    #[serde(default)]
    pub can_delete_media: bool,

    /// May manage participants
    #[serde(default)]
    pub can_manage_participants: bool,

    /// May edit the event
    #[serde(default)]
    pub can_edit_event: bool,
}

impl GrantSet {
    /// No grants at all.
    pub const fn none() -> Self {
        Self {
            can_upload: false,
            can_download: false,
            can_moderate: false,
            can_delete_media: false,
            can_manage_participants: false,
            can_edit_event: false,
        }
    }

    /// Grants given to a user who joins with a code or QR scan.
    pub const fn joined() -> Self {
        Self {
            can_upload: true,
            can_download: true,
            ..Self::none()
        }
    }

    /// Grant preset applied when a user is given `role`.
    ///
    /// - Every role may download
    /// - Every role except viewer may upload
    /// - Moderator and above may moderate
    /// - Organizer and above may delete media, manage participants and edit the event
    pub fn for_role(role: Role) -> Self {
        Self {
            can_upload: role != Role::Viewer,
            can_download: true,
            can_moderate: role.is_moderator_tier(),
            can_delete_media: role.is_organizer_tier(),
            can_manage_participants: role.is_organizer_tier(),
            can_edit_event: role.is_organizer_tier(),
        }
    }
}

/// One user's membership in one event.
///
/// The pair (`event_id`, `user_id`) is unique across records.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use eventshare_event::{ParticipantRecord, Role};
///
/// let event_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let record = ParticipantRecord::joined(event_id, user_id, "Ayla");
/// assert_eq!(record.role, Role::Participant);
/// assert!(record.grants.can_upload);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Unique record ID
    pub id: Uuid,

    /// Event ID
    pub event_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Name shown to other participants
    #[serde(rename = "user_name")]
    pub display_name: String,

    /// Role within the event
    pub role: Role,

    /// Explicit capability grants
    #[serde(flatten)]
    pub grants: GrantSet,

    /// Whether the user receives event notifications
    #[serde(default = "default_true")]
    pub notification_enabled: bool,

    /// When the user joined
    pub joined_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl ParticipantRecord {
    /// Creates a record with the grant preset of `role`.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The event ID
    /// * `user_id` - The user ID
    /// * `display_name` - Name shown inside the event
    /// * `role` - Initial role
    pub fn new(event_id: Uuid, user_id: Uuid, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::now_v7(),
            event_id,
            user_id,
            display_name: display_name.into(),
            role,
            grants: GrantSet::for_role(role),
            notification_enabled: true,
            joined_at: Utc::now(),
        }
    }

    /// Record created for the user who creates the event.
    pub fn creator(event_id: Uuid, user_id: Uuid, display_name: impl Into<String>) -> Self {
        Self::new(event_id, user_id, display_name, Role::Creator)
    }

    /// Record created when a user joins by code, link or QR scan.
    pub fn joined(event_id: Uuid, user_id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            grants: GrantSet::joined(),
            ..Self::new(event_id, user_id, display_name, Role::Participant)
        }
    }

    /// Replace explicit grants.
    pub fn with_grants(mut self, grants: GrantSet) -> Self {
        self.grants = grants;
        self
    }

    /// Turn notifications on or off.
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notification_enabled = enabled;
        self
    }

    /// Set the role and reset grants to that role's preset.
    ///
    /// The notification flag is kept.
    pub fn apply_role(&mut self, role: Role) {
        self.role = role;
        self.grants = GrantSet::for_role(role);
    }

    /// Change this participant's role on behalf of `actor`.
    ///
    /// The actor must be a different user of the same event, must be allowed to
    /// manage this participant, and may not grant a role at or above their own.
    /// On success the grant preset for `proposed` is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use eventshare_event::{ParticipantRecord, Role};
    ///
    /// let event_id = Uuid::now_v7();
    /// let organizer = ParticipantRecord::new(event_id, Uuid::now_v7(), "Deniz", Role::Organizer);
    /// let mut guest = ParticipantRecord::joined(event_id, Uuid::now_v7(), "Ege");
    ///
    /// guest.change_role(&organizer, Role::Moderator).unwrap();
    /// assert_eq!(guest.role, Role::Moderator);
    /// assert!(guest.grants.can_moderate);
    /// ```
    pub fn change_role(&mut self, actor: &ParticipantRecord, proposed: Role) -> RoleChangeResult<()> {
        if actor.user_id == self.user_id {
            return Err(RoleChangeError::SelfRoleChange);
        }

        if actor.event_id != self.event_id {
            return Err(RoleChangeError::InsufficientPrivilege {
                actor: actor.role,
                target: self.role,
            });
        }

        check_management(actor.role, self.role, proposed)?;

        tracing::debug!(
            event_id = %self.event_id,
            user_id = %self.user_id,
            from = %self.role,
            to = %proposed,
            "Changing participant role"
        );
        self.apply_role(proposed);
        Ok(())
    }

    /// Whether this record belongs to the given event and user.
    pub fn is_for(&self, event_id: Uuid, user_id: Uuid) -> bool {
        self.event_id == event_id && self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_presets() {
        let creator = GrantSet::for_role(Role::Creator);
        assert_eq!(creator, GrantSet::for_role(Role::Organizer));
        assert!(creator.can_upload && creator.can_edit_event && creator.can_manage_participants);

        let moderator = GrantSet::for_role(Role::Moderator);
        assert!(moderator.can_moderate);
        assert!(!moderator.can_delete_media);

        let participant = GrantSet::for_role(Role::Participant);
        assert_eq!(participant, GrantSet::joined());

        let viewer = GrantSet::for_role(Role::Viewer);
        assert!(!viewer.can_upload);
        assert!(viewer.can_download);
        assert!(!viewer.can_moderate);
    }

    #[test]
    fn test_creator_record() {
        let event_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let record = ParticipantRecord::creator(event_id, user_id, "Selin");

        assert_eq!(record.role, Role::Creator);
        assert!(record.is_for(event_id, user_id));
        assert!(record.notification_enabled);
        assert!(record.grants.can_edit_event);
    }

    #[test]
    fn test_joined_record() {
        let record = ParticipantRecord::joined(Uuid::now_v7(), Uuid::now_v7(), "Mert");
        assert_eq!(record.role, Role::Participant);
        assert_eq!(record.grants, GrantSet::joined());
        assert!(!record.grants.can_moderate);
    }

    #[test]
    fn test_apply_role_keeps_notification_flag() {
        let mut record = ParticipantRecord::joined(Uuid::now_v7(), Uuid::now_v7(), "Mert")
            .with_notifications(false);
        record.apply_role(Role::Viewer);

        assert_eq!(record.role, Role::Viewer);
        assert!(!record.grants.can_upload);
        assert!(!record.notification_enabled);
    }

    #[test]
    fn test_change_role_rejects_self() {
        let event_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let actor = ParticipantRecord::creator(event_id, user_id, "Selin");
        let mut same_user = actor.clone();

        assert_eq!(
            same_user.change_role(&actor, Role::Viewer),
            Err(RoleChangeError::SelfRoleChange)
        );
        assert_eq!(same_user.role, Role::Creator);
    }

    #[test]
    fn test_change_role_between_peers_of_same_role() {
        // Two different organizers: not a self edit, but organizers cannot manage organizers
        let event_id = Uuid::now_v7();
        let actor = ParticipantRecord::new(event_id, Uuid::now_v7(), "A", Role::Organizer);
        let mut target = ParticipantRecord::new(event_id, Uuid::now_v7(), "B", Role::Organizer);

        assert!(matches!(
            target.change_role(&actor, Role::Viewer),
            Err(RoleChangeError::InsufficientPrivilege { .. })
        ));
    }

    #[test]
    fn test_change_role_other_event() {
        let actor = ParticipantRecord::creator(Uuid::now_v7(), Uuid::now_v7(), "Selin");
        let mut target = ParticipantRecord::joined(Uuid::now_v7(), Uuid::now_v7(), "Mert");

        assert!(matches!(
            target.change_role(&actor, Role::Moderator),
            Err(RoleChangeError::InsufficientPrivilege { .. })
        ));
        assert_eq!(target.role, Role::Participant);
    }

    #[test]
    fn test_change_role_escalation_leaves_record_untouched() {
        let event_id = Uuid::now_v7();
        let actor = ParticipantRecord::new(event_id, Uuid::now_v7(), "Mod", Role::Moderator);
        let mut target = ParticipantRecord::joined(event_id, Uuid::now_v7(), "Mert");
        let before = target.clone();

        assert!(matches!(
            target.change_role(&actor, Role::Moderator),
            Err(RoleChangeError::PrivilegeEscalation { .. })
        ));
        assert_eq!(target, before);
    }

    #[test]
    fn test_change_role_applies_preset() {
        let event_id = Uuid::now_v7();
        let actor = ParticipantRecord::creator(event_id, Uuid::now_v7(), "Selin");
        let mut target = ParticipantRecord::joined(event_id, Uuid::now_v7(), "Mert");

        target.change_role(&actor, Role::Organizer).unwrap();
        assert_eq!(target.role, Role::Organizer);
        assert_eq!(target.grants, GrantSet::for_role(Role::Organizer));
    }

    #[test]
    fn test_deserialize_storage_row() {
        let json = r#"{
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "event_id": "550e8400-e29b-41d4-a716-446655440000",
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "user_name": "Ayla",
            "role": "host",
            "can_upload": true,
            "can_download": true,
            "joined_at": "2024-06-01T12:00:00Z"
        }"#;
        let record: ParticipantRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.display_name, "Ayla");
        assert_eq!(record.role, Role::Viewer);
        assert!(record.grants.can_upload);
        assert!(!record.grants.can_moderate);
        assert!(record.notification_enabled);
    }
}
