//! # Actions
//!
//! Named actions the app offers inside an event. Screens ask whether an
//! action is allowed before rendering the button or panel behind it.

use serde::{Deserialize, Serialize};

/// Actions a participant may perform inside an event.
///
/// - **UploadMedia**: Add photos and videos
/// - **DownloadMedia**: Save media to the device
/// - **ApproveMedia**: Approve or reject pending uploads
/// - **DeleteMedia**: Remove media
/// - **ModerateContent**: Hide or flag content
/// - **ManageParticipants**: Remove participants and change their roles
/// - **EditEvent**: Change event details and settings
/// - **ViewAnalytics**: Open the event statistics view
/// - **InviteUsers**: Send invitations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    /// Add photos and videos.
    UploadMedia,

    /// Save media to the device.
    DownloadMedia,

    /// Approve or reject pending uploads.
    ApproveMedia,

    /// Remove media.
    DeleteMedia,

    /// Hide or flag content.
    ModerateContent,

    /// Remove participants and change their roles.
    ManageParticipants,

    /// Change event details and settings.
    EditEvent,

    /// Open the event statistics view.
    ViewAnalytics,

    /// Send invitations.
    InviteUsers,
}

impl PermissionAction {
    /// Get the string key of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::UploadMedia => "upload_media",
            PermissionAction::DownloadMedia => "download_media",
            PermissionAction::ApproveMedia => "approve_media",
            PermissionAction::DeleteMedia => "delete_media",
            PermissionAction::ModerateContent => "moderate_content",
            PermissionAction::ManageParticipants => "manage_participants",
            PermissionAction::EditEvent => "edit_event",
            PermissionAction::ViewAnalytics => "view_analytics",
            PermissionAction::InviteUsers => "invite_users",
        }
    }

    /// Parse an action from its string key.
    ///
    /// # Arguments
    ///
    /// * `s` - Exact snake_case key, as returned by [`PermissionAction::as_str`]
    ///
    /// # Returns
    ///
    /// `Some(PermissionAction)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use eventshare_rbac::PermissionAction;
    ///
    /// assert_eq!(PermissionAction::parse("upload_media"), Some(PermissionAction::UploadMedia));
    /// assert_eq!(PermissionAction::parse("UPLOAD_MEDIA"), None);
    /// assert_eq!(PermissionAction::parse("launch_rocket"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upload_media" => Some(PermissionAction::UploadMedia),
            "download_media" => Some(PermissionAction::DownloadMedia),
            "approve_media" => Some(PermissionAction::ApproveMedia),
            "delete_media" => Some(PermissionAction::DeleteMedia),
            "moderate_content" => Some(PermissionAction::ModerateContent),
            "manage_participants" => Some(PermissionAction::ManageParticipants),
            "edit_event" => Some(PermissionAction::EditEvent),
            "view_analytics" => Some(PermissionAction::ViewAnalytics),
            "invite_users" => Some(PermissionAction::InviteUsers),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            PermissionAction::UploadMedia,
            PermissionAction::DownloadMedia,
            PermissionAction::ApproveMedia,
            PermissionAction::DeleteMedia,
            PermissionAction::ModerateContent,
            PermissionAction::ManageParticipants,
            PermissionAction::EditEvent,
            PermissionAction::ViewAnalytics,
            PermissionAction::InviteUsers,
        ]
    }

    /// Short label for menus and permission lists.
    pub fn description(&self) -> &'static str {
        match self {
            PermissionAction::UploadMedia => "Upload media",
            PermissionAction::DownloadMedia => "Download media",
            PermissionAction::ApproveMedia => "Approve media",
            PermissionAction::DeleteMedia => "Delete media",
            PermissionAction::ModerateContent => "Moderate content",
            PermissionAction::ManageParticipants => "Manage participants",
            PermissionAction::EditEvent => "Edit event",
            PermissionAction::ViewAnalytics => "View analytics",
            PermissionAction::InviteUsers => "Invite users",
        }
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(PermissionAction::parse("download_media"), Some(PermissionAction::DownloadMedia));
        assert_eq!(PermissionAction::parse("manage_participants"), Some(PermissionAction::ManageParticipants));
        assert_eq!(PermissionAction::parse("DOWNLOAD_MEDIA"), None);
        assert_eq!(PermissionAction::parse(" download_media"), None);
        assert_eq!(PermissionAction::parse(""), None);
        assert_eq!(PermissionAction::parse("manage"), None);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for action in PermissionAction::all() {
            assert_eq!(PermissionAction::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_all_actions_count() {
        assert_eq!(PermissionAction::all().len(), 9);
    }

    #[test]
    fn test_short_names_are_not_actions() {
        for short in ["upload", "download", "approve", "delete", "moderate", "invite", "analytics"] {
            assert_eq!(PermissionAction::parse(short), None, "{short:?}");
        }
    }

    #[test]
    fn test_serde_key() {
        let json = serde_json::to_string(&PermissionAction::ViewAnalytics).unwrap();
        assert_eq!(json, "\"view_analytics\"");
    }
}
