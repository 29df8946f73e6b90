//! Event-level settings
//!
//! Only the settings that influence permissions live here; the rest of an
//! event row belongs to the application's storage layer.

use serde::{Deserialize, Serialize};

/// Event-wide toggles that modify participant permissions.
///
/// Every field has a serde default so a partially populated event row still
/// deserializes.
///
/// # Examples
///
/// ```
/// use eventshare_event::EventSettings;
///
/// let settings = EventSettings::default();
/// assert!(settings.allow_download);
/// assert!(!settings.allow_anonymous_upload);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSettings {
    /// Event-wide download toggle
    #[serde(default = "default_true")]
    pub allow_download: bool,

    /// Uploaded media is published without moderator approval
    #[serde(default = "default_true")]
    pub auto_approve_media: bool,

    /// Users who have not joined may still upload
    #[serde(default)]
    pub allow_anonymous_upload: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            allow_download: true,
            auto_approve_media: true,
            allow_anonymous_upload: false,
        }
    }
}

impl EventSettings {
    /// Set the download toggle.
    pub fn with_download(mut self, allow: bool) -> Self {
        self.allow_download = allow;
        self
    }

    /// Set whether uploads skip moderation.
    pub fn with_auto_approve(mut self, auto_approve: bool) -> Self {
        self.auto_approve_media = auto_approve;
        self
    }

    /// Set whether anonymous uploads are accepted.
    pub fn with_anonymous_upload(mut self, allow: bool) -> Self {
        self.allow_anonymous_upload = allow;
        self
    }
}
