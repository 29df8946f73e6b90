//! Event roles
//!
//! This module defines the role hierarchy participants hold inside an event.

use serde::{Deserialize, Serialize};

/// A participant's role within an event.
///
/// Roles are totally ordered by privilege.
/// The hierarchy is: Viewer < Participant < Moderator < Organizer < Creator
///
/// # Permission Model
///
/// - **Viewer**: Can only look at approved media
/// - **Participant**: Active member, uploads and downloads media
/// - **Moderator**: Approves media, moderates content, invites users
/// - **Organizer**: Edits the event, manages participants, deletes media
/// - **Creator**: Created the event, full control including role changes
///
/// Role strings coming from storage are matched leniently: anything that is not
/// one of the five known values deserializes as [`Role::Viewer`].
///
/// # Examples
///
/// ```
/// use eventshare_event::Role;
///
/// assert!(Role::Organizer > Role::Moderator);
/// assert_eq!(Role::Creator.rank(), 5);
/// assert_eq!(Role::parse_lenient("host"), Role::Viewer);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Role {
    /// View-only access
    Viewer = 1,

    /// Active event member
    Participant = 2,

    /// Content moderator
    Moderator = 3,

    /// Event manager
    Organizer = 4,

    /// Owner of the event
    Creator = 5,
}

impl Role {
    /// All roles, highest privilege first.
    pub const fn all() -> [Role; 5] {
        [
            Role::Creator,
            Role::Organizer,
            Role::Moderator,
            Role::Participant,
            Role::Viewer,
        ]
    }

    /// Numeric privilege rank (creator = 5 down to viewer = 1).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// True for the creator only.
    pub fn is_creator(&self) -> bool {
        *self == Role::Creator
    }

    /// True for creator and organizer.
    pub fn is_organizer_tier(&self) -> bool {
        *self >= Role::Organizer
    }

    /// True for creator, organizer and moderator.
    pub fn is_moderator_tier(&self) -> bool {
        *self >= Role::Moderator
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - Stored role key; only the exact lowercase keys are accepted
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use eventshare_event::Role;
    ///
    /// assert_eq!(Role::parse("organizer"), Some(Role::Organizer));
    /// assert_eq!(Role::parse("MODERATOR"), None);
    /// assert_eq!(Role::parse("admin"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "creator" => Some(Self::Creator),
            "organizer" => Some(Self::Organizer),
            "moderator" => Some(Self::Moderator),
            "participant" => Some(Self::Participant),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Parse a role, falling back to [`Role::Viewer`] for unknown values.
    ///
    /// Permission derivation must never fail because of a bad role string, so
    /// unrecognized input maps to the lowest privilege.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(role = %s, "Unrecognized participant role, treating as viewer");
            Self::Viewer
        })
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventshare_event::Role;
    ///
    /// assert_eq!(Role::Moderator.as_str(), "moderator");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Organizer => "organizer",
            Self::Moderator => "moderator",
            Self::Participant => "participant",
            Self::Viewer => "viewer",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Creator => "Creator",
            Self::Organizer => "Organizer",
            Self::Moderator => "Moderator",
            Self::Participant => "Participant",
            Self::Viewer => "Viewer",
        }
    }

    /// Short description shown next to role badges.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Creator => "Created the event, holds every permission",
            Self::Organizer => "Manages the event and its participants",
            Self::Moderator => "Reviews and approves uploaded content",
            Self::Participant => "Active member who shares photos and videos",
            Self::Viewer => "Can only view the event",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Viewer
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
