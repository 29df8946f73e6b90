//! Deep link intents.
//!
//! The typed result of classifying a URL, QR payload or typed code.

use serde::{Deserialize, Serialize};

use crate::code::EventCode;

/// What the app should do with an incoming link.
///
/// Serializes as an internally tagged object, e.g.
/// `{"type": "event_join", "eventCode": "AB12CD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeepLinkIntent {
    /// Join an event by its code.
    EventJoin {
        /// Uppercase join code.
        #[serde(rename = "eventCode")]
        event_code: EventCode,
    },

    /// Open an event by its ID.
    EventView {
        /// Event ID exactly as it appeared in the link.
        #[serde(rename = "eventId")]
        event_id: String,
    },

    /// Open a single media item.
    MediaView {
        /// Media item ID.
        #[serde(rename = "mediaId")]
        media_id: String,
    },

    /// Continue an authentication flow.
    Auth,
}

impl DeepLinkIntent {
    /// Join intent for an already validated code.
    pub fn join(event_code: EventCode) -> Self {
        DeepLinkIntent::EventJoin { event_code }
    }

    /// View intent for an event ID.
    pub fn view(event_id: impl Into<String>) -> Self {
        DeepLinkIntent::EventView {
            event_id: event_id.into(),
        }
    }

    /// The tag used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            DeepLinkIntent::EventJoin { .. } => "event_join",
            DeepLinkIntent::EventView { .. } => "event_view",
            DeepLinkIntent::MediaView { .. } => "media_view",
            DeepLinkIntent::Auth => "auth",
        }
    }

    /// The join code, for join intents.
    pub fn event_code(&self) -> Option<&EventCode> {
        match self {
            DeepLinkIntent::EventJoin { event_code } => Some(event_code),
            _ => None,
        }
    }

    /// The event ID, for view intents.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            DeepLinkIntent::EventView { event_id } => Some(event_id),
            _ => None,
        }
    }
}
