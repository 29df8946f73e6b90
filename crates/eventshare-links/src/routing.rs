//! Navigation targets for classified links.

use serde::{Deserialize, Serialize};

use crate::code::EventCode;
use crate::intent::DeepLinkIntent;

/// Screen the app opens for a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "PascalCase")]
pub enum Route {
    /// Join screen, prefilled with the code.
    JoinEvent {
        /// Code to prefill.
        event_code: EventCode,
    },
    /// Event detail screen.
    EventDetail {
        /// Event to open; the caller loads it before navigating.
        event_id: String,
    },
}

/// Map an intent to the screen that handles it.
///
/// Media and auth intents have no screen of their own yet and yield `None`.
pub fn route_for(intent: &DeepLinkIntent) -> Option<Route> {
    match intent {
        DeepLinkIntent::EventJoin { event_code } => Some(Route::JoinEvent {
            event_code: event_code.clone(),
        }),
        DeepLinkIntent::EventView { event_id } => Some(Route::EventDetail {
            event_id: event_id.clone(),
        }),
        other => {
            tracing::debug!(kind = other.kind(), "Unsupported deep link type");
            None
        }
    }
}
