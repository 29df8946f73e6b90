//! Shareable link generation.
//!
//! Produces the payloads encoded in QR codes and share sheets. Every link
//! built here is recognized by the parser built from the same configuration.

use serde::{Deserialize, Serialize};

use crate::code::EventCode;
use crate::config::LinkConfig;
use crate::error::{LinkError, LinkResult};

/// Target platform of a generated link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Browser link on the public web host.
    Web,
    /// App-scheme link opened by the installed app.
    App,
}

impl LinkConfig {
    /// Build a join link for `event_code` on `platform`.
    pub fn join_url(&self, event_code: &str, platform: Platform) -> LinkResult<String> {
        let code = EventCode::parse(event_code)?;
        Ok(match platform {
            Platform::Web => format!("{}/join/{}", self.web_base_url(), code),
            Platform::App => format!("{}join/{}", self.app_prefix(), code),
        })
    }

    /// Build a join link that also carries the event id as an `eventId` query
    /// parameter, as printed on event QR codes.
    ///
    /// The parser reads only the code; the id lets the app skip the code lookup.
    pub fn join_url_with_event(
        &self,
        event_code: &str,
        event_id: &str,
        platform: Platform,
    ) -> LinkResult<String> {
        if !is_valid_event_id(event_id) {
            return Err(LinkError::InvalidEventId(event_id.to_string()));
        }
        let url = self.join_url(event_code, platform)?;
        Ok(format!("{url}?eventId={event_id}"))
    }

    /// Build an event link for `event_id` on `platform`.
    pub fn event_url(&self, event_id: &str, platform: Platform) -> LinkResult<String> {
        if !is_valid_event_id(event_id) {
            return Err(LinkError::InvalidEventId(event_id.to_string()));
        }

        Ok(match platform {
            Platform::Web => format!("{}/event/{}", self.web_base_url(), event_id),
            Platform::App => format!("{}event/{}", self.app_prefix(), event_id),
        })
    }
}

/// Check whether `s` is a non-empty run of hex digits and hyphens.
pub fn is_valid_event_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit() || b == b'-')
}

/// Build a join link with the production configuration.
///
/// The code must be 6 ASCII letters or digits; it is upper-cased in the link.
///
/// # Example
///
/// ```
/// use eventshare_links::{build_join_url, LinkError, Platform};
///
/// assert_eq!(build_join_url("AB12CD", Platform::Web).unwrap(), "https://eventshare.app/join/AB12CD");
/// assert_eq!(build_join_url("AB12CD", Platform::App).unwrap(), "eventshare://join/AB12CD");
/// assert!(matches!(build_join_url("AB12", Platform::Web), Err(LinkError::InvalidEventCode(_))));
/// ```
pub fn build_join_url(event_code: &str, platform: Platform) -> LinkResult<String> {
    LinkConfig::default().join_url(event_code, platform)
}

/// Build a join link carrying the event id with the production configuration.
///
/// # Example
///
/// ```
/// use eventshare_links::{build_join_url_with_event, parse_deep_link, Platform};
///
/// let link = build_join_url_with_event("ab12cd", "abc-123", Platform::App).unwrap();
/// assert_eq!(link, "eventshare://join/AB12CD?eventId=abc-123");
/// assert_eq!(parse_deep_link(&link).unwrap().event_code().unwrap().as_str(), "AB12CD");
/// ```
pub fn build_join_url_with_event(
    event_code: &str,
    event_id: &str,
    platform: Platform,
) -> LinkResult<String> {
    LinkConfig::default().join_url_with_event(event_code, event_id, platform)
}

/// Build an event link with the production configuration.
pub fn build_event_url(event_id: &str, platform: Platform) -> LinkResult<String> {
    LinkConfig::default().event_url(event_id, platform)
}
