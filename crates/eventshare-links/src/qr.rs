//! Event QR code payload.
//!
//! The JSON object encoded in an event's QR code. Scanners that understand it
//! read the fields directly; anything else can follow `webUrl` or `deepLink`,
//! both of which the parser accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::builder::Platform;
use crate::code::EventCode;
use crate::config::LinkConfig;
use crate::error::LinkResult;

/// Payload format version written to new QR codes.
pub const QR_VERSION: &str = "1.0";

/// Data encoded in an event QR code.
///
/// # Example
///
/// ```
/// use eventshare_links::{parse_deep_link, LinkConfig, QrPayload};
///
/// let qr = QrPayload::new(&LinkConfig::default(), "abc-123", "ab12cd", "Launch party", "Deniz").unwrap();
/// assert_eq!(qr.deep_link, "eventshare://join/AB12CD?eventId=abc-123");
/// assert!(parse_deep_link(&qr.web_url).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    /// Event the code belongs to
    pub event_id: String,
    /// Join code, upper-cased
    pub event_code: EventCode,
    /// Event title shown by scanners
    pub event_title: String,
    /// Organizer display name
    pub organizer_name: String,
    /// Web join link carrying the event id
    pub web_url: String,
    /// App-scheme join link carrying the event id
    pub deep_link: String,
    /// Payload format version
    pub qr_version: String,
    /// When the payload was generated
    pub timestamp: DateTime<Utc>,
}

impl QrPayload {
    /// Build the payload for an event, with links from `config`.
    pub fn new(
        config: &LinkConfig,
        event_id: &str,
        event_code: &str,
        event_title: impl Into<String>,
        organizer_name: impl Into<String>,
    ) -> LinkResult<Self> {
        let code = EventCode::parse(event_code)?;
        let web_url = config.join_url_with_event(code.as_str(), event_id, Platform::Web)?;
        let deep_link = config.join_url_with_event(code.as_str(), event_id, Platform::App)?;

        Ok(Self {
            event_id: event_id.to_string(),
            event_code: code,
            event_title: event_title.into(),
            organizer_name: organizer_name.into(),
            web_url,
            deep_link,
            qr_version: QR_VERSION.to_string(),
            timestamp: Utc::now(),
        })
    }
}
