//! # EventShare Links
//!
//! This crate turns the strings that reach the app (QR payloads, pasted codes,
//! incoming URLs, browser locations) into typed intents, and builds the links
//! the app shares.
//!
//! ## Overview
//!
//! The eventshare-links crate handles:
//! - **Parsing**: Ordered pattern table classifying links and join codes
//! - **Intents**: What the app should do next (join, view event, view media, auth)
//! - **Codes**: Validation and generation of 6-character join codes
//! - **Building**: Web and app-scheme links for sharing and QR codes
//! - **QR payloads**: The JSON object encoded in event QR codes
//! - **Routing**: Screen to open for an intent
//! - **Configuration**: Web host and app scheme, loaded from the environment
//!
//! ## Usage
//!
//! ```rust
//! use eventshare_links::{build_join_url, parse_deep_link, route_for, Platform, Route};
//!
//! let link = build_join_url("ab12cd", Platform::Web).unwrap();
//! assert_eq!(link, "https://eventshare.app/join/AB12CD");
//!
//! let intent = parse_deep_link(&link).unwrap();
//! assert!(matches!(route_for(&intent), Some(Route::JoinEvent { .. })));
//! ```
//!
//! ## Error Handling
//!
//! Parsing is total: unrecognized input yields `None`, which callers surface as
//! an "invalid code" prompt. Only link building returns errors ([`LinkError`]).

pub mod builder;
pub mod code;
pub mod config;
pub mod error;
pub mod intent;
pub mod patterns;
pub mod qr;
pub mod routing;

// Re-export main types for convenience
pub use builder::{
    build_event_url, build_join_url, build_join_url_with_event, is_valid_event_id, Platform,
};
pub use code::{is_valid_code, EventCode};
pub use config::{ConfigError, LinkConfig};
pub use error::{LinkError, LinkResult};
pub use intent::DeepLinkIntent;
pub use patterns::{
    default_parser, parse_deep_link, parse_web_path, DeepLinkParser, LinkPattern, PatternKind,
};
pub use qr::{QrPayload, QR_VERSION};
pub use routing::{route_for, Route};
