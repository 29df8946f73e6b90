//! # EventShare Event Membership
//!
//! This crate provides the membership domain for EventShare events: who takes
//! part in an event, with which role, and with which explicit grants.
//!
//! ## Overview
//!
//! The eventshare-event crate handles:
//! - **Roles**: The five-level role hierarchy (creator down to viewer)
//! - **Participants**: User-event membership records with explicit grants
//! - **Settings**: Event-wide toggles that modify permissions
//! - **Management**: Who may manage whom and which role changes are legal
//!
//! ## Architecture
//!
//! ```text
//! User
//!   └─ ParticipantRecord ─→ Event
//!        ├─ Role (creator > organizer > moderator > participant > viewer)
//!        └─ GrantSet (upload, download, moderate, delete, manage, edit)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use eventshare_event::{ParticipantRecord, Role, validate_role_change};
//! use uuid::Uuid;
//!
//! let event_id = Uuid::now_v7();
//! let creator = ParticipantRecord::creator(event_id, Uuid::now_v7(), "Selin");
//! let mut guest = ParticipantRecord::joined(event_id, Uuid::now_v7(), "Mert");
//!
//! assert!(validate_role_change(Role::Creator, Role::Participant, Role::Moderator).is_ok());
//! guest.change_role(&creator, Role::Moderator).unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod error;
pub mod management;
pub mod participant;
pub mod roles;
pub mod settings;

// Re-export main types for convenience
pub use error::{RoleChangeError, RoleChangeResult};
pub use management::{assignable_roles, can_manage_user, has_role_or_higher, validate_role_change};
pub use participant::{GrantSet, ParticipantRecord};
pub use roles::Role;
pub use settings::EventSettings;
