//! # EventShare RBAC
//!
//! This crate derives what a user may do inside one event.
//!
//! ## Overview
//!
//! The eventshare-rbac crate handles:
//! - **Permissions**: The effective permission set of a participant
//! - **Actions**: Named UI actions checked against that set
//!
//! ## Architecture
//!
//! ```text
//! EventPermissions = ParticipantRecord.grants  OR  role-tier defaults
//!                    (download additionally AND EventSettings.allow_download)
//!
//! Role tiers:
//!   creator                          -> is_creator
//!   creator, organizer               -> organizer tier
//!   creator, organizer, moderator    -> moderator tier
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use eventshare_event::{EventSettings, ParticipantRecord};
//! use eventshare_rbac::{derive_permissions, PermissionAction};
//! use uuid::Uuid;
//!
//! let record = ParticipantRecord::joined(Uuid::now_v7(), Uuid::now_v7(), "Mert");
//! let perms = derive_permissions(Some(&record), Some(&EventSettings::default()));
//!
//! assert!(perms.allows(PermissionAction::UploadMedia));
//! assert!(!perms.allows(PermissionAction::ApproveMedia));
//! ```
//!
//! ## Integration with eventshare-event
//!
//! Participant records, roles and event settings come from `eventshare-event`.
//! This crate never fetches them; callers pass what they loaded.

pub mod actions;
pub mod permissions;

// Re-export main types for convenience
pub use actions::PermissionAction;
pub use permissions::{check_permission, derive_permissions, EventPermissions};
