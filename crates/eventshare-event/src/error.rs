//! Error types for role management
//!
//! Role changes are the only membership operation that can be refused: the
//! caller is attempting an action that may be illegitimate.

use thiserror::Error;

use crate::roles::Role;

/// Reasons a role change is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleChangeError {
    /// The actor is trying to change their own role
    #[error("You cannot change your own role")]
    SelfRoleChange,

    /// The actor's role does not allow managing the target
    #[error("A {actor} cannot change the role of a {target}")]
    InsufficientPrivilege {
        /// Role of the acting user
        actor: Role,
        /// Current role of the target user
        target: Role,
    },

    /// The proposed role is at or above the actor's own role
    #[error("A {actor} cannot assign the {proposed} role")]
    PrivilegeEscalation {
        /// Role of the acting user
        actor: Role,
        /// Role the actor tried to grant
        proposed: Role,
    },
}

/// Result type for role management operations.
pub type RoleChangeResult<T> = Result<T, RoleChangeError>;

impl RoleChangeError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RoleChangeError::SelfRoleChange => "SELF_ROLE_CHANGE",
            RoleChangeError::InsufficientPrivilege { .. } => "INSUFFICIENT_PRIVILEGE",
            RoleChangeError::PrivilegeEscalation { .. } => "PRIVILEGE_ESCALATION",
        }
    }
}
