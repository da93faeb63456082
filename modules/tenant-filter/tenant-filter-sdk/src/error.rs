//! Error types for the tenant filter module.

use thiserror::Error;
use ww_security::{Role, UnknownRoleError};

use crate::resource::ResourceKind;

/// Errors that can occur when evaluating or configuring tenant filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenantFilterError {
    /// The principal's role is not one of the declared roles.
    ///
    /// Fatal for the request: no predicate is produced and the caller must
    /// answer with access denied.
    #[error("unrecognized role '{role}': access denied")]
    RoleUnrecognized { role: String },

    /// The role is declared but not allowed for the requested operation.
    #[error("access denied for role {role}: requires one of {}", join_roles(.allowed))]
    RoleNotPermitted { role: Role, allowed: Vec<Role> },

    /// A declared (role, kind) pair has no policy table entry.
    #[error("policy table has no entry for role {role} on {kind}")]
    PolicyTableGap { role: Role, kind: ResourceKind },

    /// A (role, kind) pair is declared more than once.
    #[error("policy table declares role {role} on {kind} more than once")]
    PolicyTableDuplicate { role: Role, kind: ResourceKind },

    /// The rule needs a scope path the resource kind does not declare.
    #[error("rule {rule} for role {role} is not applicable to {kind}")]
    RuleNotApplicable {
        role: Role,
        kind: ResourceKind,
        rule: &'static str,
    },
}

impl TenantFilterError {
    /// Returns true if the error must be surfaced to the end user as access denied.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Self::RoleUnrecognized { .. } | Self::RoleNotPermitted { .. }
        )
    }
}

impl From<UnknownRoleError> for TenantFilterError {
    fn from(err: UnknownRoleError) -> Self {
        Self::RoleUnrecognized { role: err.0 }
    }
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .copied()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(" or ")
}
