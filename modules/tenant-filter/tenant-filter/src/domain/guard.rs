//! Role gate for operations restricted to a subset of roles.

use tenant_filter_sdk::TenantFilterError;
use ww_security::{Role, ScopeAttributes};

/// Parses the principal's role and checks it against `allowed`.
///
/// This decides whether an operation may run at all; what it may see is
/// still decided by the visibility predicates.
///
/// # Errors
/// - `RoleUnrecognized` if the role is not declared
/// - `RoleNotPermitted` if the role is declared but not in `allowed`
pub fn require_role(attrs: &ScopeAttributes, allowed: &[Role]) -> Result<Role, TenantFilterError> {
    let role: Role = attrs.role().parse()?;
    if allowed.contains(&role) {
        Ok(role)
    } else {
        tracing::debug!(role = %role, "role not permitted for operation");
        Err(TenantFilterError::RoleNotPermitted {
            role,
            allowed: allowed.to_vec(),
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use ww_security::{Principal, ScopeResolver};

    fn attrs(role: &str) -> ScopeAttributes {
        ScopeResolver::resolve(&Principal::builder(role).build())
    }

    #[test]
    fn admission_summary_is_gov_or_hospital_only() {
        let allowed = [Role::Gov, Role::Hospital];
        assert_eq!(require_role(&attrs("GOV"), &allowed), Ok(Role::Gov));
        assert_eq!(require_role(&attrs("HOSPITAL"), &allowed), Ok(Role::Hospital));
        assert_eq!(
            require_role(&attrs("CITIZEN"), &allowed),
            Err(TenantFilterError::RoleNotPermitted {
                role: Role::Citizen,
                allowed: allowed.to_vec(),
            })
        );
    }

    #[test]
    fn unknown_role_is_unrecognized_not_forbidden() {
        assert!(matches!(
            require_role(&attrs("AUDITOR"), &Role::ALL),
            Err(TenantFilterError::RoleUnrecognized { .. })
        ));
    }
}
