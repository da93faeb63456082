use std::sync::Arc;

use tenant_filter_sdk::{FilterSet, Predicate, TenantFilterError};
use ww_security::{Principal, Role, ScopeAttributes, ScopeResolver};

use super::policy_table::{Applied, PolicyTable};
use crate::config::TenantFilterConfig;

/// Combines the policy table with a principal's scope attributes.
///
/// Evaluation is a pure function of the compiled table and the attributes:
/// it keeps no per-request state, so one evaluator serves all requests.
#[derive(Clone, Debug)]
pub struct FilterEvaluator {
    table: Arc<PolicyTable>,
    config: TenantFilterConfig,
}

impl FilterEvaluator {
    #[must_use]
    pub fn new(table: PolicyTable, config: TenantFilterConfig) -> Self {
        Self {
            table: Arc::new(table),
            config,
        }
    }

    #[must_use]
    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Produces the visibility predicate of every resource kind.
    ///
    /// A missing ward or hospital reference turns the affected kinds into
    /// `Predicate::Deny`; it is not an error.
    ///
    /// # Errors
    /// `RoleUnrecognized` if the role is not declared. No predicate is
    /// produced in that case.
    pub fn evaluate(&self, attrs: &ScopeAttributes) -> Result<FilterSet, TenantFilterError> {
        let role: Role = attrs.role().parse().inspect_err(|_| {
            tracing::warn!(role = attrs.role(), "rejecting principal with unrecognized role");
        })?;

        let mut national = false;
        let filters = FilterSet::from_fn(|kind| {
            let predicate = match self.table.rule(role, kind).apply(kind, attrs) {
                Applied::Predicate(predicate) => predicate,
                Applied::National => {
                    national = true;
                    Predicate::Unconstrained
                }
                Applied::Missing(attribute) => {
                    tracing::debug!(
                        role = %role,
                        kind = %kind,
                        attribute,
                        "scope attribute missing, denying"
                    );
                    Predicate::Deny
                }
            };
            if self.config.log_decisions {
                tracing::debug!(role = %role, kind = %kind, predicate = ?predicate, "visibility predicate");
            }
            predicate
        });

        if national && self.config.broad_scope_warning {
            tracing::warn!(
                role = %role,
                "principal has no district, granting national visibility"
            );
        }

        Ok(filters.with_broad_scope(national))
    }

    /// Resolves the principal's scope attributes and evaluates them.
    ///
    /// # Errors
    /// See [`FilterEvaluator::evaluate`].
    pub fn evaluate_principal(&self, principal: &Principal) -> Result<FilterSet, TenantFilterError> {
        let span = tracing::debug_span!("tenant_filter.evaluate", subject_id = %principal.subject_id());
        let _guard = span.enter();
        self.evaluate(&ScopeResolver::resolve(principal))
    }
}
