//! Local (in-process) client for the tenant filter module.

use std::sync::Arc;

use tenant_filter_sdk::{FilterSet, TenantFilterApi, TenantFilterError};
use ww_security::Principal;

use super::FilterEvaluator;

/// Local client wrapping the filter evaluator.
///
/// Created once at startup by [`crate::build_client`] and shared by all
/// request handlers.
pub struct TenantFilterLocalClient {
    evaluator: Arc<FilterEvaluator>,
}

impl TenantFilterLocalClient {
    #[must_use]
    pub fn new(evaluator: Arc<FilterEvaluator>) -> Self {
        Self { evaluator }
    }
}

impl TenantFilterApi for TenantFilterLocalClient {
    fn evaluate(&self, principal: &Principal) -> Result<FilterSet, TenantFilterError> {
        self.evaluator.evaluate_principal(principal)
    }
}
