//! Tenant Filter Module
//!
//! Derives, for an authenticated principal, one visibility predicate per
//! resource kind from a static (role, kind) policy table.
//!
//! The policy table is compiled once at startup by [`build_client`], which
//! fails if any declared (role, kind) pair is missing. The returned
//! [`TenantFilterApi`] is shared by all request handlers.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::sync::Arc;

use tenant_filter_sdk::{TenantFilterApi, TenantFilterError};

pub mod config;
pub mod domain;

pub use config::{ConfigError, TenantFilterConfig};
pub use domain::{
    BUILTIN_POLICY, FilterEvaluator, PolicyEntry, PolicyTable, Rule, TenantFilterLocalClient,
    require_role,
};

/// Compiles the built-in policy table and returns the shared client.
///
/// # Errors
/// Returns a policy table defect (`PolicyTableGap`, `PolicyTableDuplicate`,
/// `RuleNotApplicable`). These are programming errors and must abort startup.
pub fn build_client(
    config: TenantFilterConfig,
) -> Result<Arc<dyn TenantFilterApi>, TenantFilterError> {
    let evaluator = FilterEvaluator::new(PolicyTable::builtin()?, config);
    Ok(Arc::new(TenantFilterLocalClient::new(Arc::new(evaluator))))
}
