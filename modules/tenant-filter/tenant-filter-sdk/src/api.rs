//! Public API trait for tenant filter evaluation.

use ww_security::Principal;

use crate::error::TenantFilterError;
use crate::filter_set::FilterSet;

/// Public API trait for the tenant filter module.
///
/// Data-access code calls [`TenantFilterApi::evaluate`] once per request and
/// composes the predicate for the kind it queries through
/// [`FilterSet::scoped`]:
///
/// ```ignore
/// let filters = client.evaluate(&principal)?;
/// let wards = store.find(filters.scoped(ResourceKind::Ward).to_filter_document())?;
/// ```
///
/// The returned [`FilterSet`] belongs to the request. It must not be cached
/// across requests, and an error must never be answered with an unscoped
/// query.
pub trait TenantFilterApi: Send + Sync {
    /// Evaluate visibility predicates for every resource kind.
    ///
    /// # Errors
    ///
    /// - `RoleUnrecognized` if the principal's role is not a declared role
    fn evaluate(&self, principal: &Principal) -> Result<FilterSet, TenantFilterError>;
}
