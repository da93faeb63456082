//! Tenant Filter SDK
//!
//! Public contract of the `tenant_filter` module:
//!
//! - [`TenantFilterApi`] - entry point consumed by data-access code
//! - [`ResourceKind`], [`ScopePaths`] - queryable entity kinds and how they relate to wards
//! - [`Predicate`], [`FilterSet`] - per-kind visibility predicates produced for a request
//! - [`ScopedQuery`], [`Condition`] - AND-only composition with business filters
//! - [`TenantFilterError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_filter_sdk::{Condition, ResourceKind, TenantFilterApi};
//!
//! let filters = client.evaluate(&principal)?;
//! let query = filters
//!     .scoped(ResourceKind::Alert)
//!     .and(Condition::between("created_at", Some(from), None));
//! let where_doc = query.to_filter_document();
//! ```

pub mod api;
pub mod constraints;
pub mod error;
pub mod filter_set;
pub mod models;
pub mod query;
pub mod record;
pub mod resource;

pub use api::TenantFilterApi;
pub use constraints::{EqPredicate, Predicate, ScopeValue};
pub use error::TenantFilterError;
pub use filter_set::FilterSet;
pub use models::{
    AdmissionReport, Alert, Hospital, Severity, Ward, WardLink, WaterQualityReport, WeatherRecord,
};
pub use query::{Condition, ScopedQuery};
pub use record::{PropertyValue, ScopedRecord};
pub use resource::{ResourceKind, ScopePaths, scope_properties};
