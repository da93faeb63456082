#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod constants;
pub mod ids;
pub mod principal;
pub mod role;
pub mod scope;

pub use constants::DENY_SENTINEL_ID;
pub use ids::{HospitalId, WardId};
pub use principal::{Principal, PrincipalBuilder};
pub use role::{Role, UnknownRoleError};
pub use scope::{ScopeAttributes, ScopeResolver};
