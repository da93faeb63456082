//! Domain layer for the tenant filter.

pub mod evaluator;
pub mod guard;
pub mod local_client;
pub mod policy_table;

pub use evaluator::FilterEvaluator;
pub use guard::require_role;
pub use local_client::TenantFilterLocalClient;
pub use policy_table::{BUILTIN_POLICY, PolicyEntry, PolicyTable, Rule};
