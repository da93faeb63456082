use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of roles a principal can hold.
///
/// New roles are added here; the policy table completeness check then forces
/// an entry for every resource kind before the process can start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Government official, scoped to a district.
    Gov,
    /// Hospital administrator, scoped to one hospital and its ward.
    Hospital,
    /// Resident, scoped to their home ward.
    Citizen,
    /// Platform operator with unrestricted visibility.
    SuperAdmin,
}

/// The role name is not one of the declared roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role: {0}")]
pub struct UnknownRoleError(pub String);

impl Role {
    pub const ALL: [Role; 4] = [Role::Gov, Role::Hospital, Role::Citizen, Role::SuperAdmin];
    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Gov => "GOV",
            Role::Hospital => "HOSPITAL",
            Role::Citizen => "CITIZEN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Dense index in `0..Role::COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRoleError(s.to_owned()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
