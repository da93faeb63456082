use crate::{HospitalId, Principal, WardId};

/// Scope attributes of a principal, as consumed by filter evaluation.
///
/// Only `role` is mandatory. An empty district is normalized to `None` so that
/// "no district" has exactly one representation. Any other value, including
/// one made of whitespace, is kept verbatim and compared as is.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScopeAttributes {
    pub(crate) role: String,
    pub(crate) ward_ref: Option<WardId>,
    pub(crate) hospital_ref: Option<HospitalId>,
    pub(crate) district: Option<String>,
}

impl ScopeAttributes {
    #[inline]
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[inline]
    #[must_use]
    pub fn ward_ref(&self) -> Option<WardId> {
        self.ward_ref
    }

    #[inline]
    #[must_use]
    pub fn hospital_ref(&self) -> Option<HospitalId> {
        self.hospital_ref
    }

    #[inline]
    #[must_use]
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// Returns true if no scope attribute besides the role is set.
    #[must_use]
    pub fn is_unscoped(&self) -> bool {
        self.ward_ref.is_none() && self.hospital_ref.is_none() && self.district.is_none()
    }
}

/// Extracts [`ScopeAttributes`] from an authenticated [`Principal`].
pub struct ScopeResolver;

impl ScopeResolver {
    #[must_use]
    pub fn resolve(principal: &Principal) -> ScopeAttributes {
        ScopeAttributes {
            role: principal.role().to_owned(),
            ward_ref: principal.ward_ref(),
            hospital_ref: principal.hospital_ref(),
            district: principal
                .district()
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
        }
    }
}
