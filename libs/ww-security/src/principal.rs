use crate::{HospitalId, WardId};
use uuid::Uuid;

/// `Principal` is the authenticated subject of a single request.
///
/// It is produced by the authentication layer after the credential has been
/// verified and is treated as trusted input here. The role is kept as the raw
/// name that was issued so that an unknown role can be rejected explicitly
/// during filter evaluation instead of being coerced into a default.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Principal {
    subject_id: Uuid,
    role: String,
    ward_ref: Option<WardId>,
    hospital_ref: Option<HospitalId>,
    district: Option<String>,
}

impl Principal {
    /// Create a new `Principal` builder for the given role name
    #[must_use]
    pub fn builder(role: impl Into<String>) -> PrincipalBuilder {
        PrincipalBuilder {
            role: role.into(),
            ..PrincipalBuilder::default()
        }
    }

    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    /// Role name exactly as issued by the authentication layer
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn ward_ref(&self) -> Option<WardId> {
        self.ward_ref
    }

    #[must_use]
    pub fn hospital_ref(&self) -> Option<HospitalId> {
        self.hospital_ref
    }

    #[must_use]
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }
}

#[derive(Default)]
pub struct PrincipalBuilder {
    subject_id: Option<Uuid>,
    role: String,
    ward_ref: Option<WardId>,
    hospital_ref: Option<HospitalId>,
    district: Option<String>,
}

impl PrincipalBuilder {
    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn ward_ref(mut self, ward: WardId) -> Self {
        self.ward_ref = Some(ward);
        self
    }

    #[must_use]
    pub fn hospital_ref(mut self, hospital: HospitalId) -> Self {
        self.hospital_ref = Some(hospital);
        self
    }

    #[must_use]
    pub fn district(mut self, district: &str) -> Self {
        self.district = Some(district.to_owned());
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            subject_id: self.subject_id.unwrap_or_default(),
            role: self.role,
            ward_ref: self.ward_ref,
            hospital_ref: self.hospital_ref,
            district: self.district,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_builder_full() {
        let subject_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        let ward = WardId::new_v4();
        let hospital = HospitalId::new_v4();

        let principal = Principal::builder("HOSPITAL")
            .subject_id(subject_id)
            .ward_ref(ward)
            .hospital_ref(hospital)
            .district("Pune")
            .build();

        assert_eq!(principal.subject_id(), subject_id);
        assert_eq!(principal.role(), "HOSPITAL");
        assert_eq!(principal.ward_ref(), Some(ward));
        assert_eq!(principal.hospital_ref(), Some(hospital));
        assert_eq!(principal.district(), Some("Pune"));
    }

    #[test]
    fn test_principal_builder_minimal() {
        let principal = Principal::builder("SUPER_ADMIN").build();

        assert_eq!(principal.subject_id(), Uuid::default());
        assert_eq!(principal.ward_ref(), None);
        assert_eq!(principal.hospital_ref(), None);
        assert_eq!(principal.district(), None);
    }

    #[test]
    fn test_principal_serialize_deserialize() {
        let original = Principal::builder("CITIZEN")
            .subject_id(Uuid::new_v4())
            .ward_ref(WardId::new_v4())
            .build();

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: Principal = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, original);
    }
}
