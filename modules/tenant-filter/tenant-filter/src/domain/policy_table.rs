//! Static (role, resource kind) policy table.
//!
//! [`BUILTIN_POLICY`] is plain static data. [`PolicyTable::compile`] checks it
//! against the full `Role::ALL x ResourceKind::ALL` cross product and turns it
//! into a dense lookup, so a missing entry is found at startup and a lookup
//! at request time cannot fail.

use tenant_filter_sdk::{Predicate, ResourceKind, TenantFilterError};
use ww_security::{Role, ScopeAttributes};

/// Predicate construction rule for one (role, kind) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Matches everything, regardless of scope attributes.
    Unconstrained,
    /// Matches nothing, regardless of scope attributes.
    Deny,
    /// `district_path = district`; a principal without a district is
    /// nationally scoped and gets an unconstrained predicate.
    DistrictOrNational,
    /// `ward_path = ward_ref`, deny when the principal has no ward.
    WardOrDeny,
    /// `hospital_path = hospital_ref`, deny when the principal has no hospital.
    HospitalOrDeny,
}

/// Outcome of applying a rule to one principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Applied {
    Predicate(Predicate),
    /// District-less government principal, visibility is national.
    National,
    /// A required scope attribute is absent; the caller substitutes deny.
    Missing(&'static str),
}

impl Rule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Unconstrained => "unconstrained",
            Rule::Deny => "deny",
            Rule::DistrictOrNational => "district_or_national",
            Rule::WardOrDeny => "ward_or_deny",
            Rule::HospitalOrDeny => "hospital_or_deny",
        }
    }

    /// Returns true if `kind` declares the scope path the rule constrains.
    #[must_use]
    pub const fn applies_to(self, kind: ResourceKind) -> bool {
        match self {
            Rule::HospitalOrDeny => kind.scope_paths().hospital.is_some(),
            Rule::Unconstrained | Rule::Deny | Rule::DistrictOrNational | Rule::WardOrDeny => true,
        }
    }

    pub(crate) fn apply(self, kind: ResourceKind, attrs: &ScopeAttributes) -> Applied {
        let paths = kind.scope_paths();
        match self {
            Rule::Unconstrained => Applied::Predicate(Predicate::Unconstrained),
            Rule::Deny => Applied::Predicate(Predicate::Deny),
            Rule::DistrictOrNational => match attrs.district() {
                Some(district) => Applied::Predicate(Predicate::equals(paths.district, district)),
                None => Applied::National,
            },
            Rule::WardOrDeny => match attrs.ward_ref() {
                Some(ward) => Applied::Predicate(Predicate::equals(paths.ward, ward)),
                None => Applied::Missing("ward_ref"),
            },
            Rule::HospitalOrDeny => match (paths.hospital, attrs.hospital_ref()) {
                (Some(path), Some(hospital)) => {
                    Applied::Predicate(Predicate::equals(path, hospital))
                }
                (Some(_), None) => Applied::Missing("hospital_ref"),
                // Rejected by `PolicyTable::compile`.
                (None, _) => Applied::Predicate(Predicate::Deny),
            },
        }
    }
}

/// One row of a policy table declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyEntry {
    pub role: Role,
    pub kind: ResourceKind,
    pub rule: Rule,
}

const fn entry(role: Role, kind: ResourceKind, rule: Rule) -> PolicyEntry {
    PolicyEntry { role, kind, rule }
}

/// The platform policy.
///
/// | Role | Ward | Hospital | Alert | Admission | Water | Weather |
/// |------|------|----------|-------|-----------|-------|---------|
/// | GOV | district | city (proxy) | ward.district | ward.district | ward.district | ward.district |
/// | HOSPITAL | id | id | ward_id | hospital_id | ward_id | ward_id |
/// | CITIZEN | id | deny | ward_id | deny | ward_id | ward_id |
/// | `SUPER_ADMIN` | all | all | all | all | all | all |
///
/// Citizens never see hospital-internal data, whatever their attributes.
pub static BUILTIN_POLICY: &[PolicyEntry] = &[
    entry(Role::Gov, ResourceKind::Ward, Rule::DistrictOrNational),
    entry(Role::Gov, ResourceKind::Hospital, Rule::DistrictOrNational),
    entry(Role::Gov, ResourceKind::Alert, Rule::DistrictOrNational),
    entry(Role::Gov, ResourceKind::AdmissionReport, Rule::DistrictOrNational),
    entry(Role::Gov, ResourceKind::WaterQualityReport, Rule::DistrictOrNational),
    entry(Role::Gov, ResourceKind::WeatherRecord, Rule::DistrictOrNational),
    entry(Role::Hospital, ResourceKind::Ward, Rule::WardOrDeny),
    entry(Role::Hospital, ResourceKind::Hospital, Rule::HospitalOrDeny),
    entry(Role::Hospital, ResourceKind::Alert, Rule::WardOrDeny),
    entry(Role::Hospital, ResourceKind::AdmissionReport, Rule::HospitalOrDeny),
    entry(Role::Hospital, ResourceKind::WaterQualityReport, Rule::WardOrDeny),
    entry(Role::Hospital, ResourceKind::WeatherRecord, Rule::WardOrDeny),
    entry(Role::Citizen, ResourceKind::Ward, Rule::WardOrDeny),
    entry(Role::Citizen, ResourceKind::Hospital, Rule::Deny),
    entry(Role::Citizen, ResourceKind::Alert, Rule::WardOrDeny),
    entry(Role::Citizen, ResourceKind::AdmissionReport, Rule::Deny),
    entry(Role::Citizen, ResourceKind::WaterQualityReport, Rule::WardOrDeny),
    entry(Role::Citizen, ResourceKind::WeatherRecord, Rule::WardOrDeny),
    entry(Role::SuperAdmin, ResourceKind::Ward, Rule::Unconstrained),
    entry(Role::SuperAdmin, ResourceKind::Hospital, Rule::Unconstrained),
    entry(Role::SuperAdmin, ResourceKind::Alert, Rule::Unconstrained),
    entry(Role::SuperAdmin, ResourceKind::AdmissionReport, Rule::Unconstrained),
    entry(Role::SuperAdmin, ResourceKind::WaterQualityReport, Rule::Unconstrained),
    entry(Role::SuperAdmin, ResourceKind::WeatherRecord, Rule::Unconstrained),
];

/// Verified, immutable policy lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyTable {
    rules: [[Rule; ResourceKind::COUNT]; Role::COUNT],
}

impl PolicyTable {
    /// Compiles [`BUILTIN_POLICY`].
    ///
    /// # Errors
    /// See [`PolicyTable::compile`].
    pub fn builtin() -> Result<Self, TenantFilterError> {
        Self::compile(BUILTIN_POLICY)
    }

    /// Verifies a declaration and builds the lookup.
    ///
    /// # Errors
    /// - `PolicyTableDuplicate` if a (role, kind) pair is declared twice
    /// - `RuleNotApplicable` if a rule needs a scope path the kind lacks
    /// - `PolicyTableGap` if a (role, kind) pair is not declared
    pub fn compile(entries: &[PolicyEntry]) -> Result<Self, TenantFilterError> {
        let mut slots = [[None::<Rule>; ResourceKind::COUNT]; Role::COUNT];

        for e in entries {
            if !e.rule.applies_to(e.kind) {
                return Err(TenantFilterError::RuleNotApplicable {
                    role: e.role,
                    kind: e.kind,
                    rule: e.rule.name(),
                });
            }
            let slot = &mut slots[e.role.index()][e.kind.index()];
            if slot.is_some() {
                return Err(TenantFilterError::PolicyTableDuplicate {
                    role: e.role,
                    kind: e.kind,
                });
            }
            *slot = Some(e.rule);
        }

        let mut rules = [[Rule::Deny; ResourceKind::COUNT]; Role::COUNT];
        for role in Role::ALL {
            for kind in ResourceKind::ALL {
                rules[role.index()][kind.index()] = slots[role.index()][kind.index()]
                    .ok_or(TenantFilterError::PolicyTableGap { role, kind })?;
            }
        }

        tracing::info!(
            roles = Role::COUNT,
            kinds = ResourceKind::COUNT,
            "tenant filter policy table compiled"
        );
        Ok(Self { rules })
    }

    #[inline]
    #[must_use]
    pub fn rule(&self, role: Role, kind: ResourceKind) -> Rule {
        self.rules[role.index()][kind.index()]
    }
}
