//! Visibility predicates produced by filter evaluation.
//!
//! A predicate is always one of three explicit states. There is no "empty"
//! predicate: a principal that cannot be scoped gets [`Predicate::Deny`], which
//! matches nothing, never [`Predicate::Unconstrained`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use ww_security::{DENY_SENTINEL_ID, HospitalId, WardId};

use crate::record::{PropertyValue, ScopedRecord};

/// Visibility predicate for one resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    /// Matches every record.
    Unconstrained,
    /// Equality: `resource_property = value`
    Eq(EqPredicate),
    /// Matches no record.
    Deny,
}

/// Equality predicate: `property = value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqPredicate {
    /// Resource property path (e.g., `scope_properties::WARD_DISTRICT`).
    pub property: String,
    /// The value to match.
    pub value: ScopeValue,
}

/// Value side of an equality predicate.
///
/// Tagged on the wire: a district name shaped like a uuid must stay text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ScopeValue {
    Id(Uuid),
    Text(String),
}

impl Predicate {
    #[must_use]
    pub fn equals(property: &str, value: impl Into<ScopeValue>) -> Self {
        Self::Eq(EqPredicate {
            property: property.to_owned(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    #[must_use]
    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny)
    }

    /// Evaluates the predicate against an in-memory record.
    ///
    /// A record that does not expose the constrained property does not match.
    #[must_use]
    pub fn matches<R: ScopedRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Deny => false,
            Self::Eq(eq) => eq.matches(record),
        }
    }

    /// Renders the predicate as a store filter document.
    ///
    /// `Unconstrained` renders as `{}`. `Deny` renders as an equality on
    /// `id_path` against [`DENY_SENTINEL_ID`], which no record carries.
    #[must_use]
    pub fn to_filter_document(&self, id_path: &str) -> Value {
        match self {
            Self::Unconstrained => Value::Object(Map::new()),
            Self::Eq(eq) => nested_document(&eq.property, eq.value.to_json()),
            Self::Deny => nested_document(id_path, Value::String(DENY_SENTINEL_ID.to_string())),
        }
    }
}

impl EqPredicate {
    #[must_use]
    pub fn matches<R: ScopedRecord + ?Sized>(&self, record: &R) -> bool {
        record
            .property(&self.property)
            .is_some_and(|actual| self.value.matches(&actual))
    }
}

impl ScopeValue {
    #[must_use]
    pub fn matches(&self, actual: &PropertyValue<'_>) -> bool {
        match (self, actual) {
            (Self::Id(expected), PropertyValue::Id(actual)) => expected == actual,
            (Self::Text(expected), PropertyValue::Text(actual)) => expected == actual,
            _ => false,
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        match self {
            Self::Id(id) => Value::String(id.to_string()),
            Self::Text(text) => Value::String(text.clone()),
        }
    }
}

impl From<Uuid> for ScopeValue {
    fn from(id: Uuid) -> Self {
        Self::Id(id)
    }
}

impl From<WardId> for ScopeValue {
    fn from(id: WardId) -> Self {
        Self::Id(id.as_uuid())
    }
}

impl From<HospitalId> for ScopeValue {
    fn from(id: HospitalId) -> Self {
        Self::Id(id.as_uuid())
    }
}

impl From<&str> for ScopeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ScopeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// `ward.district` + `v` becomes `{"ward": {"district": v}}`.
pub(crate) fn nested_document(path: &str, leaf: Value) -> Value {
    path.rsplit('.').fold(leaf, |inner, segment| {
        let mut obj = Map::new();
        obj.insert(segment.to_owned(), inner);
        Value::Object(obj)
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::resource::scope_properties;
    use serde_json::json;

    #[test]
    fn predicate_tag_serialization() {
        let eq = Predicate::equals(scope_properties::DISTRICT, "Maharashtra");
        let json = serde_json::to_value(&eq).unwrap();
        assert_eq!(
            json,
            json!({
                "op": "eq",
                "property": "district",
                "value": {"type": "text", "value": "Maharashtra"}
            })
        );

        let json = serde_json::to_string(&Predicate::Deny).unwrap();
        assert_eq!(json, r#"{"op":"deny"}"#);

        let json = serde_json::to_string(&Predicate::Unconstrained).unwrap();
        assert_eq!(json, r#"{"op":"unconstrained"}"#);
    }

    #[test]
    fn id_values_survive_serialization() {
        let ward = WardId::new_v4();
        let eq = Predicate::equals(scope_properties::WARD_ID, ward);
        let json = serde_json::to_string(&eq).unwrap();
        let back: Predicate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eq);
    }

    #[test]
    fn uuid_shaped_text_stays_text() {
        let text = "550e8400-e29b-41d4-a716-446655440000";
        let eq = Predicate::equals(scope_properties::DISTRICT, text);
        let json = serde_json::to_string(&eq).unwrap();
        let back: Predicate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eq);

        let Predicate::Eq(back) = back else {
            panic!("expected an equality predicate");
        };
        assert!(back.value.matches(&PropertyValue::Text(text)));
        assert!(!back.value.matches(&PropertyValue::Id(Uuid::parse_str(text).unwrap())));
    }

    #[test]
    fn nested_paths_render_as_nested_documents() {
        let eq = Predicate::equals(scope_properties::WARD_DISTRICT, "Delhi");
        assert_eq!(
            eq.to_filter_document(scope_properties::ID),
            json!({"ward": {"district": "Delhi"}})
        );
    }

    #[test]
    fn deny_renders_sentinel_and_unconstrained_renders_empty() {
        assert_eq!(
            Predicate::Deny.to_filter_document(scope_properties::ID),
            json!({"id": "00000000-0000-0000-0000-000000000000"})
        );
        assert_eq!(
            Predicate::Unconstrained.to_filter_document(scope_properties::ID),
            json!({})
        );
    }

    #[test]
    fn text_never_matches_id() {
        let id = Uuid::new_v4();
        let value = ScopeValue::Text(id.to_string());
        assert!(!value.matches(&PropertyValue::Id(id)));
        assert!(ScopeValue::Id(id).matches(&PropertyValue::Id(id)));
    }
}
