//! Composition of visibility predicates with business conditions.
//!
//! [`ScopedQuery`] only offers [`ScopedQuery::and`]. A business condition can
//! narrow what the visibility predicate allows but can never widen, replace
//! or remove it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::constraints::{EqPredicate, Predicate, ScopeValue, nested_document};
use crate::record::{PropertyValue, ScopedRecord};
use crate::resource::ResourceKind;

/// Business condition composed onto a scoped query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// `property = value`
    Eq(EqPredicate),
    /// `from <= property <= to` on a timestamp property; open bounds are skipped.
    Between {
        property: String,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
}

impl Condition {
    #[must_use]
    pub fn equals(property: &str, value: impl Into<ScopeValue>) -> Self {
        Self::Eq(EqPredicate {
            property: property.to_owned(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn between(
        property: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        Self::Between {
            property: property.to_owned(),
            from,
            to,
        }
    }

    #[must_use]
    pub fn matches<R: ScopedRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::Eq(eq) => eq.matches(record),
            Self::Between { property, from, to } => match record.property(property) {
                Some(PropertyValue::Timestamp(t)) => {
                    from.is_none_or(|from| t >= from) && to.is_none_or(|to| t <= to)
                }
                _ => false,
            },
        }
    }

    fn to_filter_document(&self) -> Value {
        match self {
            Self::Eq(eq) => nested_document(&eq.property, eq.value.to_json()),
            Self::Between { property, from, to } => {
                let mut range = Map::new();
                if let Some(from) = from {
                    range.insert("gte".to_owned(), Value::String(from.to_rfc3339()));
                }
                if let Some(to) = to {
                    range.insert("lte".to_owned(), Value::String(to.to_rfc3339()));
                }
                nested_document(property, Value::Object(range))
            }
        }
    }
}

/// A query on one resource kind, restricted by the request's visibility predicate.
///
/// The only way to obtain one is [`FilterSet::scoped`]; callers cannot pair a
/// kind with a predicate of their own choosing.
///
/// ```compile_fail
/// use tenant_filter_sdk::{Predicate, ResourceKind, ScopedQuery};
///
/// let _ = ScopedQuery::new(ResourceKind::Ward, Predicate::Unconstrained);
/// ```
///
/// [`FilterSet::scoped`]: crate::FilterSet::scoped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedQuery {
    kind: ResourceKind,
    visibility: Predicate,
    conditions: Vec<Condition>,
}

impl ScopedQuery {
    #[must_use]
    pub(crate) fn new(kind: ResourceKind, visibility: Predicate) -> Self {
        Self {
            kind,
            visibility,
            conditions: Vec::new(),
        }
    }

    /// Narrows the query with an additional condition (logical AND).
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn visibility(&self) -> &Predicate {
        &self.visibility
    }

    #[inline]
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns true if the query cannot match any record regardless of data.
    ///
    /// Callers may skip the store round trip, the result is empty either way.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        self.visibility.is_deny()
    }

    /// Evaluates the query against a record of the query's kind.
    ///
    /// Records of another kind never match.
    #[must_use]
    pub fn matches<R: ScopedRecord>(&self, record: &R) -> bool {
        R::KIND == self.kind
            && self.visibility.matches(record)
            && self.conditions.iter().all(|c| c.matches(record))
    }

    /// Applies the query to an in-memory collection.
    #[must_use]
    pub fn filter<'a, R: ScopedRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Renders the query as an `AND` filter document for a data store.
    ///
    /// An unconstrained visibility predicate contributes no clause.
    #[must_use]
    pub fn to_filter_document(&self) -> Value {
        let id_path = self.kind.scope_paths().id;
        let clauses: Vec<Value> = (!self.visibility.is_unconstrained())
            .then(|| self.visibility.to_filter_document(id_path))
            .into_iter()
            .chain(self.conditions.iter().map(Condition::to_filter_document))
            .collect();
        json!({ "AND": clauses })
    }
}
