use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::constraints::Predicate;
use crate::query::ScopedQuery;
use crate::resource::ResourceKind;

/// Visibility predicates of one request, one per resource kind.
///
/// Every kind is always present. `broad_scope` records that the principal was
/// granted national visibility through the district-less government branch;
/// callers may want to surface that in their own request logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    predicates: [Predicate; ResourceKind::COUNT],
    broad_scope: bool,
}

impl FilterSet {
    /// Builds a set by computing the predicate of every kind in `ResourceKind::ALL` order.
    ///
    /// Reserved for the evaluator in the `tenant_filter` module. Data-access
    /// code receives a `FilterSet` from [`crate::TenantFilterApi::evaluate`]
    /// and never builds one.
    #[doc(hidden)]
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(ResourceKind) -> Predicate) -> Self {
        Self {
            predicates: std::array::from_fn(|i| f(ResourceKind::ALL[i])),
            broad_scope: false,
        }
    }

    #[doc(hidden)]
    #[must_use]
    pub fn with_broad_scope(mut self, broad_scope: bool) -> Self {
        self.broad_scope = broad_scope;
        self
    }

    #[inline]
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> &Predicate {
        &self.predicates[kind.index()]
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &Predicate)> {
        ResourceKind::ALL.into_iter().zip(self.predicates.iter())
    }

    #[must_use]
    pub fn is_broad_scope(&self) -> bool {
        self.broad_scope
    }

    /// Starts a query on `kind` already restricted by its visibility predicate.
    #[must_use]
    pub fn scoped(&self, kind: ResourceKind) -> ScopedQuery {
        ScopedQuery::new(kind, self.get(kind).clone())
    }
}

struct PredicateMap<'a>(&'a FilterSet);

impl Serialize for PredicateMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ResourceKind::COUNT))?;
        for (kind, predicate) in self.0.iter() {
            map.serialize_entry(kind.as_str(), predicate)?;
        }
        map.end()
    }
}

impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FilterSet", 2)?;
        s.serialize_field("broad_scope", &self.broad_scope)?;
        s.serialize_field("predicates", &PredicateMap(self))?;
        s.end()
    }
}
