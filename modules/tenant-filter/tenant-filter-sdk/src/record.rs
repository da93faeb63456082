//! Property access for in-memory records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::resource::ResourceKind;

/// Borrowed value of a record property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue<'a> {
    Id(Uuid),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

/// A record that predicates and business conditions can be evaluated against.
///
/// `property` resolves the same paths that predicates are expressed in,
/// including dotted paths through a parent reference. Unknown paths return
/// `None`, which makes any predicate on them fail to match.
pub trait ScopedRecord {
    const KIND: ResourceKind;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>>;
}
