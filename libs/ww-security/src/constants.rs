use uuid::Uuid;

/// Identifier that never belongs to a real ward, hospital or report.
///
/// Record ids are random (v4) uuids, so the nil uuid is outside the keyspace.
/// It is only used when a deny predicate has to be rendered as an equality
/// filter for a data store.
pub const DENY_SENTINEL_ID: Uuid = Uuid::nil();
