//! Field-level access to listable entities.

use chrono::NaiveDateTime;

/// A single field value as seen by the predicate evaluator.
///
/// Variants are ordered so that sorting a mixed column is still total, but
/// a well-formed resource never mixes kinds within one field.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// Entity that can be listed, filtered and sorted by field name.
///
/// Field names are the public (camelCase) names used in query parameters,
/// e.g. `createdAt` or `firstName`.
pub trait Record {
    /// Primary key of the record.
    fn id(&self) -> i32;

    /// Value of the named field, `None` when the field does not exist.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
