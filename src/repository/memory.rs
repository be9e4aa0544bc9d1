//! In-process [`Collection`] over a vector of records.
//!
//! Evaluates predicates with [`QueryPredicate::matches`], which makes it the
//! reference behavior the Diesel translation is tested against.

use std::cmp::Ordering;

use crate::listing::{FieldValue, QueryPredicate, Record, Sort, SortDirection, Window};
use crate::repository::Collection;
use crate::repository::errors::RepositoryResult;

#[derive(Clone, Debug, Default)]
pub struct MemoryCollection<T> {
    records: Vec<T>,
}

impl<T> MemoryCollection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

fn sort_key<T: Record>(record: &T, field: &str) -> Option<FieldValue> {
    if field == Sort::ID_FIELD {
        return Some(FieldValue::Integer(i64::from(record.id())));
    }
    record.field(field)
}

fn compare<T: Record>(left: &T, right: &T, sort: &Sort) -> Ordering {
    let ordering = sort_key(left, &sort.field).cmp(&sort_key(right, &sort.field));
    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    ordering.then_with(|| left.id().cmp(&right.id()))
}

impl<T: Record + Clone> Collection<T> for MemoryCollection<T> {
    fn find_all(&self) -> RepositoryResult<Vec<T>> {
        let mut records = self.records.clone();
        records.sort_by_key(|record| record.id());
        Ok(records)
    }

    fn find_many(
        &self,
        predicate: &QueryPredicate,
        sort: &Sort,
        window: Option<Window>,
    ) -> RepositoryResult<Vec<T>> {
        let mut matching: Vec<T> = self
            .records
            .iter()
            .filter(|record| predicate.matches(*record))
            .cloned()
            .collect();
        matching.sort_by(|left, right| compare(left, right, sort));

        let Some(window) = window else {
            return Ok(matching);
        };
        let skip = usize::try_from(window.skip).unwrap_or(0);
        let take = usize::try_from(window.limit).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(take).collect())
    }

    fn count(&self, predicate: &QueryPredicate) -> RepositoryResult<i64> {
        let total = self
            .records
            .iter()
            .filter(|record| predicate.matches(*record))
            .count();
        Ok(total as i64)
    }
}
