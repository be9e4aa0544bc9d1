//! Issues the page and count queries and assembles the list envelope.

use serde::{Deserialize, Serialize};

use crate::listing::pagination::ResolvedPagination;
use crate::listing::predicate::QueryPredicate;
use crate::repository::Collection;
use crate::repository::errors::RepositoryResult;

/// Which set `meta.total` counts when no filter is active.
///
/// With an active filter the total is always the size of the filtered,
/// ID-scoped set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalCountPolicy {
    /// Count the whole backing collection, ignoring the candidate ID set.
    #[default]
    Unscoped,
    /// Count only the candidate ID set.
    Scoped,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// One page of results plus pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListResult<T> {
    pub meta: ListMeta,
    pub data: Vec<T>,
}

impl<T> ListResult<T> {
    pub fn new(total: i64, pagination: &ResolvedPagination, data: Vec<T>) -> Self {
        Self {
            meta: ListMeta {
                total,
                page: pagination.page,
                limit: pagination.limit,
            },
            data,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListResult<U> {
        ListResult {
            meta: self.meta,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListExecutor {
    total_count: TotalCountPolicy,
}

impl ListExecutor {
    pub fn new(total_count: TotalCountPolicy) -> Self {
        Self { total_count }
    }

    /// Runs the listing against `collection`.
    ///
    /// Without an active filter: one paged query over the candidate IDs plus a
    /// count chosen by [`TotalCountPolicy`]. With an active filter: an unpaged
    /// query whose length is the total, then the paged query over the same
    /// predicate. The two queries share no snapshot, so under concurrent
    /// writes `total` and `data` may disagree.
    pub fn list<T, C>(
        &self,
        collection: &C,
        candidate_ids: Vec<i32>,
        predicate: QueryPredicate,
        pagination: &ResolvedPagination,
        has_active_filter: bool,
    ) -> RepositoryResult<ListResult<T>>
    where
        C: Collection<T> + ?Sized,
    {
        let scope = QueryPredicate::IdIn(candidate_ids);

        if !has_active_filter {
            let data = collection.find_many(&scope, &pagination.sort, Some(pagination.window()))?;
            let total = match self.total_count {
                TotalCountPolicy::Unscoped => collection.count(&QueryPredicate::match_all())?,
                TotalCountPolicy::Scoped => collection.count(&scope)?,
            };
            log::debug!(
                "Unfiltered listing: page {} limit {} total {total} ({:?})",
                pagination.page,
                pagination.limit,
                self.total_count
            );
            return Ok(ListResult::new(total, pagination, data));
        }

        let scoped = scope & predicate;
        let matching = collection.find_many(&scoped, &pagination.sort, None)?;
        let total = matching.len() as i64;
        let data = collection.find_many(&scoped, &pagination.sort, Some(pagination.window()))?;

        log::debug!(
            "Filtered listing: page {} limit {} total {total}",
            pagination.page,
            pagination.limit
        );

        Ok(ListResult::new(total, pagination, data))
    }
}
