//! Generic filtered, paginated and time-bucketed list queries.
//!
//! A listing request flows one way: raw query parameters are split into a
//! [`FilterRequest`] and [`PaginationOptions`], the options are resolved
//! against the resource defaults, the filters become a [`QueryPredicate`], and
//! the [`ListExecutor`] issues the page and count queries against a
//! [`Collection`].

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use thiserror::Error;

use crate::repository::Collection;
use crate::repository::errors::RepositoryError;

pub mod clock;
pub mod executor;
pub mod pagination;
pub mod predicate;
pub mod record;
pub mod resource;

pub use clock::{Clock, FixedClock, SystemClock};
pub use executor::{ListExecutor, ListMeta, ListResult, TotalCountPolicy};
pub use pagination::{DEFAULT_LIMIT, PaginationOptions, ResolvedPagination, Window};
pub use predicate::{
    FilterRequest, PredicateBuilder, QueryPredicate, SEARCH_TERM_KEY, TimeBucket,
    UnknownTokenPolicy,
};
pub use record::{FieldValue, Record};
pub use resource::{FieldKind, ResourceSpec, Sort, SortDirection};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Engine policies, loaded from the `listing` section of the configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ListSettings {
    #[serde(default = "default_limit")]
    pub default_limit: i64,
    #[serde(default)]
    pub unknown_time_filter: UnknownTokenPolicy,
    #[serde(default)]
    pub total_count: TotalCountPolicy,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            unknown_time_filter: UnknownTokenPolicy::default(),
            total_count: TotalCountPolicy::default(),
        }
    }
}

/// Filters and pagination options for one list call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub filters: FilterRequest,
    pub options: PaginationOptions,
}

impl ListRequest {
    /// Splits raw query parameters.
    ///
    /// `size` maps to the page size, falling back to `limit` when `size` is
    /// missing or not a positive number. Only keys declared
    /// filterable by `resource` are kept as filters, and blank values are
    /// treated as absent.
    pub fn from_query(params: &HashMap<String, String>, resource: &ResourceSpec) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        // `size` wins only when it holds a usable number.
        let page_size = ["size", "limit"].into_iter().filter_map(get).find(|raw| {
            raw.trim()
                .parse::<i64>()
                .is_ok_and(|value| value > 0)
        });

        let options = PaginationOptions::from_raw(
            get("page"),
            page_size,
            get("sortBy"),
            get("sortOrder"),
        );

        let additional_filters: BTreeMap<String, String> = params
            .iter()
            .filter(|(key, value)| resource.is_filterable(key) && !value.trim().is_empty())
            .map(|(key, value)| (key.clone(), value.trim().to_string()))
            .collect();

        let filters = FilterRequest::new(get(SEARCH_TERM_KEY).map(str::to_string), additional_filters);

        Self { filters, options }
    }
}

/// Entry point tying the resolver, builder and executor together.
pub struct ListEngine<'a> {
    clock: &'a dyn Clock,
    settings: &'a ListSettings,
}

impl<'a> ListEngine<'a> {
    pub fn new(clock: &'a dyn Clock, settings: &'a ListSettings) -> Self {
        Self { clock, settings }
    }

    /// Lists one page of `resource` records from `collection`.
    ///
    /// The candidate ID set is materialized from `find_all` first. When the
    /// resource opts into the existence guard, an empty collection yields
    /// [`ListError::NotFound`] before any filtered query runs.
    pub fn list<T, C>(
        &self,
        collection: &C,
        resource: &ResourceSpec,
        request: &ListRequest,
    ) -> Result<ListResult<T>, ListError>
    where
        T: Record,
        C: Collection<T> + ?Sized,
    {
        let candidates = collection.find_all()?;
        if resource.existence_guard && candidates.is_empty() {
            return Err(ListError::NotFound(resource.name));
        }
        let candidate_ids = candidates.iter().map(|record| record.id()).collect();

        let pagination = pagination::resolve(&request.options, resource, self.settings.default_limit);
        let predicate = PredicateBuilder::new(self.clock, self.settings.unknown_time_filter)
            .build(&request.filters, resource)?;

        let result = ListExecutor::new(self.settings.total_count).list(
            collection,
            candidate_ids,
            predicate,
            &pagination,
            request.filters.has_active_filter(),
        )?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::*;
    use crate::repository::memory::MemoryCollection;

    const COURSES: ResourceSpec = ResourceSpec {
        name: "course",
        searchable: &["title"],
        filterable: &[
            ("status", FieldKind::Equals),
            ("createdAt", FieldKind::TimeBucket),
        ],
        sortable: &["title", "createdAt"],
        default_sort: ("title", SortDirection::Asc),
        existence_guard: true,
    };

    #[derive(Clone, Debug, PartialEq)]
    struct Course {
        id: i32,
        title: &'static str,
        status: &'static str,
        created_at: NaiveDateTime,
    }

    impl Record for Course {
        fn id(&self) -> i32 {
            self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "title" => Some(FieldValue::text(self.title)),
                "status" => Some(FieldValue::text(self.status)),
                "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
                _ => None,
            }
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn course(id: i32, title: &'static str, status: &'static str, age_days: i64) -> Course {
        Course {
            id,
            title,
            status,
            created_at: now() - TimeDelta::days(age_days),
        }
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_query_splits_pagination_search_and_filters() {
        let request = ListRequest::from_query(
            &query(&[
                ("page", "2"),
                ("size", "5"),
                ("sortBy", "createdAt"),
                ("sortOrder", "desc"),
                ("searchTerm", "ai"),
                ("status", "Open"),
                ("password", "hunter2"),
                ("createdAt", " "),
            ]),
            &COURSES,
        );

        assert_eq!(request.options.page, Some(2));
        assert_eq!(request.options.limit, Some(5));
        assert_eq!(request.options.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(request.filters.search_term(), Some("ai"));
        assert_eq!(
            request.filters.additional_filters().keys().collect::<Vec<_>>(),
            vec!["status"]
        );
    }

    #[test]
    fn limit_is_accepted_as_size_alias() {
        let request = ListRequest::from_query(&query(&[("limit", "4")]), &COURSES);
        assert_eq!(request.options.limit, Some(4));
    }

    #[test]
    fn unusable_size_falls_back_to_limit() {
        let request =
            ListRequest::from_query(&query(&[("size", "abc"), ("limit", "5")]), &COURSES);
        assert_eq!(request.options.limit, Some(5));

        let request = ListRequest::from_query(&query(&[("size", "0"), ("limit", "7")]), &COURSES);
        assert_eq!(request.options.limit, Some(7));

        let request = ListRequest::from_query(&query(&[("size", "3"), ("limit", "9")]), &COURSES);
        assert_eq!(request.options.limit, Some(3));
    }

    #[test]
    fn search_scenario() {
        let collection = MemoryCollection::new(vec![
            course(1, "Intro to AI", "Open", 1),
            course(2, "Web Dev", "Open", 1),
        ]);
        let clock = FixedClock(now());
        let settings = ListSettings::default();
        let request =
            ListRequest::from_query(&query(&[("searchTerm", "ai"), ("page", "1")]), &COURSES);

        let result = ListEngine::new(&clock, &settings)
            .list(&collection, &COURSES, &request)
            .unwrap();

        assert_eq!(result.meta, ListMeta { total: 1, page: 1, limit: 10 });
        assert_eq!(result.data[0].title, "Intro to AI");
    }

    #[test]
    fn status_filter_scenario() {
        let collection = MemoryCollection::new(vec![
            course(1, "A", "Open", 1),
            course(2, "B", "Closed", 1),
            course(3, "C", "Open", 1),
            course(4, "D", "Draft", 1),
            course(5, "E", "Closed", 1),
        ]);
        let clock = FixedClock(now());
        let settings = ListSettings::default();
        let request = ListRequest::from_query(&query(&[("status", "Open")]), &COURSES);

        let result = ListEngine::new(&clock, &settings)
            .list(&collection, &COURSES, &request)
            .unwrap();

        assert_eq!(result.meta.total, 2);
        assert_eq!(result.data.len(), 2);
    }

    #[test]
    fn one_week_bucket_scenario() {
        let collection = MemoryCollection::new(vec![
            course(1, "Old", "Open", 10),
            course(2, "Fresh", "Open", 3),
        ]);
        let clock = FixedClock(now());
        let settings = ListSettings::default();
        let request = ListRequest::from_query(&query(&[("createdAt", "1week")]), &COURSES);

        let result = ListEngine::new(&clock, &settings)
            .list(&collection, &COURSES, &request)
            .unwrap();

        assert_eq!(result.meta.total, 1);
        assert_eq!(result.data[0].title, "Fresh");
    }

    #[test]
    fn existence_guard_raises_not_found_on_empty_collection() {
        let collection: MemoryCollection<Course> = MemoryCollection::new(vec![]);
        let clock = FixedClock(now());
        let settings = ListSettings::default();

        let result = ListEngine::new(&clock, &settings).list(
            &collection,
            &COURSES,
            &ListRequest::default(),
        );

        assert!(matches!(result, Err(ListError::NotFound("course"))));
    }

    #[test]
    fn without_guard_empty_collection_is_an_empty_page() {
        let unguarded = ResourceSpec {
            existence_guard: false,
            ..COURSES
        };
        let collection: MemoryCollection<Course> = MemoryCollection::new(vec![]);
        let clock = FixedClock(now());
        let settings = ListSettings::default();

        let result = ListEngine::new(&clock, &settings)
            .list(&collection, &unguarded, &ListRequest::default())
            .unwrap();

        assert_eq!(result.meta.total, 0);
        assert!(result.data.is_empty());
    }

    #[test]
    fn reject_policy_surfaces_invalid_input() {
        let collection = MemoryCollection::new(vec![course(1, "A", "Open", 1)]);
        let clock = FixedClock(now());
        let settings = ListSettings {
            unknown_time_filter: UnknownTokenPolicy::Reject,
            ..ListSettings::default()
        };
        let request = ListRequest::from_query(&query(&[("createdAt", "1year")]), &COURSES);

        let result = ListEngine::new(&clock, &settings).list(&collection, &COURSES, &request);

        assert!(matches!(result, Err(ListError::InvalidInput(_))));
    }

    #[test]
    fn descending_sort_breaks_ties_by_id() {
        let collection = MemoryCollection::new(vec![
            course(3, "Same", "Open", 1),
            course(1, "Same", "Open", 1),
            course(2, "Other", "Open", 1),
        ]);
        let clock = FixedClock(now());
        let settings = ListSettings::default();
        let request = ListRequest::from_query(
            &query(&[("sortBy", "title"), ("sortOrder", "desc")]),
            &COURSES,
        );

        let result = ListEngine::new(&clock, &settings)
            .list(&collection, &COURSES, &request)
            .unwrap();

        let ids: Vec<i32> = result.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }
}
