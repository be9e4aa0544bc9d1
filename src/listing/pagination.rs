//! Normalization of caller supplied page/limit/sort options.

use crate::listing::resource::{ResourceSpec, Sort, SortDirection};

/// Page size used when neither the caller nor the configuration supplies one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw pagination options as received from the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl PaginationOptions {
    /// Builds options from untyped query values. Unparsable numbers become `None`.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        let number = |raw: Option<&str>| raw.and_then(|value| value.trim().parse::<i64>().ok());
        let text = |raw: Option<&str>| {
            raw.map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            page: number(page),
            limit: number(limit),
            sort_by: text(sort_by),
            sort_order: text(sort_order),
        }
    }
}

/// Offset window handed to the storage collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub skip: i64,
    pub limit: i64,
}

/// Normalized pagination. `page >= 1`, `limit >= 1`, `skip = (page - 1) * limit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPagination {
    pub page: i64,
    pub limit: i64,
    pub skip: i64,
    pub sort: Sort,
}

impl ResolvedPagination {
    pub fn window(&self) -> Window {
        Window {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

/// Resolves options against the resource defaults.
///
/// Never fails: non-positive page or limit fall back to `1` and
/// `default_limit`; a sort outside the resource allow-list, or a missing half
/// of the `sortBy`/`sortOrder` pair, falls back to the resource default sort.
pub fn resolve(
    options: &PaginationOptions,
    resource: &ResourceSpec,
    default_limit: i64,
) -> ResolvedPagination {
    let default_limit = if default_limit > 0 {
        default_limit
    } else {
        DEFAULT_LIMIT
    };

    let page = options.page.filter(|page| *page > 0).unwrap_or(1);
    let limit = options
        .limit
        .filter(|limit| *limit > 0)
        .unwrap_or(default_limit);
    let skip = (page - 1).saturating_mul(limit);

    let sort = match (&options.sort_by, &options.sort_order) {
        (Some(field), Some(order)) if resource.is_sortable(field) => {
            match order.parse::<SortDirection>() {
                Ok(direction) => Sort::new(field.clone(), direction),
                Err(()) => resource.default_sort(),
            }
        }
        _ => resource.default_sort(),
    };

    ResolvedPagination {
        page,
        limit,
        skip,
        sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::resource::FieldKind;

    const PEOPLE: ResourceSpec = ResourceSpec {
        name: "person",
        searchable: &["firstName"],
        filterable: &[("createdAt", FieldKind::TimeBucket)],
        sortable: &["firstName", "createdAt"],
        default_sort: ("firstName", SortDirection::Asc),
        existence_guard: false,
    };

    #[test]
    fn defaults_apply_when_options_are_absent() {
        let resolved = resolve(&PaginationOptions::default(), &PEOPLE, DEFAULT_LIMIT);

        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.limit, 10);
        assert_eq!(resolved.skip, 0);
        assert_eq!(resolved.sort, Sort::new("firstName", SortDirection::Asc));
    }

    #[test]
    fn skip_is_derived_from_page_and_limit() {
        for (page, limit) in [(1, 1), (2, 3), (5, 10), (40, 7)] {
            let options = PaginationOptions {
                page: Some(page),
                limit: Some(limit),
                ..PaginationOptions::default()
            };
            let resolved = resolve(&options, &PEOPLE, DEFAULT_LIMIT);
            assert_eq!(resolved.skip, (page - 1) * limit);
            assert_eq!(resolved.window(), Window { skip: (page - 1) * limit, limit });
        }
    }

    #[test]
    fn non_positive_and_garbage_numbers_fall_back() {
        let options = PaginationOptions::from_raw(Some("-2"), Some("abc"), None, None);
        let resolved = resolve(&options, &PEOPLE, 25);

        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.limit, 25);

        let zero = PaginationOptions::from_raw(Some("0"), Some("0"), None, None);
        let resolved = resolve(&zero, &PEOPLE, 0);
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn explicit_sort_requires_both_halves_and_allow_list() {
        let both = PaginationOptions::from_raw(None, None, Some("createdAt"), Some("desc"));
        assert_eq!(
            resolve(&both, &PEOPLE, DEFAULT_LIMIT).sort,
            Sort::new("createdAt", SortDirection::Desc)
        );

        let half = PaginationOptions::from_raw(None, None, Some("createdAt"), None);
        assert_eq!(
            resolve(&half, &PEOPLE, DEFAULT_LIMIT).sort,
            PEOPLE.default_sort()
        );

        let unknown = PaginationOptions::from_raw(None, None, Some("password"), Some("asc"));
        assert_eq!(
            resolve(&unknown, &PEOPLE, DEFAULT_LIMIT).sort,
            PEOPLE.default_sort()
        );

        let bad_order = PaginationOptions::from_raw(None, None, Some("createdAt"), Some("up"));
        assert_eq!(
            resolve(&bad_order, &PEOPLE, DEFAULT_LIMIT).sort,
            PEOPLE.default_sort()
        );
    }
}
