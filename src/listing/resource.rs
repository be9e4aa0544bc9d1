//! Declarative per-resource listing configuration.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// How a filterable field turns a raw query value into a predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Exact, case-sensitive match.
    Equals,
    /// Exact match against a column stored lower-cased; the value is
    /// lower-cased before comparing.
    FoldedEquals,
    /// Relative window token (`Recently`, `2days`, `1week`, `1month`) on a timestamp.
    TimeBucket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Ordering applied to a listing. Ties are always broken by `id` ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Primary key order, accepted by every collection.
    pub fn by_id() -> Self {
        Self::new(Sort::ID_FIELD, SortDirection::Asc)
    }

    pub const ID_FIELD: &'static str = "id";
}

/// Everything the engine needs to know about one listable resource.
#[derive(Clone, Copy, Debug)]
pub struct ResourceSpec {
    /// Human readable name, used in `NotFound` messages.
    pub name: &'static str,
    /// Fields OR-matched against the search term.
    pub searchable: &'static [&'static str],
    /// Fields accepted as additional filters and how each is interpreted.
    pub filterable: &'static [(&'static str, FieldKind)],
    /// Allow-list for caller supplied `sortBy`.
    pub sortable: &'static [&'static str],
    pub default_sort: (&'static str, SortDirection),
    /// Raise `NotFound` when the backing collection is empty.
    pub existence_guard: bool,
}

impl ResourceSpec {
    pub fn field_kind(&self, field: &str) -> Option<FieldKind> {
        self.filterable
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, kind)| *kind)
    }

    pub fn is_filterable(&self, field: &str) -> bool {
        self.field_kind(field).is_some()
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable.contains(&field)
    }

    pub fn default_sort(&self) -> Sort {
        Sort::new(self.default_sort.0, self.default_sort.1)
    }
}
