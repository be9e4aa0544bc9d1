//! Filter payloads and the predicate tree they are translated into.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Deserialize;

use crate::listing::clock::Clock;
use crate::listing::record::{FieldValue, Record};
use crate::listing::resource::{FieldKind, ResourceSpec};
use crate::listing::ListError;

/// Query key carrying the free-text term. Never stored in `additional_filters`.
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// Free-text search plus named field filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterRequest {
    search_term: Option<String>,
    additional_filters: BTreeMap<String, String>,
}

impl FilterRequest {
    /// Builds a request. A blank search term is treated as absent and a stray
    /// `searchTerm` key is removed from the filters.
    pub fn new(search_term: Option<String>, mut additional_filters: BTreeMap<String, String>) -> Self {
        additional_filters.remove(SEARCH_TERM_KEY);
        let search_term = search_term
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());

        Self {
            search_term,
            additional_filters,
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn additional_filters(&self) -> &BTreeMap<String, String> {
        &self.additional_filters
    }

    /// A search term or at least one additional filter key was supplied.
    pub fn has_active_filter(&self) -> bool {
        self.search_term.is_some() || !self.additional_filters.is_empty()
    }
}

/// Named relative time windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeBucket {
    RecentlyDay,
    TwoDays,
    OneWeek,
    OneMonth,
}

impl TimeBucket {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Recently" => Some(TimeBucket::RecentlyDay),
            "2days" => Some(TimeBucket::TwoDays),
            "1week" => Some(TimeBucket::OneWeek),
            "1month" => Some(TimeBucket::OneMonth),
            _ => None,
        }
    }

    pub fn duration(self) -> TimeDelta {
        match self {
            TimeBucket::RecentlyDay => TimeDelta::hours(24),
            TimeBucket::TwoDays => TimeDelta::hours(48),
            TimeBucket::OneWeek => TimeDelta::hours(168),
            TimeBucket::OneMonth => TimeDelta::hours(720),
        }
    }
}

/// What to do with a time-bucket token that is not recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTokenPolicy {
    /// Drop the filter; the key constrains nothing.
    #[default]
    Ignore,
    /// Fail the request with `InvalidInput`.
    Reject,
}

/// Boolean expression over record fields.
///
/// `And(vec![])` is the universal "match all" predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryPredicate {
    And(Vec<QueryPredicate>),
    Or(Vec<QueryPredicate>),
    /// Case-insensitive substring match of `term` on any of `fields`.
    TextMatch { fields: Vec<String>, term: String },
    /// Exact, case-sensitive equality.
    Equals { field: String, value: String },
    /// `field > anchor - bucket.duration()`.
    TimeBucket {
        field: String,
        bucket: TimeBucket,
        anchor: NaiveDateTime,
    },
    /// Primary key membership.
    IdIn(Vec<i32>),
}

impl Default for QueryPredicate {
    fn default() -> Self {
        Self::match_all()
    }
}

impl QueryPredicate {
    pub fn match_all() -> Self {
        QueryPredicate::And(vec![])
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        QueryPredicate::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self, QueryPredicate::And(nodes) if nodes.is_empty())
    }

    /// Lower bound of a time-bucket node.
    pub fn threshold(anchor: NaiveDateTime, bucket: TimeBucket) -> NaiveDateTime {
        anchor - bucket.duration()
    }

    /// Evaluates the predicate against a single record.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            QueryPredicate::And(nodes) => nodes.iter().all(|node| node.matches(record)),
            QueryPredicate::Or(nodes) => nodes.iter().any(|node| node.matches(record)),
            QueryPredicate::TextMatch { fields, term } => {
                let needle = term.to_lowercase();
                fields.iter().any(|field| match record.field(field) {
                    Some(FieldValue::Text(value)) => value.to_lowercase().contains(&needle),
                    _ => false,
                })
            }
            QueryPredicate::Equals { field, value } => match record.field(field) {
                Some(FieldValue::Text(actual)) => actual == *value,
                Some(FieldValue::Integer(actual)) => value.trim().parse::<i64>() == Ok(actual),
                _ => false,
            },
            QueryPredicate::TimeBucket {
                field,
                bucket,
                anchor,
            } => match record.field(field) {
                Some(FieldValue::Timestamp(at)) => at > Self::threshold(*anchor, *bucket),
                _ => false,
            },
            QueryPredicate::IdIn(ids) => ids.contains(&record.id()),
        }
    }
}

impl std::ops::BitAnd for QueryPredicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (QueryPredicate::And(mut left), QueryPredicate::And(right)) => {
                left.extend(right);
                QueryPredicate::And(left)
            }
            (QueryPredicate::And(mut left), rhs) => {
                left.push(rhs);
                QueryPredicate::And(left)
            }
            (lhs, QueryPredicate::And(mut right)) => {
                right.insert(0, lhs);
                QueryPredicate::And(right)
            }
            (lhs, rhs) => QueryPredicate::And(vec![lhs, rhs]),
        }
    }
}

/// Turns a [`FilterRequest`] into a [`QueryPredicate`] for one resource.
pub struct PredicateBuilder<'a> {
    clock: &'a dyn Clock,
    unknown_tokens: UnknownTokenPolicy,
}

impl<'a> PredicateBuilder<'a> {
    pub fn new(clock: &'a dyn Clock, unknown_tokens: UnknownTokenPolicy) -> Self {
        Self {
            clock,
            unknown_tokens,
        }
    }

    /// Builds `TextMatch AND <per-field predicates>`.
    ///
    /// Only fails under [`UnknownTokenPolicy::Reject`].
    pub fn build(
        &self,
        filters: &FilterRequest,
        resource: &ResourceSpec,
    ) -> Result<QueryPredicate, ListError> {
        let mut predicate = QueryPredicate::match_all();

        if let Some(term) = filters.search_term() {
            predicate = predicate
                & QueryPredicate::TextMatch {
                    fields: resource.searchable.iter().map(|f| f.to_string()).collect(),
                    term: term.to_string(),
                };
        }

        // Anchor once so every bucket in the request shares the same "now".
        let anchor = self.clock.now();

        for (field, value) in filters.additional_filters() {
            match resource.field_kind(field) {
                Some(FieldKind::TimeBucket) => match TimeBucket::from_token(value) {
                    Some(bucket) => {
                        predicate = predicate
                            & QueryPredicate::TimeBucket {
                                field: field.clone(),
                                bucket,
                                anchor,
                            };
                    }
                    None => match self.unknown_tokens {
                        UnknownTokenPolicy::Ignore => {
                            log::debug!("Ignoring unknown time filter {field}={value}");
                        }
                        UnknownTokenPolicy::Reject => {
                            return Err(ListError::InvalidInput(format!(
                                "unknown time filter `{value}` for `{field}`"
                            )));
                        }
                    },
                },
                Some(FieldKind::FoldedEquals) => {
                    predicate = predicate & QueryPredicate::equals(field.clone(), value.to_lowercase());
                }
                Some(FieldKind::Equals) | None => {
                    predicate = predicate & QueryPredicate::equals(field.clone(), value.clone());
                }
            }
        }

        Ok(predicate)
    }
}
