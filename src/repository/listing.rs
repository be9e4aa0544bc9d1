//! Translation of [`QueryPredicate`] trees into Diesel `WHERE` clauses.
//!
//! Each table exposes its filterable columns through a lookup function that
//! maps public (camelCase) field names onto boxed Diesel columns. Predicates
//! are folded into a single boxed boolean expression. Fields a table does not
//! map, or whose column type cannot satisfy the node, match nothing.
//!
//! SQLite `LIKE` folds ASCII case only, so search on non-ASCII text is
//! case-sensitive against this backend.

use diesel::prelude::*;
use diesel::sql_types::{Bool, Integer, Text, Timestamp};
use diesel::sqlite::Sqlite;

use crate::listing::{QueryPredicate, Sort};

/// Boxed SQL boolean over the table `QS`.
pub(super) type Condition<QS> = Box<dyn BoxableExpression<QS, Sqlite, SqlType = Bool>>;

/// A column of the table `QS`, boxed by SQL type.
pub(super) enum FilterColumn<QS> {
    Text(Box<dyn BoxableExpression<QS, Sqlite, SqlType = Text>>),
    Integer(Box<dyn BoxableExpression<QS, Sqlite, SqlType = Integer>>),
    Timestamp(Box<dyn BoxableExpression<QS, Sqlite, SqlType = Timestamp>>),
}

/// Maps a public field name onto a column of `QS`.
pub(super) type ColumnLookup<QS> = fn(&str) -> Option<FilterColumn<QS>>;

const LIKE_ESCAPE: char = '\\';

/// Escapes `LIKE` metacharacters and wraps the term for a substring match.
pub(super) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn always<QS: 'static>(value: bool) -> Condition<QS> {
    Box::new(value.into_sql::<Bool>())
}

fn both<QS: 'static>(left: Condition<QS>, right: Condition<QS>) -> Condition<QS> {
    Box::new(left.and(right))
}

fn either<QS: 'static>(left: Condition<QS>, right: Condition<QS>) -> Condition<QS> {
    Box::new(left.or(right))
}

/// Builds the SQL condition for `predicate`.
///
/// An empty `And` is `TRUE` and an empty `Or` is `FALSE`, matching
/// [`QueryPredicate::matches`].
pub(super) fn condition<QS: 'static>(
    predicate: &QueryPredicate,
    columns: ColumnLookup<QS>,
) -> Condition<QS> {
    match predicate {
        QueryPredicate::And(nodes) => nodes
            .iter()
            .map(|node| condition(node, columns))
            .reduce(both)
            .unwrap_or_else(|| always(true)),
        QueryPredicate::Or(nodes) => nodes
            .iter()
            .map(|node| condition(node, columns))
            .reduce(either)
            .unwrap_or_else(|| always(false)),
        QueryPredicate::TextMatch { fields, term } => {
            let pattern = like_pattern(term);
            fields
                .iter()
                .map(|field| match columns(field) {
                    Some(FilterColumn::Text(column)) => {
                        Box::new(column.like(pattern.clone()).escape(LIKE_ESCAPE)) as Condition<QS>
                    }
                    _ => always(false),
                })
                .reduce(either)
                .unwrap_or_else(|| always(false))
        }
        QueryPredicate::Equals { field, value } => match columns(field) {
            Some(FilterColumn::Text(column)) => Box::new(column.eq(value.clone())),
            Some(FilterColumn::Integer(column)) => match value.trim().parse::<i32>() {
                Ok(number) => Box::new(column.eq(number)),
                Err(_) => always(false),
            },
            Some(FilterColumn::Timestamp(_)) | None => {
                log::debug!("Field `{field}` does not support equality filtering");
                always(false)
            }
        },
        QueryPredicate::TimeBucket {
            field,
            bucket,
            anchor,
        } => match columns(field) {
            Some(FilterColumn::Timestamp(column)) => {
                Box::new(column.gt(QueryPredicate::threshold(*anchor, *bucket)))
            }
            _ => always(false),
        },
        QueryPredicate::IdIn(ids) => match columns(Sort::ID_FIELD) {
            Some(FilterColumn::Integer(column)) => Box::new(column.eq_any(ids.clone())),
            _ => always(false),
        },
    }
}

/// Implements [`crate::repository::Collection`] for [`crate::repository::DieselRepository`].
///
/// Each entry maps a public field name to a column of `$table` and its SQL
/// type. Every mapped field is filterable and sortable; `id` is always
/// mapped.
macro_rules! diesel_collection {
    (
        $domain:ty => $model:ty, $table:ident {
            $($field:literal => $column:ident : $kind:ident),+ $(,)?
        }
    ) => {
        fn filter_columns(
            field: &str,
        ) -> Option<$crate::repository::listing::FilterColumn<$crate::schema::$table::table>> {
            use $crate::repository::listing::FilterColumn;
            use $crate::schema::$table;

            match field {
                "id" => Some(FilterColumn::Integer(Box::new($table::id))),
                $($field => Some(FilterColumn::$kind(Box::new($table::$column))),)+
                _ => None,
            }
        }

        impl $crate::repository::Collection<$domain> for $crate::repository::DieselRepository {
            fn find_all(&self) -> $crate::repository::errors::RepositoryResult<Vec<$domain>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let rows = $table::table
                    .order($table::id.asc())
                    .load::<$model>(&mut conn)?;

                rows.into_iter()
                    .map(|row| <$domain>::try_from(row).map_err(Into::into))
                    .collect()
            }

            fn find_many(
                &self,
                predicate: &$crate::listing::QueryPredicate,
                sort: &$crate::listing::Sort,
                window: Option<$crate::listing::Window>,
            ) -> $crate::repository::errors::RepositoryResult<Vec<$domain>> {
                use diesel::prelude::*;
                use $crate::listing::SortDirection;
                use $crate::repository::errors::RepositoryError;
                use $crate::schema::$table;

                let mut conn = self.conn()?;

                let mut query = $table::table
                    .filter($crate::repository::listing::condition(predicate, filter_columns))
                    .into_boxed::<diesel::sqlite::Sqlite>();

                query = match (sort.field.as_str(), sort.direction) {
                    ("id", SortDirection::Asc) => query.order($table::id.asc()),
                    ("id", SortDirection::Desc) => query.order($table::id.desc()),
                    $(
                        ($field, SortDirection::Asc) => {
                            query.order(($table::$column.asc(), $table::id.asc()))
                        }
                        ($field, SortDirection::Desc) => {
                            query.order(($table::$column.desc(), $table::id.asc()))
                        }
                    )+
                    (other, _) => return Err(RepositoryError::UnsupportedField(other.to_string())),
                };

                if let Some(window) = window {
                    query = query.offset(window.skip).limit(window.limit);
                }

                let rows = query.load::<$model>(&mut conn)?;

                rows.into_iter()
                    .map(|row| <$domain>::try_from(row).map_err(Into::into))
                    .collect()
            }

            fn count(
                &self,
                predicate: &$crate::listing::QueryPredicate,
            ) -> $crate::repository::errors::RepositoryResult<i64> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let total = $table::table
                    .filter($crate::repository::listing::condition(predicate, filter_columns))
                    .into_boxed::<diesel::sqlite::Sqlite>()
                    .count()
                    .get_result::<i64>(&mut conn)?;

                Ok(total)
            }
        }
    };
}

pub(crate) use diesel_collection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ai"), "%ai%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }
}
