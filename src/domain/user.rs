use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{PersonName, UserEmail, UserId, UserRole};
use crate::listing::{FieldKind, FieldValue, QueryPredicate, Record, ResourceSpec, SortDirection};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: UserEmail,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub const RESOURCE: ResourceSpec = ResourceSpec {
        name: "User",
        searchable: &["firstName", "lastName", "email"],
        filterable: &[
            ("email", FieldKind::FoldedEquals),
            ("createdAt", FieldKind::TimeBucket),
            ("updatedAt", FieldKind::TimeBucket),
        ],
        sortable: &["firstName", "lastName", "email", "createdAt", "updatedAt"],
        default_sort: ("firstName", SortDirection::Asc),
        existence_guard: false,
    };

    /// Always-on predicate restricting a user collection to one role.
    pub fn role_scope(role: UserRole) -> QueryPredicate {
        QueryPredicate::equals("role", role.as_str())
    }
}

impl Record for User {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "firstName" => Some(FieldValue::text(self.first_name.as_str())),
            "lastName" => Some(FieldValue::text(self.last_name.as_str())),
            "email" => Some(FieldValue::text(self.email.as_str())),
            "role" => Some(FieldValue::text(self.role.as_str())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: UserEmail,
    pub role: UserRole,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUser {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<UserEmail>,
    pub role: Option<UserRole>,
    pub updated_at: NaiveDateTime,
}
