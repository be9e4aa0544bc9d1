//! Diesel models representing platform users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{PersonName, TypeConstraintError, UserEmail, UserId, UserRole};
use crate::domain::user::{
    NewUser as DomainNewUser, UpdateUser as DomainUpdateUser, User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`]. `role` holds
/// [`UserRole::as_str`].
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub role: &'static str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub role: Option<&'static str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::try_from(user.id)?,
            first_name: PersonName::new(user.first_name)?,
            last_name: PersonName::new(user.last_name)?,
            email: UserEmail::new(user.email)?,
            role: user.role.parse::<UserRole>()?,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            first_name: user.first_name.as_str(),
            last_name: user.last_name.as_str(),
            email: user.email.as_str(),
            role: user.role.as_str(),
            created_at: user.timestamp,
            updated_at: user.timestamp,
        }
    }
}

impl<'a> From<&'a DomainUpdateUser> for UpdateUser<'a> {
    fn from(user: &'a DomainUpdateUser) -> Self {
        Self {
            first_name: user.first_name.as_ref().map(PersonName::as_str),
            last_name: user.last_name.as_ref().map(PersonName::as_str),
            email: user.email.as_ref().map(UserEmail::as_str),
            role: user.role.map(UserRole::as_str),
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 3)
            .unwrap()
            .and_hms_opt(4, 5, 6)
            .unwrap()
    }

    #[test]
    fn from_user_into_domain() {
        let db = User {
            id: 5,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ADA@example.com".into(),
            role: "super_admin".into(),
            created_at: at(),
            updated_at: at(),
        };

        let domain = DomainUser::try_from(db).expect("valid user");
        assert_eq!(domain.email.as_str(), "ada@example.com");
        assert_eq!(domain.role, UserRole::SuperAdmin);
    }

    #[test]
    fn unknown_stored_role_is_rejected() {
        let db = User {
            id: 5,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            role: "janitor".into(),
            created_at: at(),
            updated_at: at(),
        };

        assert!(matches!(
            DomainUser::try_from(db),
            Err(TypeConstraintError::UnknownRole(_))
        ));
    }

    #[test]
    fn role_is_written_as_snake_case() {
        let domain = DomainNewUser {
            first_name: PersonName::new("Grace").expect("valid name"),
            last_name: PersonName::new("Hopper").expect("valid name"),
            email: UserEmail::new("grace@example.com").expect("valid email"),
            role: UserRole::Faculty,
            timestamp: at(),
        };
        let new: NewUser = (&domain).into();

        assert_eq!(new.role, "faculty");
    }
}
