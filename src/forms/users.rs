use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{PersonName, TypeConstraintError, UserEmail, UserRole};
use crate::domain::user::{NewUser, UpdateUser};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for `POST /users`.
pub struct CreateUserForm {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
}

impl CreateUserForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<NewUser, TypeConstraintError> {
        Ok(NewUser {
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            email: UserEmail::new(self.email)?,
            role: self.role,
            timestamp: now,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for `PATCH /users/{id}`.
pub struct UpdateUserForm {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<UpdateUser, TypeConstraintError> {
        Ok(UpdateUser {
            first_name: self.first_name.map(PersonName::new).transpose()?,
            last_name: self.last_name.map(PersonName::new).transpose()?,
            email: self.email.map(UserEmail::new).transpose()?,
            role: self.role,
            updated_at: now,
        })
    }
}
