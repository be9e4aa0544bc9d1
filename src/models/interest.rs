//! Diesel models representing interests.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::interest::{
    Interest as DomainInterest, NewInterest as DomainNewInterest,
    UpdateInterest as DomainUpdateInterest,
};
use crate::domain::types::{InterestId, SubFieldId, Title, TypeConstraintError};
use crate::models::sub_field::SubField;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(SubField, foreign_key = sub_field_id))]
#[diesel(table_name = crate::schema::interests)]
pub struct Interest {
    pub id: i32,
    pub sub_field_id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::interests)]
pub struct NewInterest<'a> {
    pub sub_field_id: i32,
    pub title: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::interests)]
pub struct UpdateInterest<'a> {
    pub sub_field_id: Option<i32>,
    pub title: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Interest> for DomainInterest {
    type Error = TypeConstraintError;

    fn try_from(interest: Interest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: InterestId::try_from(interest.id)?,
            sub_field_id: SubFieldId::try_from(interest.sub_field_id)?,
            title: Title::new(interest.title)?,
            created_at: interest.created_at,
            updated_at: interest.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewInterest> for NewInterest<'a> {
    fn from(interest: &'a DomainNewInterest) -> Self {
        Self {
            sub_field_id: interest.sub_field_id.get(),
            title: interest.title.as_str(),
            created_at: interest.timestamp,
            updated_at: interest.timestamp,
        }
    }
}

impl<'a> From<&'a DomainUpdateInterest> for UpdateInterest<'a> {
    fn from(interest: &'a DomainUpdateInterest) -> Self {
        Self {
            sub_field_id: interest.sub_field_id.map(SubFieldId::get),
            title: interest.title.as_ref().map(Title::as_str),
            updated_at: interest.updated_at,
        }
    }
}
