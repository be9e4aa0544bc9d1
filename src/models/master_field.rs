//! Diesel models representing master fields.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::master_field::{
    MasterField as DomainMasterField, NewMasterField as DomainNewMasterField,
    UpdateMasterField as DomainUpdateMasterField,
};
use crate::domain::types::{MasterFieldId, Title, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::master_fields)]
pub struct MasterField {
    pub id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::master_fields)]
pub struct NewMasterField<'a> {
    pub title: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::master_fields)]
pub struct UpdateMasterField<'a> {
    pub title: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<MasterField> for DomainMasterField {
    type Error = TypeConstraintError;

    fn try_from(field: MasterField) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MasterFieldId::try_from(field.id)?,
            title: Title::new(field.title)?,
            created_at: field.created_at,
            updated_at: field.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewMasterField> for NewMasterField<'a> {
    fn from(field: &'a DomainNewMasterField) -> Self {
        Self {
            title: field.title.as_str(),
            created_at: field.timestamp,
            updated_at: field.timestamp,
        }
    }
}

impl<'a> From<&'a DomainUpdateMasterField> for UpdateMasterField<'a> {
    fn from(field: &'a DomainUpdateMasterField) -> Self {
        Self {
            title: field.title.as_ref().map(Title::as_str),
            updated_at: field.updated_at,
        }
    }
}
