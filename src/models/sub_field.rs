//! Diesel models representing sub-fields.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::sub_field::{
    NewSubField as DomainNewSubField, SubField as DomainSubField,
    UpdateSubField as DomainUpdateSubField,
};
use crate::domain::types::{MasterFieldId, SubFieldId, Title, TypeConstraintError};
use crate::models::master_field::MasterField;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(MasterField, foreign_key = master_field_id))]
#[diesel(table_name = crate::schema::sub_fields)]
pub struct SubField {
    pub id: i32,
    pub master_field_id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sub_fields)]
pub struct NewSubField<'a> {
    pub master_field_id: i32,
    pub title: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sub_fields)]
pub struct UpdateSubField<'a> {
    pub master_field_id: Option<i32>,
    pub title: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<SubField> for DomainSubField {
    type Error = TypeConstraintError;

    fn try_from(field: SubField) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SubFieldId::try_from(field.id)?,
            master_field_id: MasterFieldId::try_from(field.master_field_id)?,
            title: Title::new(field.title)?,
            created_at: field.created_at,
            updated_at: field.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewSubField> for NewSubField<'a> {
    fn from(field: &'a DomainNewSubField) -> Self {
        Self {
            master_field_id: field.master_field_id.get(),
            title: field.title.as_str(),
            created_at: field.timestamp,
            updated_at: field.timestamp,
        }
    }
}

impl<'a> From<&'a DomainUpdateSubField> for UpdateSubField<'a> {
    fn from(field: &'a DomainUpdateSubField) -> Self {
        Self {
            master_field_id: field.master_field_id.map(MasterFieldId::get),
            title: field.title.as_ref().map(Title::as_str),
            updated_at: field.updated_at,
        }
    }
}
