use diesel::prelude::*;

use crate::domain::sub_field::{NewSubField, SubField, UpdateSubField};
use crate::domain::types::SubFieldId;
use crate::models::sub_field::{
    NewSubField as DbNewSubField, SubField as DbSubField, UpdateSubField as DbUpdateSubField,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::listing::diesel_collection;
use crate::repository::{DieselRepository, SubFieldReader, SubFieldWriter};
use crate::schema::sub_fields;

diesel_collection!(SubField => DbSubField, sub_fields {
    "masterFieldId" => master_field_id: Integer,
    "title" => title: Text,
    "createdAt" => created_at: Timestamp,
    "updatedAt" => updated_at: Timestamp,
});

impl SubFieldReader for DieselRepository {
    fn get_sub_field_by_id(&self, id: SubFieldId) -> RepositoryResult<Option<SubField>> {
        let mut conn = self.conn()?;
        let field = sub_fields::table
            .find(id.get())
            .first::<DbSubField>(&mut conn)
            .optional()?;

        Ok(field.map(SubField::try_from).transpose()?)
    }
}

impl SubFieldWriter for DieselRepository {
    fn create_sub_field(&self, new_field: &NewSubField) -> RepositoryResult<SubField> {
        let mut conn = self.conn()?;
        let insertable: DbNewSubField = new_field.into();

        let field = diesel::insert_into(sub_fields::table)
            .values(&insertable)
            .get_result::<DbSubField>(&mut conn)?;

        Ok(field.try_into()?)
    }

    fn update_sub_field(
        &self,
        id: SubFieldId,
        updates: &UpdateSubField,
    ) -> RepositoryResult<SubField> {
        let mut conn = self.conn()?;
        let changes: DbUpdateSubField = updates.into();

        let field = diesel::update(sub_fields::table.find(id.get()))
            .set(&changes)
            .get_result::<DbSubField>(&mut conn)?;

        Ok(field.try_into()?)
    }
}
