use diesel::prelude::*;

use crate::domain::master_field::{MasterField, NewMasterField, UpdateMasterField};
use crate::domain::types::MasterFieldId;
use crate::models::master_field::{
    MasterField as DbMasterField, NewMasterField as DbNewMasterField,
    UpdateMasterField as DbUpdateMasterField,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::listing::diesel_collection;
use crate::repository::{DieselRepository, MasterFieldReader, MasterFieldWriter};
use crate::schema::master_fields;

diesel_collection!(MasterField => DbMasterField, master_fields {
    "title" => title: Text,
    "createdAt" => created_at: Timestamp,
    "updatedAt" => updated_at: Timestamp,
});

impl MasterFieldReader for DieselRepository {
    fn get_master_field_by_id(&self, id: MasterFieldId) -> RepositoryResult<Option<MasterField>> {
        let mut conn = self.conn()?;
        let field = master_fields::table
            .find(id.get())
            .first::<DbMasterField>(&mut conn)
            .optional()?;

        Ok(field.map(MasterField::try_from).transpose()?)
    }
}

impl MasterFieldWriter for DieselRepository {
    fn create_master_field(&self, new_field: &NewMasterField) -> RepositoryResult<MasterField> {
        let mut conn = self.conn()?;
        let insertable: DbNewMasterField = new_field.into();

        let field = diesel::insert_into(master_fields::table)
            .values(&insertable)
            .get_result::<DbMasterField>(&mut conn)?;

        Ok(field.try_into()?)
    }

    fn update_master_field(
        &self,
        id: MasterFieldId,
        updates: &UpdateMasterField,
    ) -> RepositoryResult<MasterField> {
        let mut conn = self.conn()?;
        let changes: DbUpdateMasterField = updates.into();

        let field = diesel::update(master_fields::table.find(id.get()))
            .set(&changes)
            .get_result::<DbMasterField>(&mut conn)?;

        Ok(field.try_into()?)
    }
}
