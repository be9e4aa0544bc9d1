use diesel::prelude::*;

use crate::domain::interest::{Interest, NewInterest, UpdateInterest};
use crate::domain::types::InterestId;
use crate::models::interest::{
    Interest as DbInterest, NewInterest as DbNewInterest, UpdateInterest as DbUpdateInterest,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::listing::diesel_collection;
use crate::repository::{DieselRepository, InterestReader, InterestWriter};
use crate::schema::interests;

diesel_collection!(Interest => DbInterest, interests {
    "subFieldId" => sub_field_id: Integer,
    "title" => title: Text,
    "createdAt" => created_at: Timestamp,
    "updatedAt" => updated_at: Timestamp,
});

impl InterestReader for DieselRepository {
    fn get_interest_by_id(&self, id: InterestId) -> RepositoryResult<Option<Interest>> {
        let mut conn = self.conn()?;
        let interest = interests::table
            .find(id.get())
            .first::<DbInterest>(&mut conn)
            .optional()?;

        Ok(interest.map(Interest::try_from).transpose()?)
    }
}

impl InterestWriter for DieselRepository {
    fn create_interest(&self, new_interest: &NewInterest) -> RepositoryResult<Interest> {
        let mut conn = self.conn()?;
        let insertable: DbNewInterest = new_interest.into();

        let interest = diesel::insert_into(interests::table)
            .values(&insertable)
            .get_result::<DbInterest>(&mut conn)?;

        Ok(interest.try_into()?)
    }

    fn update_interest(
        &self,
        id: InterestId,
        updates: &UpdateInterest,
    ) -> RepositoryResult<Interest> {
        let mut conn = self.conn()?;
        let changes: DbUpdateInterest = updates.into();

        let interest = diesel::update(interests::table.find(id.get()))
            .set(&changes)
            .get_result::<DbInterest>(&mut conn)?;

        Ok(interest.try_into()?)
    }
}
