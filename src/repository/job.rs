use diesel::prelude::*;

use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::domain::types::JobId;
use crate::models::job::{Job as DbJob, NewJob as DbNewJob, UpdateJob as DbUpdateJob};
use crate::repository::errors::RepositoryResult;
use crate::repository::listing::diesel_collection;
use crate::repository::{DieselRepository, JobReader, JobWriter};
use crate::schema::jobs;

diesel_collection!(Job => DbJob, jobs {
    "title" => title: Text,
    "company" => company: Text,
    "location" => location: Text,
    "jobType" => job_type: Text,
    "status" => status: Text,
    "createdAt" => created_at: Timestamp,
    "updatedAt" => updated_at: Timestamp,
});

impl JobReader for DieselRepository {
    fn get_job_by_id(&self, id: JobId) -> RepositoryResult<Option<Job>> {
        let mut conn = self.conn()?;
        let job = jobs::table
            .find(id.get())
            .first::<DbJob>(&mut conn)
            .optional()?;

        Ok(job.map(Job::try_from).transpose()?)
    }
}

impl JobWriter for DieselRepository {
    fn create_job(&self, new_job: &NewJob) -> RepositoryResult<Job> {
        let mut conn = self.conn()?;
        let insertable: DbNewJob = new_job.into();

        let job = diesel::insert_into(jobs::table)
            .values(&insertable)
            .get_result::<DbJob>(&mut conn)?;

        Ok(job.try_into()?)
    }

    fn update_job(&self, id: JobId, updates: &UpdateJob) -> RepositoryResult<Job> {
        let mut conn = self.conn()?;
        let changes: DbUpdateJob = updates.into();

        let job = diesel::update(jobs::table.find(id.get()))
            .set(&changes)
            .get_result::<DbJob>(&mut conn)?;

        Ok(job.try_into()?)
    }
}
