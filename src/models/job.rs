//! Diesel models representing job postings.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::job::{Job as DomainJob, NewJob as DomainNewJob, UpdateJob as DomainUpdateJob};
use crate::domain::types::{JobId, Label, Title, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::jobs)]
/// Diesel model for [`crate::domain::job::Job`].
pub struct Job {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::jobs)]
pub struct NewJob<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub job_type: &'a str,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::jobs)]
pub struct UpdateJob<'a> {
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub job_type: Option<&'a str>,
    pub status: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Job> for DomainJob {
    type Error = TypeConstraintError;

    fn try_from(job: Job) -> Result<Self, Self::Error> {
        Ok(Self {
            id: JobId::try_from(job.id)?,
            title: Title::new(job.title)?,
            company: Label::new(job.company)?,
            location: Label::new(job.location)?,
            job_type: Label::new(job.job_type)?,
            status: Label::new(job.status)?,
            created_at: job.created_at,
            updated_at: job.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewJob> for NewJob<'a> {
    fn from(job: &'a DomainNewJob) -> Self {
        Self {
            title: job.title.as_str(),
            company: job.company.as_str(),
            location: job.location.as_str(),
            job_type: job.job_type.as_str(),
            status: job.status.as_str(),
            created_at: job.timestamp,
            updated_at: job.timestamp,
        }
    }
}

impl<'a> From<&'a DomainUpdateJob> for UpdateJob<'a> {
    fn from(job: &'a DomainUpdateJob) -> Self {
        Self {
            title: job.title.as_ref().map(Title::as_str),
            company: job.company.as_ref().map(Label::as_str),
            location: job.location.as_ref().map(Label::as_str),
            job_type: job.job_type.as_ref().map(Label::as_str),
            status: job.status.as_ref().map(Label::as_str),
            updated_at: job.updated_at,
        }
    }
}
