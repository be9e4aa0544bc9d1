use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::job::{NewJob, UpdateJob};
use crate::domain::types::{Label, Title, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for `POST /jobs`.
pub struct CreateJobForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub company: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(length(min = 1, max = 32))]
    pub job_type: String,
    #[validate(length(min = 1, max = 32))]
    pub status: String,
}

impl CreateJobForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<NewJob, TypeConstraintError> {
        Ok(NewJob {
            title: Title::new(self.title)?,
            company: Label::new(self.company)?,
            location: Label::new(self.location)?,
            job_type: Label::new(self.job_type)?,
            status: Label::new(self.status)?,
            timestamp: now,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for `PATCH /jobs/{id}`.
pub struct UpdateJobForm {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub job_type: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

impl UpdateJobForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<UpdateJob, TypeConstraintError> {
        Ok(UpdateJob {
            title: self.title.map(Title::new).transpose()?,
            company: self.company.map(Label::new).transpose()?,
            location: self.location.map(Label::new).transpose()?,
            job_type: self.job_type.map(Label::new).transpose()?,
            status: self.status.map(Label::new).transpose()?,
            updated_at: now,
        })
    }
}
