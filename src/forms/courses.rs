use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::course::{NewCourse, UpdateCourse};
use crate::domain::types::{Label, SanitizedText, Title, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for `POST /courses`.
pub struct CreateCourseForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    /// May contain markup; unsafe tags are stripped.
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
    #[validate(length(min = 1, max = 32))]
    pub status: String,
}

impl CreateCourseForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<NewCourse, TypeConstraintError> {
        Ok(NewCourse::new(
            Title::new(self.title)?,
            Label::new(self.code)?,
            SanitizedText::new(self.description),
            Label::new(self.status)?,
            now,
        ))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for `PATCH /courses/{id}`. Omitted fields keep their value.
pub struct UpdateCourseForm {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

impl UpdateCourseForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<UpdateCourse, TypeConstraintError> {
        Ok(UpdateCourse {
            title: self.title.map(Title::new).transpose()?,
            code: self.code.map(Label::new).transpose()?,
            description: self.description.map(SanitizedText::new),
            status: self.status.map(Label::new).transpose()?,
            updated_at: now,
        })
    }
}
