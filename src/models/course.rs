//! Diesel models representing courses.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::course::{
    Course as DomainCourse, NewCourse as DomainNewCourse, UpdateCourse as DomainUpdateCourse,
};
use crate::domain::types::{CourseId, Label, SanitizedText, Title, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::courses)]
/// Diesel model for [`crate::domain::course::Course`].
pub struct Course {
    pub id: i32,
    pub title: String,
    pub code: String,
    pub description: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::courses)]
/// Insertable form of [`Course`].
pub struct NewCourse<'a> {
    pub title: &'a str,
    pub code: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::courses)]
/// Partial update of a [`Course`] record; `None` columns are left as is.
pub struct UpdateCourse<'a> {
    pub title: Option<&'a str>,
    pub code: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Course> for DomainCourse {
    type Error = TypeConstraintError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CourseId::try_from(course.id)?,
            title: Title::new(course.title)?,
            code: Label::new(course.code)?,
            description: SanitizedText::new(course.description),
            status: Label::new(course.status)?,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCourse> for NewCourse<'a> {
    fn from(course: &'a DomainNewCourse) -> Self {
        Self {
            title: course.title.as_str(),
            code: course.code.as_str(),
            description: course.description.as_str(),
            status: course.status.as_str(),
            created_at: course.timestamp,
            updated_at: course.timestamp,
        }
    }
}

impl<'a> From<&'a DomainUpdateCourse> for UpdateCourse<'a> {
    fn from(course: &'a DomainUpdateCourse) -> Self {
        Self {
            title: course.title.as_ref().map(Title::as_str),
            code: course.code.as_ref().map(Label::as_str),
            description: course.description.as_ref().map(SanitizedText::as_str),
            status: course.status.as_ref().map(Label::as_str),
            updated_at: course.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn from_domain_new_course() {
        let domain = DomainNewCourse::new(
            Title::new("Intro to AI").expect("valid title"),
            Label::new("CS-101").expect("valid code"),
            SanitizedText::new("Search, logic and learning."),
            Label::new("Open").expect("valid status"),
            timestamp(),
        );
        let new: NewCourse = (&domain).into();

        assert_eq!(new.title, "Intro to AI");
        assert_eq!(new.code, "CS-101");
        assert_eq!(new.status, "Open");
        assert_eq!(new.created_at, timestamp());
        assert_eq!(new.updated_at, timestamp());
    }

    #[test]
    fn from_domain_partial_update() {
        let domain = DomainUpdateCourse {
            title: None,
            code: None,
            description: None,
            status: Some(Label::new("Closed").expect("valid status")),
            updated_at: timestamp(),
        };
        let update: UpdateCourse = (&domain).into();

        assert!(update.title.is_none());
        assert_eq!(update.status, Some("Closed"));
    }

    #[test]
    fn from_course_into_domain() {
        let db = Course {
            id: 3,
            title: "Web Dev".into(),
            code: "CS-204".into(),
            description: "HTML <b>and</b> CSS".into(),
            status: "Open".into(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        let domain = DomainCourse::try_from(db).expect("valid course");

        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.title.as_str(), "Web Dev");
        assert_eq!(domain.description.as_str(), "HTML <b>and</b> CSS");
    }

    #[test]
    fn blank_title_is_rejected() {
        let db = Course {
            id: 1,
            title: "  ".into(),
            code: "X".into(),
            description: String::new(),
            status: "Open".into(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };

        assert_eq!(
            DomainCourse::try_from(db),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
