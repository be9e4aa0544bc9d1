//! Course catalogue use cases.

use std::collections::HashMap;

use validator::Validate;

use crate::domain::course::Course;
use crate::domain::types::CourseId;
use crate::forms::courses::{CreateCourseForm, UpdateCourseForm};
use crate::listing::{Clock, ListEngine, ListRequest, ListResult};
use crate::repository::{Collection, CourseReader, CourseWriter};
use crate::services::{ServiceError, ServiceResult, log_list_failure};

/// Lists courses matching the raw query parameters.
pub fn list_courses<R>(
    repo: &R,
    engine: &ListEngine,
    params: &HashMap<String, String>,
) -> ServiceResult<ListResult<Course>>
where
    R: Collection<Course> + ?Sized,
{
    let request = ListRequest::from_query(params, &Course::RESOURCE);

    engine
        .list(repo, &Course::RESOURCE, &request)
        .map_err(|err| {
            log_list_failure("courses", &err);
            err.into()
        })
}

pub fn get_course<R>(repo: &R, course_id: i32) -> ServiceResult<Course>
where
    R: CourseReader + ?Sized,
{
    let course_id = CourseId::new(course_id)?;

    repo.get_course_by_id(course_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Course {course_id} not found")))
}

/// Validates the payload and stores a new course stamped with `clock`.
pub fn create_course<R>(
    repo: &R,
    clock: &dyn Clock,
    form: CreateCourseForm,
) -> ServiceResult<Course>
where
    R: CourseWriter + ?Sized,
{
    form.validate()?;

    let new_course = form.into_domain(clock.now())?;

    repo.create_course(&new_course).map_err(|err| {
        log::error!("Failed to create a course: {err}");
        err.into()
    })
}

pub fn update_course<R>(
    repo: &R,
    clock: &dyn Clock,
    course_id: i32,
    form: UpdateCourseForm,
) -> ServiceResult<Course>
where
    R: CourseWriter + ?Sized,
{
    let course_id = CourseId::new(course_id)?;
    form.validate()?;

    let updates = form.into_domain(clock.now())?;

    repo.update_course(course_id, &updates).map_err(|err| {
        log::error!("Failed to update course {course_id}: {err}");
        err.into()
    })
}
