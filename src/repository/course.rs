use diesel::prelude::*;

use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::types::CourseId;
use crate::models::course::{
    Course as DbCourse, NewCourse as DbNewCourse, UpdateCourse as DbUpdateCourse,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::listing::diesel_collection;
use crate::repository::{CourseReader, CourseWriter, DieselRepository};
use crate::schema::courses;

diesel_collection!(Course => DbCourse, courses {
    "title" => title: Text,
    "code" => code: Text,
    "description" => description: Text,
    "status" => status: Text,
    "createdAt" => created_at: Timestamp,
    "updatedAt" => updated_at: Timestamp,
});

impl CourseReader for DieselRepository {
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        let mut conn = self.conn()?;
        let course = courses::table
            .find(id.get())
            .first::<DbCourse>(&mut conn)
            .optional()?;

        Ok(course.map(Course::try_from).transpose()?)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course> {
        let mut conn = self.conn()?;
        let insertable: DbNewCourse = new_course.into();

        let course = diesel::insert_into(courses::table)
            .values(&insertable)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(course.try_into()?)
    }

    fn update_course(&self, id: CourseId, updates: &UpdateCourse) -> RepositoryResult<Course> {
        let mut conn = self.conn()?;
        let changes: DbUpdateCourse = updates.into();

        let course = diesel::update(courses::table.find(id.get()))
            .set(&changes)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(course.try_into()?)
    }
}
