use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::interest::{Interest, NewInterest, UpdateInterest};
use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::domain::master_field::{MasterField, NewMasterField, UpdateMasterField};
use crate::domain::sub_field::{NewSubField, SubField, UpdateSubField};
use crate::domain::types::{CourseId, InterestId, JobId, MasterFieldId, SubFieldId, UserEmail, UserId};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::listing::{QueryPredicate, Record, Sort, Window};
use crate::repository::errors::RepositoryResult;

pub mod course;
pub mod errors;
pub mod interest;
pub mod job;
mod listing;
pub mod master_field;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sub_field;
pub mod user;

/// Storage collaborator for list queries.
///
/// Implementations must order by `sort` and then by `id` ascending so that
/// pagination is reproducible.
pub trait Collection<T> {
    /// Every record, ordered by `id`.
    fn find_all(&self) -> RepositoryResult<Vec<T>>;

    fn find_many(
        &self,
        predicate: &QueryPredicate,
        sort: &Sort,
        window: Option<Window>,
    ) -> RepositoryResult<Vec<T>>;

    fn count(&self, predicate: &QueryPredicate) -> RepositoryResult<i64>;
}

/// A view of another collection restricted to rows matching `scope`.
///
/// Used for role listings: "admins" is the user collection scoped to
/// `role = admin`.
pub struct ScopedCollection<'a, C: ?Sized> {
    inner: &'a C,
    scope: QueryPredicate,
}

impl<'a, C: ?Sized> ScopedCollection<'a, C> {
    pub fn new(inner: &'a C, scope: QueryPredicate) -> Self {
        Self { inner, scope }
    }
}

impl<T, C> Collection<T> for ScopedCollection<'_, C>
where
    T: Record,
    C: Collection<T> + ?Sized,
{
    fn find_all(&self) -> RepositoryResult<Vec<T>> {
        self.inner.find_many(&self.scope, &Sort::by_id(), None)
    }

    fn find_many(
        &self,
        predicate: &QueryPredicate,
        sort: &Sort,
        window: Option<Window>,
    ) -> RepositoryResult<Vec<T>> {
        self.inner
            .find_many(&(self.scope.clone() & predicate.clone()), sort, window)
    }

    fn count(&self, predicate: &QueryPredicate) -> RepositoryResult<i64> {
        self.inner.count(&(self.scope.clone() & predicate.clone()))
    }
}

pub trait CourseReader {
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
}

pub trait CourseWriter {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
    fn update_course(&self, id: CourseId, updates: &UpdateCourse) -> RepositoryResult<Course>;
}

pub trait JobReader {
    fn get_job_by_id(&self, id: JobId) -> RepositoryResult<Option<Job>>;
}

pub trait JobWriter {
    fn create_job(&self, new_job: &NewJob) -> RepositoryResult<Job>;
    fn update_job(&self, id: JobId, updates: &UpdateJob) -> RepositoryResult<Job>;
}

pub trait MasterFieldReader {
    fn get_master_field_by_id(&self, id: MasterFieldId) -> RepositoryResult<Option<MasterField>>;
}

pub trait MasterFieldWriter {
    fn create_master_field(&self, new_field: &NewMasterField) -> RepositoryResult<MasterField>;
    fn update_master_field(
        &self,
        id: MasterFieldId,
        updates: &UpdateMasterField,
    ) -> RepositoryResult<MasterField>;
}

pub trait SubFieldReader {
    fn get_sub_field_by_id(&self, id: SubFieldId) -> RepositoryResult<Option<SubField>>;
}

pub trait SubFieldWriter {
    fn create_sub_field(&self, new_field: &NewSubField) -> RepositoryResult<SubField>;
    fn update_sub_field(
        &self,
        id: SubFieldId,
        updates: &UpdateSubField,
    ) -> RepositoryResult<SubField>;
}

pub trait InterestReader {
    fn get_interest_by_id(&self, id: InterestId) -> RepositoryResult<Option<Interest>>;
}

pub trait InterestWriter {
    fn create_interest(&self, new_interest: &NewInterest) -> RepositoryResult<Interest>;
    fn update_interest(
        &self,
        id: InterestId,
        updates: &UpdateInterest,
    ) -> RepositoryResult<Interest>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
