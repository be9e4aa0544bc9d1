//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::interest::{Interest, NewInterest, UpdateInterest};
use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::domain::master_field::{MasterField, NewMasterField, UpdateMasterField};
use crate::domain::sub_field::{NewSubField, SubField, UpdateSubField};
use crate::domain::types::{
    CourseId, InterestId, JobId, MasterFieldId, SubFieldId, UserEmail, UserId,
};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::listing::{QueryPredicate, Sort, Window};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    Collection, CourseReader, CourseWriter, InterestReader, InterestWriter, JobReader, JobWriter,
    MasterFieldReader, MasterFieldWriter, SubFieldReader, SubFieldWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl CourseReader for Repository {
        fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
    }

    impl CourseWriter for Repository {
        fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
        fn update_course(&self, id: CourseId, updates: &UpdateCourse) -> RepositoryResult<Course>;
    }

    impl JobReader for Repository {
        fn get_job_by_id(&self, id: JobId) -> RepositoryResult<Option<Job>>;
    }

    impl JobWriter for Repository {
        fn create_job(&self, new_job: &NewJob) -> RepositoryResult<Job>;
        fn update_job(&self, id: JobId, updates: &UpdateJob) -> RepositoryResult<Job>;
    }

    impl MasterFieldReader for Repository {
        fn get_master_field_by_id(&self, id: MasterFieldId) -> RepositoryResult<Option<MasterField>>;
    }

    impl MasterFieldWriter for Repository {
        fn create_master_field(&self, new_field: &NewMasterField) -> RepositoryResult<MasterField>;
        fn update_master_field(
            &self,
            id: MasterFieldId,
            updates: &UpdateMasterField,
        ) -> RepositoryResult<MasterField>;
    }

    impl SubFieldReader for Repository {
        fn get_sub_field_by_id(&self, id: SubFieldId) -> RepositoryResult<Option<SubField>>;
    }

    impl SubFieldWriter for Repository {
        fn create_sub_field(&self, new_field: &NewSubField) -> RepositoryResult<SubField>;
        fn update_sub_field(
            &self,
            id: SubFieldId,
            updates: &UpdateSubField,
        ) -> RepositoryResult<SubField>;
    }

    impl InterestReader for Repository {
        fn get_interest_by_id(&self, id: InterestId) -> RepositoryResult<Option<Interest>>;
    }

    impl InterestWriter for Repository {
        fn create_interest(&self, new_interest: &NewInterest) -> RepositoryResult<Interest>;
        fn update_interest(
            &self,
            id: InterestId,
            updates: &UpdateInterest,
        ) -> RepositoryResult<Interest>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
    }
}

mock! {
    /// Storage collaborator of a single listing, for asserting query shapes.
    pub Listing<T: 'static> {}

    impl<T: 'static> Collection<T> for Listing<T> {
        fn find_all(&self) -> RepositoryResult<Vec<T>>;
        fn find_many(
            &self,
            predicate: &QueryPredicate,
            sort: &Sort,
            window: Option<Window>,
        ) -> RepositoryResult<Vec<T>>;
        fn count(&self, predicate: &QueryPredicate) -> RepositoryResult<i64>;
    }
}
