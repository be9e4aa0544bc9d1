//! Job board use cases.

use std::collections::HashMap;

use validator::Validate;

use crate::domain::job::Job;
use crate::domain::types::JobId;
use crate::forms::jobs::{CreateJobForm, UpdateJobForm};
use crate::listing::{Clock, ListEngine, ListRequest, ListResult};
use crate::repository::{Collection, JobReader, JobWriter};
use crate::services::{ServiceError, ServiceResult, log_list_failure};

pub fn list_jobs<R>(
    repo: &R,
    engine: &ListEngine,
    params: &HashMap<String, String>,
) -> ServiceResult<ListResult<Job>>
where
    R: Collection<Job> + ?Sized,
{
    let request = ListRequest::from_query(params, &Job::RESOURCE);

    engine.list(repo, &Job::RESOURCE, &request).map_err(|err| {
        log_list_failure("jobs", &err);
        err.into()
    })
}

pub fn get_job<R>(repo: &R, job_id: i32) -> ServiceResult<Job>
where
    R: JobReader + ?Sized,
{
    let job_id = JobId::new(job_id)?;

    repo.get_job_by_id(job_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Job {job_id} not found")))
}

pub fn create_job<R>(repo: &R, clock: &dyn Clock, form: CreateJobForm) -> ServiceResult<Job>
where
    R: JobWriter + ?Sized,
{
    form.validate()?;

    let new_job = form.into_domain(clock.now())?;

    repo.create_job(&new_job).map_err(|err| {
        log::error!("Failed to create a job: {err}");
        err.into()
    })
}

pub fn update_job<R>(
    repo: &R,
    clock: &dyn Clock,
    job_id: i32,
    form: UpdateJobForm,
) -> ServiceResult<Job>
where
    R: JobWriter + ?Sized,
{
    let job_id = JobId::new(job_id)?;
    form.validate()?;

    let updates = form.into_domain(clock.now())?;

    repo.update_job(job_id, &updates).map_err(|err| {
        log::error!("Failed to update job {job_id}: {err}");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::types::{Label, Title};
    use crate::listing::{FixedClock, ListSettings, QueryPredicate, TimeBucket};
    use crate::repository::mock::{MockListing, MockRepository};

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn job(id: i32) -> Job {
        Job {
            id: JobId::new(id).expect("valid id"),
            title: Title::new("Research Intern").expect("valid title"),
            company: Label::new("Acme Labs").expect("valid company"),
            location: Label::new("Remote").expect("valid location"),
            job_type: Label::new("Internship").expect("valid job type"),
            status: Label::new("Open").expect("valid status"),
            created_at: anchor(),
            updated_at: anchor(),
        }
    }

    #[test]
    fn update_rejects_negative_id() {
        let mut repo = MockRepository::new();
        repo.expect_update_job().times(0);
        let clock = FixedClock(anchor());

        let result = update_job(&repo, &clock, -1, UpdateJobForm::default());

        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn filtered_listing_runs_unpaged_then_paged_query() {
        // Filters are applied in key order: `createdAt` before `jobType`.
        let expected = QueryPredicate::IdIn(vec![3])
            & QueryPredicate::TimeBucket {
                field: "createdAt".into(),
                bucket: TimeBucket::TwoDays,
                anchor: anchor(),
            }
            & QueryPredicate::equals("jobType", "Internship");

        let mut listing = MockListing::<Job>::new();
        listing.expect_find_all().returning(|| Ok(vec![job(3)]));
        let unpaged = expected.clone();
        listing
            .expect_find_many()
            .withf(move |predicate, _, window| *predicate == unpaged && window.is_none())
            .times(1)
            .returning(|_, _, _| Ok(vec![job(3)]));
        listing
            .expect_find_many()
            .withf(move |predicate, _, window| *predicate == expected && window.is_some())
            .times(1)
            .returning(|_, _, _| Ok(vec![job(3)]));
        listing.expect_count().times(0);

        let clock = FixedClock(anchor());
        let settings = ListSettings::default();
        let engine = ListEngine::new(&clock, &settings);
        let params: HashMap<String, String> = [("jobType", "Internship"), ("createdAt", "2days")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let result = list_jobs(&listing, &engine, &params).expect("listed");

        assert_eq!(result.meta.total, 1);
        assert_eq!(result.data, vec![job(3)]);
    }
}
