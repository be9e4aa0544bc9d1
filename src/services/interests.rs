use std::collections::HashMap;

use validator::Validate;

use crate::domain::interest::Interest;
use crate::domain::types::{InterestId, SubFieldId};
use crate::forms::taxonomy::{CreateInterestForm, UpdateInterestForm};
use crate::listing::{Clock, ListEngine, ListRequest, ListResult};
use crate::repository::{Collection, InterestReader, InterestWriter, SubFieldReader};
use crate::services::{ServiceError, ServiceResult, log_list_failure};

pub fn list_interests<R>(
    repo: &R,
    engine: &ListEngine,
    params: &HashMap<String, String>,
) -> ServiceResult<ListResult<Interest>>
where
    R: Collection<Interest> + ?Sized,
{
    let request = ListRequest::from_query(params, &Interest::RESOURCE);

    engine
        .list(repo, &Interest::RESOURCE, &request)
        .map_err(|err| {
            log_list_failure("interests", &err);
            err.into()
        })
}

pub fn get_interest<R>(repo: &R, interest_id: i32) -> ServiceResult<Interest>
where
    R: InterestReader + ?Sized,
{
    let interest_id = InterestId::new(interest_id)?;

    repo.get_interest_by_id(interest_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Interest {interest_id} not found")))
}

fn ensure_sub_field<R>(repo: &R, id: SubFieldId) -> ServiceResult<()>
where
    R: SubFieldReader + ?Sized,
{
    if repo.get_sub_field_by_id(id)?.is_none() {
        return Err(ServiceError::InvalidInput(format!(
            "Sub field {id} does not exist"
        )));
    }
    Ok(())
}

pub fn create_interest<R>(
    repo: &R,
    clock: &dyn Clock,
    form: CreateInterestForm,
) -> ServiceResult<Interest>
where
    R: InterestWriter + SubFieldReader + ?Sized,
{
    form.validate()?;

    let new_interest = form.into_domain(clock.now())?;
    ensure_sub_field(repo, new_interest.sub_field_id)?;

    repo.create_interest(&new_interest).map_err(|err| {
        log::error!("Failed to create an interest: {err}");
        err.into()
    })
}

pub fn update_interest<R>(
    repo: &R,
    clock: &dyn Clock,
    interest_id: i32,
    form: UpdateInterestForm,
) -> ServiceResult<Interest>
where
    R: InterestWriter + SubFieldReader + ?Sized,
{
    let interest_id = InterestId::new(interest_id)?;
    form.validate()?;

    let updates = form.into_domain(clock.now())?;
    if let Some(sub_field_id) = updates.sub_field_id {
        ensure_sub_field(repo, sub_field_id)?;
    }

    repo.update_interest(interest_id, &updates).map_err(|err| {
        log::error!("Failed to update interest {interest_id}: {err}");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::sub_field::SubField;
    use crate::domain::types::{MasterFieldId, Title};
    use crate::listing::FixedClock;
    use crate::repository::mock::MockRepository;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 4, 4)
                .unwrap()
                .and_hms_opt(4, 4, 4)
                .unwrap(),
        )
    }

    #[test]
    fn create_under_existing_sub_field() {
        let now = clock().0;
        let mut repo = MockRepository::new();
        repo.expect_get_sub_field_by_id()
            .withf(|id| id.get() == 7)
            .times(1)
            .returning(move |id| {
                Ok(Some(SubField {
                    id,
                    master_field_id: MasterFieldId::new(1).expect("valid id"),
                    title: Title::new("Robotics").expect("valid title"),
                    created_at: now,
                    updated_at: now,
                }))
            });
        repo.expect_create_interest()
            .times(1)
            .returning(|new_interest| {
                Ok(Interest {
                    id: InterestId::new(1).expect("valid id"),
                    sub_field_id: new_interest.sub_field_id,
                    title: new_interest.title.clone(),
                    created_at: new_interest.timestamp,
                    updated_at: new_interest.timestamp,
                })
            });
        let form = CreateInterestForm {
            sub_field_id: 7,
            title: "Drones".into(),
        };

        let created = create_interest(&repo, &clock(), form).expect("created");

        assert_eq!(created.sub_field_id.get(), 7);
        assert_eq!(created.created_at, now);
    }

    #[test]
    fn moving_to_missing_sub_field_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_get_sub_field_by_id().returning(|_| Ok(None));
        repo.expect_update_interest().times(0);
        let form = UpdateInterestForm {
            sub_field_id: Some(9),
            title: None,
        };

        let result = update_interest(&repo, &clock(), 1, form);

        assert!(matches!(result, Err(ServiceError::InvalidInput(ref m)) if m == "Sub field 9 does not exist"));
    }
}
