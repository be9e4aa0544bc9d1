use std::collections::HashMap;

use validator::Validate;

use crate::domain::sub_field::SubField;
use crate::domain::types::{MasterFieldId, SubFieldId};
use crate::forms::taxonomy::{CreateSubFieldForm, UpdateSubFieldForm};
use crate::listing::{Clock, ListEngine, ListRequest, ListResult};
use crate::repository::{Collection, MasterFieldReader, SubFieldReader, SubFieldWriter};
use crate::services::{ServiceError, ServiceResult, log_list_failure};

pub fn list_sub_fields<R>(
    repo: &R,
    engine: &ListEngine,
    params: &HashMap<String, String>,
) -> ServiceResult<ListResult<SubField>>
where
    R: Collection<SubField> + ?Sized,
{
    let request = ListRequest::from_query(params, &SubField::RESOURCE);

    engine
        .list(repo, &SubField::RESOURCE, &request)
        .map_err(|err| {
            log_list_failure("sub fields", &err);
            err.into()
        })
}

pub fn get_sub_field<R>(repo: &R, field_id: i32) -> ServiceResult<SubField>
where
    R: SubFieldReader + ?Sized,
{
    let field_id = SubFieldId::new(field_id)?;

    repo.get_sub_field_by_id(field_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Sub field {field_id} not found")))
}

fn ensure_master_field<R>(repo: &R, id: MasterFieldId) -> ServiceResult<()>
where
    R: MasterFieldReader + ?Sized,
{
    match repo.get_master_field_by_id(id)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::InvalidInput(format!(
            "Master field {id} does not exist"
        ))),
    }
}

/// Creates a sub-field under an existing master field.
pub fn create_sub_field<R>(
    repo: &R,
    clock: &dyn Clock,
    form: CreateSubFieldForm,
) -> ServiceResult<SubField>
where
    R: SubFieldWriter + MasterFieldReader + ?Sized,
{
    form.validate()?;

    let new_field = form.into_domain(clock.now())?;
    ensure_master_field(repo, new_field.master_field_id)?;

    repo.create_sub_field(&new_field).map_err(|err| {
        log::error!("Failed to create a sub field: {err}");
        err.into()
    })
}

pub fn update_sub_field<R>(
    repo: &R,
    clock: &dyn Clock,
    field_id: i32,
    form: UpdateSubFieldForm,
) -> ServiceResult<SubField>
where
    R: SubFieldWriter + MasterFieldReader + ?Sized,
{
    let field_id = SubFieldId::new(field_id)?;
    form.validate()?;

    let updates = form.into_domain(clock.now())?;
    if let Some(master_field_id) = updates.master_field_id {
        ensure_master_field(repo, master_field_id)?;
    }

    repo.update_sub_field(field_id, &updates).map_err(|err| {
        log::error!("Failed to update sub field {field_id}: {err}");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::listing::FixedClock;
    use crate::repository::mock::MockRepository;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 3)
                .unwrap()
                .and_hms_opt(3, 3, 3)
                .unwrap(),
        )
    }

    #[test]
    fn create_requires_existing_master_field() {
        let mut repo = MockRepository::new();
        repo.expect_get_master_field_by_id()
            .withf(|id| id.get() == 5)
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create_sub_field().times(0);
        let form = CreateSubFieldForm {
            master_field_id: 5,
            title: "Robotics".into(),
        };

        let result = create_sub_field(&repo, &clock(), form);

        assert!(matches!(result, Err(ServiceError::InvalidInput(ref m)) if m == "Master field 5 does not exist"));
    }

    #[test]
    fn title_only_update_skips_parent_check() {
        let mut repo = MockRepository::new();
        repo.expect_get_master_field_by_id().times(0);
        repo.expect_update_sub_field()
            .times(1)
            .returning(|id, updates| {
                Ok(SubField {
                    id,
                    master_field_id: MasterFieldId::new(1).expect("valid id"),
                    title: updates.title.clone().expect("title provided"),
                    created_at: updates.updated_at,
                    updated_at: updates.updated_at,
                })
            });
        let form = UpdateSubFieldForm {
            master_field_id: None,
            title: Some("Vision".into()),
        };

        let updated = update_sub_field(&repo, &clock(), 2, form).expect("updated");

        assert_eq!(updated.title.as_str(), "Vision");
        assert_eq!(updated.id.get(), 2);
    }
}
