use std::collections::HashMap;

use validator::Validate;

use crate::domain::master_field::MasterField;
use crate::domain::types::MasterFieldId;
use crate::forms::taxonomy::{CreateMasterFieldForm, UpdateMasterFieldForm};
use crate::listing::{Clock, ListEngine, ListRequest, ListResult};
use crate::repository::{Collection, MasterFieldReader, MasterFieldWriter};
use crate::services::{ServiceError, ServiceResult, log_list_failure};

pub fn list_master_fields<R>(
    repo: &R,
    engine: &ListEngine,
    params: &HashMap<String, String>,
) -> ServiceResult<ListResult<MasterField>>
where
    R: Collection<MasterField> + ?Sized,
{
    let request = ListRequest::from_query(params, &MasterField::RESOURCE);

    engine
        .list(repo, &MasterField::RESOURCE, &request)
        .map_err(|err| {
            log_list_failure("master fields", &err);
            err.into()
        })
}

pub fn get_master_field<R>(repo: &R, field_id: i32) -> ServiceResult<MasterField>
where
    R: MasterFieldReader + ?Sized,
{
    let field_id = MasterFieldId::new(field_id)?;

    repo.get_master_field_by_id(field_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Master field {field_id} not found")))
}

pub fn create_master_field<R>(
    repo: &R,
    clock: &dyn Clock,
    form: CreateMasterFieldForm,
) -> ServiceResult<MasterField>
where
    R: MasterFieldWriter + ?Sized,
{
    form.validate()?;

    let new_field = form.into_domain(clock.now())?;

    repo.create_master_field(&new_field).map_err(|err| {
        log::error!("Failed to create a master field: {err}");
        err.into()
    })
}

pub fn update_master_field<R>(
    repo: &R,
    clock: &dyn Clock,
    field_id: i32,
    form: UpdateMasterFieldForm,
) -> ServiceResult<MasterField>
where
    R: MasterFieldWriter + ?Sized,
{
    let field_id = MasterFieldId::new(field_id)?;
    form.validate()?;

    let updates = form.into_domain(clock.now())?;

    repo.update_master_field(field_id, &updates).map_err(|err| {
        log::error!("Failed to update master field {field_id}: {err}");
        err.into()
    })
}
