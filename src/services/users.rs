//! User accounts and role listings.

use std::collections::HashMap;

use validator::Validate;

use crate::domain::types::{UserEmail, UserId, UserRole};
use crate::domain::user::User;
use crate::forms::users::{CreateUserForm, UpdateUserForm};
use crate::listing::{Clock, ListEngine, ListRequest, ListResult};
use crate::repository::{Collection, ScopedCollection, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, log_list_failure};

/// Lists the users holding `role`.
///
/// The role is applied as an always-on scope beneath the engine, so search,
/// filters and counts only ever see users of that role.
pub fn list_users_by_role<R>(
    repo: &R,
    engine: &ListEngine,
    role: UserRole,
    params: &HashMap<String, String>,
) -> ServiceResult<ListResult<User>>
where
    R: Collection<User> + ?Sized,
{
    let scoped = ScopedCollection::new(repo, User::role_scope(role));
    let request = ListRequest::from_query(params, &User::RESOURCE);

    engine
        .list(&scoped, &User::RESOURCE, &request)
        .map_err(|err| {
            log_list_failure(&format!("users with role {role}"), &err);
            err.into()
        })
}

pub fn get_user<R>(repo: &R, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let user_id = UserId::new(user_id)?;

    repo.get_user_by_id(user_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))
}

fn ensure_email_free<R>(repo: &R, email: &UserEmail, owner: Option<UserId>) -> ServiceResult<()>
where
    R: UserReader + ?Sized,
{
    match repo.get_user_by_email(email)? {
        Some(existing) if Some(existing.id) != owner => Err(ServiceError::InvalidInput(format!(
            "User with email {email} already exists"
        ))),
        _ => Ok(()),
    }
}

pub fn create_user<R>(repo: &R, clock: &dyn Clock, form: CreateUserForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    form.validate()?;

    let new_user = form.into_domain(clock.now())?;
    ensure_email_free(repo, &new_user.email, None)?;

    repo.create_user(&new_user).map_err(|err| {
        log::error!("Failed to create a user: {err}");
        err.into()
    })
}

pub fn update_user<R>(
    repo: &R,
    clock: &dyn Clock,
    user_id: i32,
    form: UpdateUserForm,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let user_id = UserId::new(user_id)?;
    form.validate()?;

    let updates = form.into_domain(clock.now())?;
    if let Some(email) = &updates.email {
        ensure_email_free(repo, email, Some(user_id))?;
    }

    repo.update_user(user_id, &updates).map_err(|err| {
        log::error!("Failed to update user {user_id}: {err}");
        err.into()
    })
}
