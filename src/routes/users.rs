//! User accounts and the per-role directory listings.

use std::collections::HashMap;

use actix_web::{HttpResponse, get, patch, post, web};

use crate::domain::types::UserRole;
use crate::dto::api::ApiResponse;
use crate::forms::users::{CreateUserForm, UpdateUserForm};
use crate::listing::{Clock, ListSettings};
use crate::repository::DieselRepository;
use crate::routes::engine;
use crate::services::{ServiceError, users as users_service};

fn list_role(
    repo: &DieselRepository,
    clock: &web::Data<dyn Clock>,
    settings: &web::Data<ListSettings>,
    role: UserRole,
    params: &HashMap<String, String>,
    message: &str,
) -> Result<HttpResponse, ServiceError> {
    let result = users_service::list_users_by_role(repo, &engine(clock, settings), role, params)?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(200, message, result)))
}

#[get("/admins")]
pub async fn list_admins(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    list_role(
        &repo,
        &clock,
        &settings,
        UserRole::Admin,
        &params,
        "Admins retrieved successfully",
    )
}

#[get("/faculty")]
pub async fn list_faculty(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    list_role(
        &repo,
        &clock,
        &settings,
        UserRole::Faculty,
        &params,
        "Faculty retrieved successfully",
    )
}

#[get("/students")]
pub async fn list_students(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    list_role(
        &repo,
        &clock,
        &settings,
        UserRole::Student,
        &params,
        "Students retrieved successfully",
    )
}

#[get("/super-admins")]
pub async fn list_super_admins(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    list_role(
        &repo,
        &clock,
        &settings,
        UserRole::SuperAdmin,
        &params,
        "Super admins retrieved successfully",
    )
}

#[post("/users")]
pub async fn create_user(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreateUserForm>,
) -> Result<HttpResponse, ServiceError> {
    let user = users_service::create_user(repo.get_ref(), clock.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ApiResponse::new(201, "User created successfully", user)))
}

#[get("/users/{user_id}")]
pub async fn show_user(
    repo: web::Data<DieselRepository>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let user = users_service::get_user(repo.get_ref(), user_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "User retrieved successfully", user)))
}

#[patch("/users/{user_id}")]
pub async fn update_user(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    user_id: web::Path<i32>,
    form: web::Json<UpdateUserForm>,
) -> Result<HttpResponse, ServiceError> {
    let user = users_service::update_user(
        repo.get_ref(),
        clock.get_ref(),
        user_id.into_inner(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "User updated successfully", user)))
}
