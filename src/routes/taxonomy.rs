//! Master fields, sub-fields and interests.

use std::collections::HashMap;

use actix_web::{HttpResponse, get, patch, post, web};

use crate::dto::api::ApiResponse;
use crate::forms::taxonomy::{
    CreateInterestForm, CreateMasterFieldForm, CreateSubFieldForm, UpdateInterestForm,
    UpdateMasterFieldForm, UpdateSubFieldForm,
};
use crate::listing::{Clock, ListSettings};
use crate::repository::DieselRepository;
use crate::routes::engine;
use crate::services::{
    ServiceError, interests as interests_service, master_fields as master_fields_service,
    sub_fields as sub_fields_service,
};

#[get("/master-fields")]
pub async fn list_master_fields(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let result = master_fields_service::list_master_fields(
        repo.get_ref(),
        &engine(&clock, &settings),
        &params,
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(
        200,
        "Master fields retrieved successfully",
        result,
    )))
}

#[post("/master-fields")]
pub async fn create_master_field(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreateMasterFieldForm>,
) -> Result<HttpResponse, ServiceError> {
    let field = master_fields_service::create_master_field(
        repo.get_ref(),
        clock.get_ref(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        201,
        "Master field created successfully",
        field,
    )))
}

#[get("/master-fields/{field_id}")]
pub async fn show_master_field(
    repo: web::Data<DieselRepository>,
    field_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let field = master_fields_service::get_master_field(repo.get_ref(), field_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        200,
        "Master field retrieved successfully",
        field,
    )))
}

#[patch("/master-fields/{field_id}")]
pub async fn update_master_field(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    field_id: web::Path<i32>,
    form: web::Json<UpdateMasterFieldForm>,
) -> Result<HttpResponse, ServiceError> {
    let field = master_fields_service::update_master_field(
        repo.get_ref(),
        clock.get_ref(),
        field_id.into_inner(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        200,
        "Master field updated successfully",
        field,
    )))
}

#[get("/sub-fields")]
pub async fn list_sub_fields(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let result =
        sub_fields_service::list_sub_fields(repo.get_ref(), &engine(&clock, &settings), &params)?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(
        200,
        "Sub fields retrieved successfully",
        result,
    )))
}

#[post("/sub-fields")]
pub async fn create_sub_field(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreateSubFieldForm>,
) -> Result<HttpResponse, ServiceError> {
    let field =
        sub_fields_service::create_sub_field(repo.get_ref(), clock.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        201,
        "Sub field created successfully",
        field,
    )))
}

#[get("/sub-fields/{field_id}")]
pub async fn show_sub_field(
    repo: web::Data<DieselRepository>,
    field_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let field = sub_fields_service::get_sub_field(repo.get_ref(), field_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        200,
        "Sub field retrieved successfully",
        field,
    )))
}

#[patch("/sub-fields/{field_id}")]
pub async fn update_sub_field(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    field_id: web::Path<i32>,
    form: web::Json<UpdateSubFieldForm>,
) -> Result<HttpResponse, ServiceError> {
    let field = sub_fields_service::update_sub_field(
        repo.get_ref(),
        clock.get_ref(),
        field_id.into_inner(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        200,
        "Sub field updated successfully",
        field,
    )))
}

#[get("/interests")]
pub async fn list_interests(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let result =
        interests_service::list_interests(repo.get_ref(), &engine(&clock, &settings), &params)?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(
        200,
        "Interests retrieved successfully",
        result,
    )))
}

#[post("/interests")]
pub async fn create_interest(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreateInterestForm>,
) -> Result<HttpResponse, ServiceError> {
    let interest =
        interests_service::create_interest(repo.get_ref(), clock.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        201,
        "Interest created successfully",
        interest,
    )))
}

#[get("/interests/{interest_id}")]
pub async fn show_interest(
    repo: web::Data<DieselRepository>,
    interest_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let interest = interests_service::get_interest(repo.get_ref(), interest_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        200,
        "Interest retrieved successfully",
        interest,
    )))
}

#[patch("/interests/{interest_id}")]
pub async fn update_interest(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    interest_id: web::Path<i32>,
    form: web::Json<UpdateInterestForm>,
) -> Result<HttpResponse, ServiceError> {
    let interest = interests_service::update_interest(
        repo.get_ref(),
        clock.get_ref(),
        interest_id.into_inner(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        200,
        "Interest updated successfully",
        interest,
    )))
}
