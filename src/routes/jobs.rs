use std::collections::HashMap;

use actix_web::{HttpResponse, get, patch, post, web};

use crate::dto::api::ApiResponse;
use crate::forms::jobs::{CreateJobForm, UpdateJobForm};
use crate::listing::{Clock, ListSettings};
use crate::repository::DieselRepository;
use crate::routes::engine;
use crate::services::{ServiceError, jobs as jobs_service};

#[get("/jobs")]
pub async fn list_jobs(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let result = jobs_service::list_jobs(repo.get_ref(), &engine(&clock, &settings), &params)?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(200, "Jobs retrieved successfully", result)))
}

#[post("/jobs")]
pub async fn create_job(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreateJobForm>,
) -> Result<HttpResponse, ServiceError> {
    let job = jobs_service::create_job(repo.get_ref(), clock.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ApiResponse::new(201, "Job created successfully", job)))
}

#[get("/jobs/{job_id}")]
pub async fn show_job(
    repo: web::Data<DieselRepository>,
    job_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let job = jobs_service::get_job(repo.get_ref(), job_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Job retrieved successfully", job)))
}

#[patch("/jobs/{job_id}")]
pub async fn update_job(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    job_id: web::Path<i32>,
    form: web::Json<UpdateJobForm>,
) -> Result<HttpResponse, ServiceError> {
    let job = jobs_service::update_job(
        repo.get_ref(),
        clock.get_ref(),
        job_id.into_inner(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Job updated successfully", job)))
}
