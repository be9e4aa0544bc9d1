use std::collections::HashMap;

use actix_web::{HttpResponse, get, patch, post, web};

use crate::dto::api::ApiResponse;
use crate::forms::courses::{CreateCourseForm, UpdateCourseForm};
use crate::listing::{Clock, ListSettings};
use crate::repository::DieselRepository;
use crate::routes::engine;
use crate::services::{ServiceError, courses as courses_service};

#[get("/courses")]
pub async fn list_courses(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    settings: web::Data<ListSettings>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let result =
        courses_service::list_courses(repo.get_ref(), &engine(&clock, &settings), &params)?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(200, "Courses retrieved successfully", result)))
}

#[post("/courses")]
pub async fn create_course(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreateCourseForm>,
) -> Result<HttpResponse, ServiceError> {
    let course = courses_service::create_course(repo.get_ref(), clock.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ApiResponse::new(201, "Course created successfully", course)))
}

#[get("/courses/{course_id}")]
pub async fn show_course(
    repo: web::Data<DieselRepository>,
    course_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let course = courses_service::get_course(repo.get_ref(), course_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Course retrieved successfully", course)))
}

#[patch("/courses/{course_id}")]
pub async fn update_course(
    repo: web::Data<DieselRepository>,
    clock: web::Data<dyn Clock>,
    course_id: web::Path<i32>,
    form: web::Json<UpdateCourseForm>,
) -> Result<HttpResponse, ServiceError> {
    let course = courses_service::update_course(
        repo.get_ref(),
        clock.get_ref(),
        course_id.into_inner(),
        form.into_inner(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Course updated successfully", course)))
}
