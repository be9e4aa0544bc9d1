//! JSON HTTP layer mounted under `/api/v1`.
//!
//! Handlers adapt requests to service calls and wrap the outcome in the
//! [`ApiResponse`](crate::dto::api::ApiResponse) envelope. Failures are
//! rendered through the [`ResponseError`] impl of [`ServiceError`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};

use crate::dto::api::ApiError;
use crate::listing::{Clock, ListEngine, ListSettings};
use crate::services::ServiceError;

pub mod courses;
pub mod jobs;
pub mod taxonomy;
pub mod users;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidInput(_) | ServiceError::TypeConstraint(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ServiceError::Repository(err) => {
                log::error!("Storage failure: {err}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(ApiError::new(status.as_u16(), message))
    }
}

/// Renders malformed JSON bodies as `InvalidInput` envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ServiceError::InvalidInput(err.to_string()).into())
}

pub(crate) fn engine<'a>(
    clock: &'a web::Data<dyn Clock>,
    settings: &'a web::Data<ListSettings>,
) -> ListEngine<'a> {
    ListEngine::new(clock.get_ref(), settings.get_ref())
}

/// Registers every API route under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .service(courses::list_courses)
            .service(courses::create_course)
            .service(courses::show_course)
            .service(courses::update_course)
            .service(jobs::list_jobs)
            .service(jobs::create_job)
            .service(jobs::show_job)
            .service(jobs::update_job)
            .service(taxonomy::list_master_fields)
            .service(taxonomy::create_master_field)
            .service(taxonomy::show_master_field)
            .service(taxonomy::update_master_field)
            .service(taxonomy::list_sub_fields)
            .service(taxonomy::create_sub_field)
            .service(taxonomy::show_sub_field)
            .service(taxonomy::update_sub_field)
            .service(taxonomy::list_interests)
            .service(taxonomy::create_interest)
            .service(taxonomy::show_interest)
            .service(taxonomy::update_interest)
            .service(users::create_user)
            .service(users::show_user)
            .service(users::update_user)
            .service(users::list_admins)
            .service(users::list_faculty)
            .service(users::list_students)
            .service(users::list_super_admins),
    );
}
