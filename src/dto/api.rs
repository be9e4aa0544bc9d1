use serde::Serialize;

use crate::listing::{ListMeta, ListResult};

/// Success envelope wrapping every API payload.
///
/// `meta` is present for list endpoints and serialized as `null` otherwise.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub meta: Option<ListMeta>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status_code,
            message: message.into(),
            meta: None,
            data,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    pub fn list(status_code: u16, message: impl Into<String>, result: ListResult<T>) -> Self {
        Self {
            success: true,
            status_code,
            message: message.into(),
            meta: Some(result.meta),
            data: result.data,
        }
    }
}

/// Error envelope produced by [`crate::services::ServiceError`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            message: message.into(),
        }
    }
}
