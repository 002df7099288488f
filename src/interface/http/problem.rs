use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiProblem>;

/// Error reply rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    detail: String,
}

impl ApiProblem {
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::Validation(detail) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail),
            DomainError::NotFound(detail) => Self::new(StatusCode::NOT_FOUND, detail),
        }
    }

    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        Self::from_domain(DomainError::validation(rejection.body_text()))
    }

    pub fn from_query_rejection(rejection: QueryRejection) -> Self {
        Self::from_domain(DomainError::validation(rejection.body_text()))
    }

    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            detail: self.detail,
        };

        (self.status, Json(payload)).into_response()
    }
}
