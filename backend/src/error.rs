//! Errors of the text endpoints and their HTTP mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("field `text-id` not specified")]
    MissingTextId,

    #[error("no text with id {0}")]
    UnknownText(i64),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingTextId => StatusCode::BAD_REQUEST,
            ApiError::UnknownText(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
