use std::num::ParseFloatError;

use actix_web::{
    error::BlockingError,
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use log::{error, warn};

/// Request failures. Only an unrecognised gender is a client error;
/// everything else answers 500 with the error text as the body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid gender value")]
    InvalidGender,
    #[error("missing form field '{0}'")]
    MissingField(&'static str),
    #[error("could not convert '{field}' to a number: {source}")]
    InvalidNumber {
        field: &'static str,
        source: ParseFloatError,
    },
    #[error("invalid form data: {0}")]
    Form(String),
    #[error(transparent)]
    Prediction(#[from] calorie_predictor::Error),
    #[error("prediction was canceled: {0}")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidGender => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_client_error() {
            warn!("Rejected request: {}", self);
        } else {
            error!("Request failed: {}", self);
        }

        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
