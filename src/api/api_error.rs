use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("route not found: {0}")]
    RouteNotFound(String),
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub short: String,
    pub long: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        debug!("Responding with error: {}", self);
        let short = match self {
            ApiError::RouteNotFound(_) => "route not found",
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            short: short.to_string(),
            long: self.to_string(),
        })
    }
}
