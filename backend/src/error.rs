use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use shared::validation::ValidationError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Vote not found")]
    NotFound,
    #[error("This address has already cast a vote")]
    DuplicateOrigin,
    #[error("Invalid admin password")]
    Unauthorized,
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::NotFound => Status::NotFound,
            ApiError::DuplicateOrigin => Status::Forbidden,
            ApiError::Unauthorized => Status::Unauthorized,
            ApiError::Storage(_) => Status::InternalServerError,
        };

        match &self {
            ApiError::Storage(e) => error!("Storage failure on {}: {}", req.uri(), e),
            e => warn!("Request to {} rejected: {}", req.uri(), e),
        }

        let body = Json(ErrorBody { error: self.to_string() });
        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
