use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Missing required fields".into(),
        status: 400,
    })
}

#[catch(401)]
pub fn unauthorized(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Invalid admin password.".into(),
        status: 401,
    })
}

#[catch(403)]
pub fn forbidden(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "This address has already cast a vote.".into(),
        status: 403,
    })
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Malformed request body.".into(),
        status: 422,
    })
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "The requested resource was not found.".into(),
        status: 404,
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "An internal server error occurred.".into(),
        status: 500,
    })
}
