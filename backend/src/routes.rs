use rocket::{State, get, post, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::{models::*, client_info::ClientInfo};
use crate::{error::ApiError, processor::VoteProcessor, store::FileStore};

pub struct AppState {
    pub store: FileStore,
}

impl AppState {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }
}

#[instrument(skip(state, request), fields(origin = %client.ip))]
#[post("/vote", format = "json", data = "<request>")]
pub async fn submit_vote(
    state: &State<AppState>,
    request: Json<SubmitVoteRequest>,
    client: ClientInfo,
) -> Result<Json<SubmitVoteResponse>, ApiError> {
    let request = request.into_inner();
    debug!("Ballot submission for voter {}", request.voter_id);

    let outcome = VoteProcessor::submit_vote(
        &state.store,
        &request.voter_id,
        request.selections,
        &client.ip,
    )?;

    Ok(Json(SubmitVoteResponse {
        success: true,
        status: outcome,
        message: outcome.message().to_string(),
    }))
}

#[get("/vote/<voter_id>")]
pub async fn get_vote(
    state: &State<AppState>,
    voter_id: &str,
) -> Result<Json<VoteResponse>, ApiError> {
    let vote = VoteProcessor::get_vote(&state.store, voter_id)?;
    Ok(Json(VoteResponse { success: true, vote }))
}

#[get("/votes")]
pub async fn list_votes(state: &State<AppState>) -> Result<Json<VoteListResponse>, ApiError> {
    let votes = VoteProcessor::list_votes(&state.store)?;
    Ok(Json(VoteListResponse { success: true, votes }))
}

#[post("/check-voted", format = "json", data = "<request>")]
pub async fn check_voted(
    state: &State<AppState>,
    request: Json<CheckVotedRequest>,
) -> Result<Json<CheckVotedResponse>, ApiError> {
    let has_voted = VoteProcessor::has_voted(&state.store, &request.voter_id)?;
    Ok(Json(CheckVotedResponse { success: true, has_voted }))
}

#[post("/admin/check-password", format = "json", data = "<request>")]
pub async fn check_admin_password(
    state: &State<AppState>,
    request: Json<AdminPasswordRequest>,
) -> Result<Json<CheckPasswordResponse>, ApiError> {
    let is_valid = VoteProcessor::check_admin_password(&state.store, &request.password)?;
    Ok(Json(CheckPasswordResponse { success: true, is_valid }))
}

#[instrument(skip(state, request))]
#[post("/admin/clear-votes", format = "json", data = "<request>")]
pub async fn clear_votes(
    state: &State<AppState>,
    request: Json<AdminPasswordRequest>,
) -> Result<Json<ClearVotesResponse>, ApiError> {
    let cleared = VoteProcessor::clear_votes(&state.store, &request.password)?;
    Ok(Json(ClearVotesResponse {
        success: true,
        message: "All votes cleared".into(),
        cleared,
    }))
}

#[get("/health")]
pub async fn health() -> Status {
    Status::Ok
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
