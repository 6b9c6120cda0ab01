use backend::{
    routes::{all_options, check_admin_password, check_voted, clear_votes, get_vote, health, list_votes, submit_vote, AppState},
    store::FileStore,
    cors::CORS,
    catchers::{bad_request, forbidden, internal_error, not_found, unauthorized, unprocessable},
};
use rocket::{routes, catchers};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATA_FILE: &str = "votes.json";

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚀 Starting voting server");

    let data_file = std::env::var("VOTE_DATA_FILE")
        .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let store = FileStore::open(&data_file)?;
    info!("📊 Data file: {}", store.path().display());

    rocket::build()
        .attach(CORS)
        .manage(AppState::new(store))
        .mount(
            "/api",
            routes![
                submit_vote,
                get_vote,
                list_votes,
                check_voted,
                check_admin_password,
                clear_votes,
                health,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                forbidden,
                unprocessable,
                not_found,
                internal_error
            ],
        )
        .launch()
        .await?;

    Ok(())
}
