use serde::{Serialize, Deserialize};

/// Transport-level identity of the caller. The origin address is what the
/// one-vote-per-origin rule keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub ip: String,
}

// Backend-specific Rocket implementation
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for ClientInfo {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let ip = headers.get_one("X-Real-IP")
                .or_else(|| {
                    // First hop of a proxy chain.
                    headers.get_one("X-Forwarded-For")
                        .and_then(|chain| chain.split(',').next())
                })
                .map(|ip| ip.trim().to_string())
                .or_else(|| req.client_ip().map(|addr| addr.to_string()))
                .unwrap_or_else(|| "0.0.0.0".to_string());

            Outcome::Success(ClientInfo { ip })
        }
    }
}
