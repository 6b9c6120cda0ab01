pub mod models;
pub mod validation;
pub mod client_info;

pub use models::*;
pub use validation::*;
pub use client_info::ClientInfo;
