pub mod processor;
pub mod routes;
pub mod store;
pub mod cors;
pub mod error;
pub mod catchers;
pub use shared::client_info;
pub use shared::{models::*, validation::*, client_info::*};

#[cfg(test)]
mod tests;
