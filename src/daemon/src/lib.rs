pub mod app;
pub mod client;
mod error;
pub mod handlers;
mod routes;
pub mod server;
mod state;
pub mod structs;

pub use error::ApiError;
pub use state::DaemonState;
