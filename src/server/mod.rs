mod bearer;
pub mod class_average;
pub mod config;
mod error;
mod http_layers;
pub mod server;
pub mod state;

pub use bearer::BearerAuth;
pub use config::ServerConfig;
pub use error::ApiError;
pub use http_layers::*;
pub use server::{make_app, run_server};
