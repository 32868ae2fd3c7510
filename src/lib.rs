//! Classboard Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod aggregate;
pub mod analytics_store;
pub mod config;
pub mod progress_store;
pub mod roles;
pub mod server;

// Re-export commonly used types for convenience
pub use analytics_store::{AnalyticsStore, HttpAnalyticsStore};
pub use progress_store::{ProgressStore, RestProgressStore};
pub use roles::{Capability, Role};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
