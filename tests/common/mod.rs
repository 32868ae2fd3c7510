//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient, TEACHER_TOKEN, CLASSROOM_MATH};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_class_average() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.class_average(CLASSROOM_MATH, Some(TEACHER_TOKEN)).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```
#![allow(dead_code)]

mod client;
mod constants;
mod server;

// Public API - this is what tests import
pub use backends::{AnalyticsBackend, RecordsBackend};
pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;
