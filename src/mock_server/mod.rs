//! Mock Cat API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Cat API
//! for integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server serves a whole ordered data set, so a
//! gallery can be paged through until it runs out.
//!
//! # Example
//!
//! ```ignore
//! use catgallery::mock_server::MockServer;
//! use catgallery::{GalleryClient, Image, Get};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = GalleryClient::new("test-key", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let image = Image::get(&client, "0XYvRd7oD".to_string()).await.unwrap();
//!     assert_eq!(image.display_name(), "Abyssinian");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
