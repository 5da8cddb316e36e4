//! Cat gallery client library.
//!
//! A Rust library for browsing The Cat API: page through image search
//! results into a growing gallery, and fetch single images for a detail
//! view. Operations are defined as traits (Get, List) that entity types
//! implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use catgallery::{GalleryClient, Image, List, PageSize};
//!
//! #[tokio::main]
//! async fn main() -> catgallery::Result<()> {
//!     // Create client from environment variables
//!     let client = GalleryClient::from_env()?;
//!
//!     // Load the first page of the gallery
//!     let mut gallery = Image::load_first(&client, &Default::default(), PageSize::DEFAULT).await?;
//!
//!     // Scroll: fetch and merge the next page
//!     if gallery.next_page().is_some() {
//!         Image::load_more(&client, &Default::default(), &mut gallery).await?;
//!     }
//!     println!("{} images loaded", gallery.len());
//!
//!     // Open a detail view; absence is not an error
//!     match catgallery::find_image(&client, "0XYvRd7oD").await {
//!         Some(image) => println!("{}", image.detail_title()),
//!         None => println!("not found"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch pages of entities and grow a [`Collection`]
//! - [`append_page`] - The pure merge behind every collection update
//!
//! The library keeps no state between calls: the current page and the
//! exhausted flag live in the caller's [`Collection`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `CAT_API_KEY` (required) - Your Cat API key, sent as `x-api-key`
//! - `CAT_API_URL` (optional) - Base URL (defaults to `https://api.thecatapi.com/v1`)

pub mod cli;
mod client;
mod error;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
mod output;
mod pagination;
mod traits;

// Re-export core types
pub use client::GalleryClient;
pub use error::{ErrorKind, GalleryError, Result};
pub use pagination::{append_page, Collection, Page, PageSize, PaginationParams};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{Breed, Image, ImageSearchQuery, Rating, Weight, RATING_GLYPH};

// Re-export convenience functions
pub use models::{find_image, get_image, list_page};

pub use output::{rating_display, PrettyPrint};
