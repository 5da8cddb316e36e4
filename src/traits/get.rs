//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::GalleryClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier.
///
/// # Example
///
/// ```ignore
/// use catgallery::{GalleryClient, Image, Get};
///
/// let client = GalleryClient::from_env()?;
/// let image = Image::get(&client, "0XYvRd7oD".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &GalleryClient, id: Self::Id) -> Result<Self>;
}
