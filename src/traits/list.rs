//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::GalleryClient;
use crate::error::Result;
use crate::pagination::{Collection, Page, PageSize};

/// List entities with page-number pagination.
///
/// Implement this trait for entity types that can be listed with
/// optional filtering. The provided methods drive a caller-owned
/// [`Collection`] one page at a time.
///
/// # Example
///
/// ```ignore
/// use catgallery::{GalleryClient, Image, List, PageSize};
///
/// let client = GalleryClient::from_env()?;
///
/// // Fetch a single page
/// let page = Image::list_page(&client, &Default::default(), 1, PageSize::DEFAULT).await?;
///
/// // Or keep a growing collection
/// let mut gallery = Image::load_first(&client, &Default::default(), PageSize::DEFAULT).await?;
/// Image::load_more(&client, &Default::default(), &mut gallery).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Query parameters for filtering.
    type Query: Default + Send + Sync;

    /// List entities matching the query (single page).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    async fn list_page(
        client: &GalleryClient,
        query: &Self::Query,
        page: u32,
        page_size: PageSize,
    ) -> Result<Page<Self>>;

    /// Fetch page 1 and start a collection from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the first page cannot be fetched.
    async fn load_first(
        client: &GalleryClient,
        query: &Self::Query,
        page_size: PageSize,
    ) -> Result<Collection<Self>> {
        let first = Self::list_page(client, query, 1, page_size).await?;
        Ok(Collection::new(first.items, page_size))
    }

    /// Fetch the collection's next page and merge it in.
    ///
    /// Returns the number of items added. An exhausted collection is left
    /// alone and no request is made. On error the collection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the page request fails or the response is malformed.
    async fn load_more(
        client: &GalleryClient,
        query: &Self::Query,
        collection: &mut Collection<Self>,
    ) -> Result<usize> {
        let Some(next) = collection.next_page() else {
            tracing::debug!("collection exhausted, not fetching");
            return Ok(0);
        };

        let page = Self::list_page(client, query, next, collection.page_size()).await?;
        let added = page.len();
        collection.absorb(page.items);

        tracing::debug!(
            page = collection.page(),
            added,
            total = collection.len(),
            exhausted = collection.is_exhausted(),
            "loaded page"
        );
        Ok(added)
    }
}
