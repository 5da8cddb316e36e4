//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Cat API server.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Image;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Images in search order.
    pub images: Vec<Image>,

    /// Optional API key. If set, requests must send it as `x-api-key`.
    pub required_api_key: Option<String>,

    /// When set, the search endpoint answers with this status instead of data.
    pub search_failure: Option<u16>,

    /// Number of search requests served, failures included.
    pub search_requests: usize,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an image to the end of the search order.
    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    /// Add several images to the end of the search order.
    pub fn with_images(mut self, images: impl IntoIterator<Item = Image>) -> Self {
        self.images.extend(images);
        self
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, key: &str) -> Self {
        self.required_api_key = Some(key.to_string());
        self
    }

    /// Make the search endpoint fail with the given status.
    pub fn with_search_failure(mut self, status: u16) -> Self {
        self.search_failure = Some(status);
        self
    }

    /// Get an image by id.
    pub fn get_image(&self, id: &str) -> Option<&Image> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Images on a 1-indexed page.
    ///
    /// `breeds_only` keeps images with breed metadata. A non-empty
    /// `breed_ids` keeps images carrying one of those breed ids. Filters
    /// apply before paging.
    pub fn search_page(
        &self,
        page: u32,
        limit: u32,
        breeds_only: bool,
        breed_ids: &[&str],
    ) -> Vec<&Image> {
        let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        self.images
            .iter()
            .filter(|i| !breeds_only || i.has_breed())
            .filter(|i| {
                breed_ids.is_empty()
                    || i.breeds
                        .iter()
                        .any(|b| b.id.as_deref().is_some_and(|id| breed_ids.contains(&id)))
            })
            .skip(start)
            .take(limit as usize)
            .collect()
    }

    /// Whether a request carrying `key` is allowed.
    pub fn accepts_key(&self, key: Option<&str>) -> bool {
        match &self.required_api_key {
            Some(required) => key == Some(required.as_str()),
            None => true,
        }
    }
}
