//! Image model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::GalleryClient;
use crate::error::{ErrorKind, GalleryError, Result};
use crate::models::breed::{null_as_default, Breed};
use crate::pagination::{Page, PageSize, PaginationParams};
use crate::traits::{Get, List};

/// Number of id characters shown in a breedless image's name.
const SHORT_ID_LEN: usize = 8;

/// A cat image.
///
/// The upstream allows several breeds per image, but only the first one is
/// ever shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Upstream image id.
    pub id: String,

    /// Direct URL of the image file.
    pub url: String,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Breeds attached to the image; `null` decodes as none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub breeds: Vec<Breed>,

    /// Image to link to instead of this one, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image_id: Option<String>,
}

impl Image {
    /// The breed shown for this image, if any.
    pub fn breed(&self) -> Option<&Breed> {
        self.breeds.first()
    }

    /// Whether the image carries breed metadata.
    pub fn has_breed(&self) -> bool {
        self.breed().is_some()
    }

    /// Id to open the detail view with.
    pub fn detail_id(&self) -> &str {
        self.reference_image_id.as_deref().unwrap_or(&self.id)
    }

    /// Name shown in the gallery grid.
    pub fn display_name(&self) -> String {
        match self.breed() {
            Some(breed) => breed.name.clone(),
            None => format!("Cat #{}", self.short_id()),
        }
    }

    /// Title of the detail view.
    pub fn detail_title(&self) -> String {
        match self.breed() {
            Some(breed) => format!("{} Cat", breed.name),
            None => "Cat Details".to_string(),
        }
    }

    /// Heading of the detail view: the breed name, or a stand-in built from
    /// the full image id.
    pub fn heading(&self) -> String {
        match self.breed() {
            Some(breed) => breed.name.clone(),
            None => format!("Beautiful Cat #{}", self.id),
        }
    }

    /// One-line description for the detail view.
    pub fn summary(&self) -> String {
        match self.breed() {
            Some(breed) if !breed.description.is_empty() => breed.description.clone(),
            _ => format!("Details for cat {}", self.id),
        }
    }

    /// Pixel dimensions, e.g. "500px × 375px".
    pub fn dimensions(&self) -> String {
        format!("{}px × {}px", self.width, self.height)
    }

    fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Filters for the image search endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageSearchQuery {
    /// Only return images that carry breed metadata.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_flag"
    )]
    pub has_breeds: Option<bool>,

    /// Comma separated breed ids, e.g. "abys,beng".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_ids: Option<String>,
}

/// The upstream expects 0/1 rather than true/false.
fn serialize_flag<S: serde::Serializer>(
    flag: &Option<bool>,
    serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    match flag {
        Some(f) => serializer.serialize_u8(u8::from(*f)),
        None => serializer.serialize_none(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a search response body, which must be an array of images.
pub(crate) fn decode_images(value: Value) -> Result<Vec<Image>> {
    if !value.is_array() {
        return Err(GalleryError::MalformedResponse(format!(
            "expected an array of images, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| GalleryError::MalformedResponse(format!("invalid image in list: {e}")))
}

/// Decode a single-image response body, which must be an image object.
pub(crate) fn decode_image(value: Value) -> Result<Image> {
    if !value.is_object() {
        return Err(GalleryError::MalformedResponse(format!(
            "expected an image object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| GalleryError::MalformedResponse(format!("invalid image: {e}")))
}

#[async_trait]
impl Get for Image {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GalleryClient, id: String) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(GalleryError::InvalidId(id));
        }

        let path = format!("images/{}", urlencoding::encode(&id));

        // Any non-2xx means the image is absent, whatever the status.
        let response = match client.get(&path).await {
            Ok(response) => response,
            Err(GalleryError::ApiError { status_code, .. }) => {
                tracing::debug!(?status_code, "image lookup returned error status");
                return Err(GalleryError::NotFound {
                    entity_type: "image",
                    id,
                });
            }
            Err(e) => return Err(e),
        };

        let body = GalleryClient::read_json(response).await?;
        decode_image(body)
    }
}

#[async_trait]
impl List for Image {
    type Query = ImageSearchQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &GalleryClient,
        query: &Self::Query,
        page: u32,
        page_size: PageSize,
    ) -> Result<Page<Self>> {
        #[derive(Serialize)]
        struct RequestParams<'a> {
            #[serde(flatten)]
            query: &'a ImageSearchQuery,
            #[serde(flatten)]
            pagination: PaginationParams,
        }

        let params = RequestParams {
            query,
            pagination: PaginationParams::for_page(page, page_size),
        };

        let response = client.get_with_query("images/search", &params).await?;
        let body = GalleryClient::read_json(response).await?;
        let images = decode_images(body)?;

        Ok(Page::new(images, page, page_size))
    }
}

/// Fetch one page of images with no search filters.
///
/// # Errors
///
/// Returns an upstream error on transport failure or non-2xx status, and
/// [`GalleryError::MalformedResponse`] when the body is not an image array.
pub async fn list_page(
    client: &GalleryClient,
    page: u32,
    page_size: PageSize,
) -> Result<Page<Image>> {
    Image::list_page(client, &ImageSearchQuery::default(), page, page_size).await
}

/// Fetch a single image by id.
///
/// # Errors
///
/// Returns [`GalleryError::NotFound`] for any non-2xx response, an upstream
/// error on transport failure, and [`GalleryError::MalformedResponse`] when
/// the body is not an image object.
pub async fn get_image(client: &GalleryClient, id: &str) -> Result<Image> {
    Image::get(client, id.to_string()).await
}

/// Fetch a single image, treating every failure as absence.
///
/// Failures are logged and reported as `None`, which callers render as an
/// empty state.
pub async fn find_image(client: &GalleryClient, id: &str) -> Option<Image> {
    match get_image(client, id).await {
        Ok(image) => Some(image),
        Err(e) => {
            match e.kind() {
                ErrorKind::NotFound => tracing::info!(id, "image not found"),
                ErrorKind::Malformed => tracing::warn!(id, error = %e, "malformed image response"),
                ErrorKind::Upstream | ErrorKind::Usage => {
                    tracing::warn!(id, error = %e, "image lookup failed")
                }
            }
            None
        }
    }
}
