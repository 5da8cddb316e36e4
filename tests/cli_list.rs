//! Execution tests for listing and paging images.
//!
//! Uses wiremock to mock the Cat API and test actual execution flow.

use catgallery::{
    list_page, ErrorKind, GalleryClient, GalleryError, Image, ImageSearchQuery, List, PageSize,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn images_json(prefix: &str, count: usize) -> serde_json::Value {
    let images: Vec<serde_json::Value> = (0..count)
        .map(|n| {
            serde_json::json!({
                "id": format!("{prefix}{n}"),
                "url": format!("https://cdn2.thecatapi.com/images/{prefix}{n}.jpg"),
                "width": 500,
                "height": 400
            })
        })
        .collect();
    serde_json::Value::Array(images)
}

fn size(n: u32) -> PageSize {
    PageSize::new(n).unwrap()
}

#[tokio::test]
async fn test_list_images_returns_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("a", 10)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let page = list_page(&client, 1, PageSize::DEFAULT).await.unwrap();

    assert_eq!(page.len(), 10);
    assert_eq!(page.page, 1);
    assert!(!page.exhausted);
    assert_eq!(page.items[0].id, "a0");
}

#[tokio::test]
async fn test_list_images_short_page_is_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("z", 3)))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let page = list_page(&client, 4, size(10)).await.unwrap();

    assert_eq!(page.len(), 3);
    assert!(page.exhausted);
}

#[tokio::test]
async fn test_list_images_empty_array_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let page = list_page(&client, 9, size(10)).await.unwrap();

    assert!(page.is_empty());
    assert!(page.exhausted);
}

#[tokio::test]
async fn test_list_images_non_2xx_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "invalid api key" })),
        )
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("bad-key", &mock_server.uri()).unwrap();
    let err = list_page(&client, 1, size(10)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn test_list_images_object_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "something odd" })),
        )
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let err = list_page(&client, 1, size(10)).await.unwrap_err();

    // Must not be coerced into an empty page
    assert!(matches!(err, GalleryError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_list_images_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("has_breeds", "1"))
        .and(query_param("breed_ids", "beng"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("b", 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let query = ImageSearchQuery {
        has_breeds: Some(true),
        breed_ids: Some("beng".to_string()),
    };
    let page = Image::list_page(&client, &query, 2, size(5)).await.unwrap();

    assert_eq!(page.len(), 5);
}

#[tokio::test]
async fn test_load_more_appends_and_advances() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("p1-", 2)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("p2-", 2)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("p3-", 1)))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let query = ImageSearchQuery::default();

    let mut gallery = Image::load_first(&client, &query, size(2)).await.unwrap();
    assert_eq!(gallery.page(), 1);
    assert_eq!(gallery.len(), 2);

    assert_eq!(Image::load_more(&client, &query, &mut gallery).await.unwrap(), 2);
    assert_eq!(gallery.page(), 2);
    assert!(!gallery.is_exhausted());

    assert_eq!(Image::load_more(&client, &query, &mut gallery).await.unwrap(), 1);
    assert_eq!(gallery.page(), 3);
    assert!(gallery.is_exhausted());

    let ids: Vec<&str> = gallery.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["p1-0", "p1-1", "p2-0", "p2-1", "p3-0"]);
}

#[tokio::test]
async fn test_load_more_when_exhausted_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("only", 3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let query = ImageSearchQuery::default();

    let mut gallery = Image::load_first(&client, &query, size(10)).await.unwrap();
    assert!(gallery.is_exhausted());

    assert_eq!(Image::load_more(&client, &query, &mut gallery).await.unwrap(), 0);
    assert_eq!(gallery.page(), 1);
    assert_eq!(gallery.len(), 3);
}

#[tokio::test]
async fn test_load_more_failure_leaves_collection_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json("ok", 2)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let query = ImageSearchQuery::default();

    let mut gallery = Image::load_first(&client, &query, size(2)).await.unwrap();
    let err = Image::load_more(&client, &query, &mut gallery).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(gallery.page(), 1);
    assert_eq!(gallery.len(), 2);
    assert!(!gallery.is_exhausted());
    assert_eq!(gallery.next_page(), Some(2));
}

#[tokio::test]
async fn test_list_images_tolerates_null_breeds() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        { "id": "a", "url": "https://example.com/a.jpg", "width": 1, "height": 1, "breeds": [] },
        { "id": "b", "url": "https://example.com/b.jpg", "width": 1, "height": 1, "breeds": null },
        {
            "id": "c", "url": "https://example.com/c.jpg", "width": 1, "height": 1,
            "breeds": [{ "name": "Bengal", "description": null, "origin": null }]
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/images/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let page = list_page(&client, 1, size(3)).await.unwrap();

    assert_eq!(page.len(), 3);
    assert!(!page.items[1].has_breed());
    assert_eq!(page.items[2].display_name(), "Bengal");
}
