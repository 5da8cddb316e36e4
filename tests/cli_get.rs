//! Execution tests for single-image lookups.
//!
//! Uses wiremock to mock the Cat API and test actual execution flow.

use catgallery::{find_image, get_image, ErrorKind, GalleryClient, GalleryError, Get, Image};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn abyssinian_json() -> serde_json::Value {
    serde_json::json!({
        "id": "0XYvRd7oD",
        "url": "https://cdn2.thecatapi.com/images/0XYvRd7oD.jpg",
        "width": 1204,
        "height": 1445,
        "breeds": [{
            "id": "abys",
            "name": "Abyssinian",
            "description": "The Abyssinian is easy to care for.",
            "origin": "Egypt",
            "temperament": "Active, Energetic, Independent",
            "life_span": "14 - 15",
            "weight": { "metric": "3 - 5", "imperial": "7  -  10" },
            "adaptability": 5,
            "affection_level": 5,
            "child_friendly": 3,
            "energy_level": 5,
            "intelligence": 5,
            "wikipedia_url": "https://en.wikipedia.org/wiki/Abyssinian_(cat)"
        }]
    })
}

#[tokio::test]
async fn test_get_image_sends_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/0XYvRd7oD"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(abyssinian_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let image = Image::get(&client, "0XYvRd7oD".to_string()).await.unwrap();

    assert_eq!(image.display_name(), "Abyssinian");
    assert_eq!(image.breed().unwrap().origin, "Egypt");
    assert_eq!(image.breed().unwrap().adaptability.unwrap().get(), 5);
}

#[tokio::test]
async fn test_get_image_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/unknown-id"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let err = get_image(&client, "unknown-id").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(
        err,
        GalleryError::NotFound { entity_type: "image", ref id } if id == "unknown-id"
    ));

    // The fallback form reports absence without an error
    assert!(find_image(&client, "unknown-id").await.is_none());
}

#[tokio::test]
async fn test_get_image_server_error_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/flaky"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let err = get_image(&client, "flaky").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_get_image_transport_failure_is_upstream() {
    // Nothing listens on port 9 on loopback
    let client = GalleryClient::new("test-key", "http://127.0.0.1:9").unwrap();

    let err = get_image(&client, "abc").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(matches!(err, GalleryError::HttpError(_)));

    assert!(find_image(&client, "abc").await.is_none());
}

#[tokio::test]
async fn test_get_image_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/weird"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["not", "an", "image"])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();

    let err = get_image(&client, "weird").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);

    let err = get_image(&client, "html").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_get_image_empty_id_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let err = get_image(&client, "  ").await.unwrap_err();

    assert!(matches!(err, GalleryError::InvalidId(_)));
}

#[tokio::test]
async fn test_get_image_clamps_out_of_range_rating() {
    let mock_server = MockServer::start().await;

    let mut body = abyssinian_json();
    body["breeds"][0]["adaptability"] = serde_json::json!(7);
    body["breeds"][0]["intelligence"] = serde_json::json!(0);

    Mock::given(method("GET"))
        .and(path("/images/0XYvRd7oD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = GalleryClient::new("test-key", &mock_server.uri()).unwrap();
    let image = get_image(&client, "0XYvRd7oD").await.unwrap();
    let breed = image.breed().unwrap();

    assert_eq!(breed.adaptability.unwrap().get(), 5);
    assert_eq!(breed.intelligence.unwrap().get(), 1);
}
