//! Tests for the HTTP book client.
//!
//! These use a mock server, so no real network connection is required.

use tome_client::{BookClientConfig, HttpBookClient};
use tome_core::clients::BookClient;
use tome_core::error::NetworkError;
use tome_core::types::Book;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(book_url: Option<String>) -> HttpBookClient {
    HttpBookClient::new(BookClientConfig { book_url }).expect("valid config")
}

// =============================================================================
// Book Fetch Tests
// =============================================================================

mod fetch_book {
    use super::*;

    #[tokio::test]
    async fn serves_bundled_sample_without_a_configured_url() {
        let client = client_for(None);

        let book = client.fetch().await.unwrap();

        assert_eq!(book, Book::sample());
        assert_eq!(book.chapters.len(), 3);
    }

    #[tokio::test]
    async fn fetches_and_parses_book_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/book.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "id": 42,
                    "title": "Нація",
                    "author": "Марія Матіос",
                    "artwork_url": "https://example.com/artwork.jpg",
                    "media_url": "https://example.com/media.mp3",
                    "duration": 1800.0,
                    "chapters": [
                        { "id": 1, "title": "Beginning", "timecode": 0.0 },
                        { "id": 2, "title": "Middle", "timecode": 900.0 }
                    ]
                })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(Some(format!("{}/book.json", mock_server.uri())));

        let book = client.fetch().await.unwrap();

        assert_eq!(book.id, 42);
        assert_eq!(book.author, "Марія Матіос");
        assert_eq!(book.duration, 1800.0);
        assert_eq!(book.chapters[1].timecode, 900.0);
    }

    #[tokio::test]
    async fn http_error_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/book.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Book not found"))
            .mount(&mock_server)
            .await;

        let client = client_for(Some(format!("{}/book.json", mock_server.uri())));

        let err = client.fetch().await.unwrap_err();

        assert_eq!(
            err,
            NetworkError::HttpError(404, "Book not found".to_string())
        );
        assert_eq!(err.message(), "Book not found");
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/book.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(Some(format!("{}/book.json", mock_server.uri())));

        let err = client.fetch().await.unwrap_err();

        assert_eq!(err, NetworkError::InvalidData);
        assert_eq!(err.message(), "Received data is invalid");
    }

    #[tokio::test]
    async fn wrong_json_shape_is_a_parsing_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/book.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "unexpected": true })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(Some(format!("{}/book.json", mock_server.uri())));

        let err = client.fetch().await.unwrap_err();

        assert!(matches!(err, NetworkError::Parsing(_)));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_lost_connection() {
        // Nothing listens on port 1
        let client = client_for(Some("http://127.0.0.1:1/book.json".to_string()));

        let err = client.fetch().await.unwrap_err();

        assert!(matches!(err, NetworkError::HttpError(0, _)));
        assert_eq!(err.message(), "Your internet connection seems to be lost");
    }
}

// =============================================================================
// Artwork Fetch Tests
// =============================================================================

mod fetch_artwork {
    use super::*;

    #[tokio::test]
    async fn returns_artwork_bytes_and_sends_referer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artwork.jpg"))
            .and(header("referer", "https://4read.org/"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
            .mount(&mock_server)
            .await;

        let client = client_for(None);

        let artwork = client
            .fetch_artwork(&format!("{}/artwork.jpg", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(artwork, Some(vec![0xFF, 0xD8, 0xFF]));
    }

    #[tokio::test]
    async fn empty_body_means_no_artwork() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artwork.jpg"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = client_for(None);

        let artwork = client
            .fetch_artwork(&format!("{}/artwork.jpg", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(artwork, None);
    }

    #[tokio::test]
    async fn http_error_propagates_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artwork.jpg"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&mock_server)
            .await;

        let client = client_for(None);

        let err = client
            .fetch_artwork(&format!("{}/artwork.jpg", mock_server.uri()))
            .await
            .unwrap_err();

        assert_eq!(err, NetworkError::HttpError(403, "Forbidden".to_string()));
    }
}
