//! HTTP book client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, info};

use tome_core::clients::BookClient;
use tome_core::error::NetworkError;
use tome_core::types::Book;

use crate::Result;

// The artwork host rejects requests without a site referer.
const ARTWORK_REFERER: &str = "https://4read.org/";

/// Configuration for [`HttpBookClient`]
#[derive(Debug, Clone, Default)]
pub struct BookClientConfig {
    /// URL of a book metadata JSON document
    ///
    /// When unset, [`HttpBookClient::fetch`] serves the bundled sample
    /// book.
    pub book_url: Option<String>,
}

/// Live book/artwork client over HTTP
///
/// Error mapping follows the alert surface's expectations: a response the
/// server never produced (connect failure, timeout) becomes
/// `HttpError(0, ..)` so the user sees the lost-connection message, a
/// non-2xx status carries the server's body text, and a body that is not
/// the expected JSON shape splits into `InvalidData` (not JSON at all)
/// versus `Parsing` (JSON of the wrong shape).
pub struct HttpBookClient {
    http: Client,
    book_url: Option<String>,
}

impl HttpBookClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BookClientConfig) -> Result<Self> {
        if let Some(url) = &config.book_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(NetworkError::Other(
                    "Book URL must start with http:// or https://".to_string(),
                ));
            }
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("TomePlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| NetworkError::Other(err.to_string()))?;

        Ok(Self {
            http,
            book_url: config.book_url,
        })
    }
}

#[async_trait]
impl BookClient for HttpBookClient {
    async fn fetch(&self) -> Result<Book> {
        let Some(url) = &self.book_url else {
            debug!("no book URL configured, serving bundled sample");
            return Ok(Book::sample());
        };

        debug!(url = %url, "fetching book metadata");

        let response = self.http.get(url).send().await.map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError(i32::from(status.as_u16()), message));
        }

        let text = response
            .text()
            .await
            .map_err(|err| NetworkError::Other(err.to_string()))?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|_| NetworkError::InvalidData)?;
        let book: Book =
            serde_json::from_value(value).map_err(|err| NetworkError::Parsing(err.to_string()))?;

        info!(book = book.id, title = %book.title, "book metadata fetched");

        Ok(book)
    }

    async fn fetch_artwork(&self, url: &str) -> Result<Option<Vec<u8>>> {
        debug!(url = %url, "fetching artwork");

        let response = self
            .http
            .get(url)
            .header(header::REFERER, ARTWORK_REFERER)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError(i32::from(status.as_u16()), message));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| NetworkError::Other(err.to_string()))?;

        if bytes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(bytes.to_vec()))
        }
    }
}

fn map_request_error(err: reqwest::Error) -> NetworkError {
    if err.is_connect() || err.is_timeout() {
        NetworkError::HttpError(0, err.to_string())
    } else {
        NetworkError::Other(err.to_string())
    }
}
