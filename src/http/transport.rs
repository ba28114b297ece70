//! The network seam of the downloader.
//!
//! [`Transport`] opens a streaming response for a URL and reports its declared
//! length. [`HttpTransport`] is the real implementation on top of the
//! middleware client; tests and embedders can plug in their own.

use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::utils::content_length::content_length_from_headers;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use tracing::debug;

/// Body of a response, delivered as a stream of byte chunks.
pub type BodyStream = BoxStream<'static, Result<Bytes>>;

/// An opened response: its declared length and its body.
pub struct TransportResponse {
    content_length: Option<u64>,
    body: BodyStream,
}

impl TransportResponse {
    /// Create a new [`TransportResponse`].
    pub fn new(content_length: Option<u64>, body: BodyStream) -> Self {
        Self {
            content_length,
            body,
        }
    }

    /// Create a response whose body yields the given chunks in order.
    pub fn from_chunks(content_length: Option<u64>, chunks: Vec<Bytes>) -> Self {
        Self::new(content_length, stream::iter(chunks.into_iter().map(Ok)).boxed())
    }

    /// Declared body length, if the response carried one.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Take the body stream.
    pub fn into_body(self) -> BodyStream {
        self.body
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Opens streaming responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET-style request for `url`.
    ///
    /// Connection failures and error statuses are reported here; failures
    /// while reading the body come through the returned stream.
    async fn fetch(&self, url: &Url) -> Result<TransportResponse>;
}

/// [`Transport`] backed by the crate's HTTP client.
#[derive(Clone)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build the client from `config`.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config)?,
        })
    }

    /// Use an existing client.
    pub fn from_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse> {
        debug!("Fetching {}", url);
        let res = self.client.get(url.clone()).send().await?;
        let res = res.error_for_status()?;

        let content_length = content_length_from_headers(res.headers());
        debug!("Response {} with content length {:?}", res.status(), content_length);

        let body = res
            .bytes_stream()
            .map(|item| item.map_err(Error::from))
            .boxed();
        Ok(TransportResponse::new(content_length, body))
    }
}
