//! HTTP module containing HTTP client functionality.
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`transport`] - the [`Transport`] trait the downloader reads through, and
//!   its reqwest-backed implementation [`HttpTransport`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use kgutils::http::{HttpClientConfig, HttpTransport, Transport};
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(HttpClientConfig::default())?;
//! let response = transport.fetch(&Url::parse("https://example.com/file.zip")?).await?;
//! println!("Content length: {:?}", response.content_length());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod transport;

pub use client::{create_http_client, HttpClientConfig};
pub use transport::{BodyStream, HttpTransport, Transport, TransportResponse};
