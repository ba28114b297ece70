//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust
//! use kgutils::downloader::DownloaderBuilder;
//! use kgutils::progress::ProgressTarget;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .chunk_size(64 * 1024)
//!     .timeout(Duration::from_secs(60))
//!     .progress(ProgressTarget::Bar)
//!     .build();
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::http::Transport;
use crate::progress::ProgressTarget;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use kgutils::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().chunk_size(4096).directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress output.
    pub fn hidden() -> Self {
        DownloaderBuilder::default().progress(ProgressTarget::Hidden)
    }

    /// Sets the directory relative destinations are resolved against.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the maximum chunk size in bytes.
    ///
    /// A zero chunk size is accepted here but rejected when a download starts.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Set where progress is reported.
    pub fn progress(mut self, progress: ProgressTarget) -> Self {
        self.config.progress = progress;
        self
    }

    /// Route requests through `proxy`.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Ignore proxies configured through the environment.
    pub fn no_proxy(mut self) -> Self {
        self.config.no_proxy = true;
        self
    }

    /// Set a timeout for each request, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Read responses through a custom [`Transport`] instead of HTTP.
    ///
    /// HTTP-specific options (headers, proxy, timeout) are then unused.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.config.transport = Some(Arc::new(transport));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use kgutils::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use kgutils::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str("kgutils/0.2").expect("Invalid UA");
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
