//! Configuration structures and defaults for the downloader.

use crate::http::{HttpClientConfig, Transport};
use crate::progress::ProgressTarget;

use reqwest::header::HeaderMap;
use reqwest::Proxy;
use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default number of bytes handled per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory relative destinations are resolved against.
    pub directory: PathBuf,
    /// Maximum number of bytes written and reported at once.
    pub chunk_size: usize,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy.
    pub proxy: Option<Proxy>,
    /// Ignore proxies configured through the environment.
    pub no_proxy: bool,
    /// Request timeout, enforced by the HTTP client.
    pub timeout: Option<Duration>,
    /// Where progress is reported.
    pub progress: ProgressTarget,
    /// Transport override. `None` builds an HTTP transport per download.
    pub transport: Option<Arc<dyn Transport>>,
}

impl DownloaderConfig {
    /// HTTP client settings derived from this configuration.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            proxy: self.proxy.clone(),
            headers: self.headers.clone(),
            timeout: self.timeout,
            no_proxy: self.no_proxy,
        }
    }
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("chunk_size", &self.chunk_size)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("no_proxy", &self.no_proxy)
            .field("timeout", &self.timeout)
            .field("progress", &self.progress)
            .field("transport", &self.transport.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            headers: None,
            proxy: None,
            no_proxy: false,
            timeout: None,
            progress: ProgressTarget::default(),
            transport: None,
        }
    }
}
