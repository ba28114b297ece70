//! Core downloader implementation with fetch logic.
//!
//! A download runs as a single sequential loop: open the response, create the
//! destination, then for every chunk write it, account for it and redraw the
//! progress line. There is no retry and no resume; if anything fails the error
//! is returned and whatever was already written stays on disk.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kgutils::downloader::DownloaderBuilder;
//! use kgutils::download::Download;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build();
//! let download = Download::try_from("https://example.com/file1.zip")?;
//!
//! let summary = downloader.download(&download).await?;
//! println!("Wrote {} bytes to {}", summary.transferred(), summary.path().display());
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use super::session::{check_chunk_size, DownloadSession};
use super::DownloaderBuilder;
use crate::download::{Download, Summary};
use crate::error::Result;
use crate::http::{HttpTransport, Transport};
use crate::progress::{ProgressSink, ProgressSnapshot, ProgressTarget};

use futures::StreamExt;
use reqwest::header::HeaderMap;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::{fs, fs::File, io::AsyncWriteExt};
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use kgutils::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory relative destinations are resolved against.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the maximum chunk size.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Gets the progress target.
    pub fn progress(&self) -> ProgressTarget {
        self.config.progress
    }

    /// Path the download will be written to.
    pub fn resolve_destination(&self, download: &Download) -> PathBuf {
        self.config.directory.join(&download.destination)
    }

    /// Downloads a file, reporting progress to the configured target.
    pub async fn download(&self, download: &Download) -> Result<Summary> {
        let mut sink = self.config.progress.into_sink();
        self.download_with_sink(download, sink.as_mut()).await
    }

    /// Downloads a file, reporting progress to `sink`.
    pub async fn download_with_sink(
        &self,
        download: &Download,
        sink: &mut dyn ProgressSink,
    ) -> Result<Summary> {
        check_chunk_size(self.config.chunk_size)?;
        let transport = self.transport()?;
        let output = self.resolve_destination(download);

        // Open the response.
        let response = transport.fetch(&download.url).await?;
        let total = response.content_length();
        let mut session = DownloadSession::new(
            download.url.as_str(),
            output.clone(),
            self.config.chunk_size,
            total,
        )?;
        let mut progress = Progress::new(sink);
        progress.start(session.source(), total);

        // Prepare the destination directory/file.
        if let Some(output_dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating destination directory {:?}", output_dir);
            fs::create_dir_all(output_dir).await?;
        }
        debug!("Creating destination file {:?}", session.destination());
        let mut file = File::create(session.destination()).await?;

        // Download the file chunk by chunk.
        debug!("Retrieving chunks...");
        let mut body = response.into_body();
        while let Some(item) = body.next().await {
            let data = match item {
                Ok(data) => data,
                Err(e) => {
                    // Leave the bytes received so far on disk.
                    file.flush().await?;
                    return Err(e);
                }
            };
            for chunk in session.chunks(data) {
                file.write_all(&chunk).await?;
                session.record(chunk.len());
                progress.update(&session.snapshot());
            }
        }
        file.flush().await?;

        let snapshot = session.snapshot();
        progress.finish(&snapshot);
        debug!(
            "Downloaded {} bytes from {} in {:?}",
            session.transferred(),
            session.source(),
            snapshot.elapsed()
        );

        Ok(Summary::new(
            download.clone(),
            output,
            total,
            session.transferred(),
            snapshot.elapsed(),
        ))
    }

    /// Downloads a file, blocking the calling thread until it is done.
    ///
    /// The transfer runs on a current-thread runtime, so everything happens on
    /// the caller's thread. Must not be called from within an async context.
    pub fn download_blocking(&self, download: &Download) -> Result<Summary> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.download(download))
    }

    fn transport(&self) -> Result<Arc<dyn Transport>> {
        if let Some(ref transport) = self.config.transport {
            return Ok(Arc::clone(transport));
        }
        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(self.config.http_client_config())?);
        Ok(transport)
    }
}

/// Forwards progress to a sink until it fails once.
///
/// Progress output is best effort: a sink error is logged and the sink is
/// ignored for the rest of the transfer.
struct Progress<'a> {
    sink: &'a mut dyn ProgressSink,
    failed: bool,
}

impl<'a> Progress<'a> {
    fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            sink,
            failed: false,
        }
    }

    fn start(&mut self, source: &str, total: Option<u64>) {
        let result = self.sink.start(source, total);
        self.check(result);
    }

    fn update(&mut self, snapshot: &ProgressSnapshot) {
        if !self.failed {
            let result = self.sink.update(snapshot);
            self.check(result);
        }
    }

    fn finish(&mut self, snapshot: &ProgressSnapshot) {
        if !self.failed {
            let result = self.sink.finish(snapshot);
            self.check(result);
        }
    }

    fn check(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            warn!("Progress output failed, continuing without it: {}", e);
            self.failed = true;
        }
    }
}

/// Downloads `source` to `destination`, printing progress on stdout.
///
/// Without a destination the file is named after the last path segment of
/// `source` and written to the current directory. Blocks until the transfer
/// completes.
///
/// ```rust,no_run
/// use kgutils::download_file;
///
/// # fn main() -> Result<(), kgutils::Error> {
/// let summary = download_file("https://example.com/data.csv", None, 100_000)?;
/// assert!(summary.is_complete());
/// # Ok(())
/// # }
/// ```
pub fn download_file(
    source: &str,
    destination: Option<&Path>,
    chunk_size: usize,
) -> Result<Summary> {
    check_chunk_size(chunk_size)?;
    let mut download = Download::try_from(source)?;
    if let Some(destination) = destination {
        download = download.with_destination(destination);
    }

    DownloaderBuilder::new()
        .chunk_size(chunk_size)
        .build()
        .download_blocking(&download)
}
