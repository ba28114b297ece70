//! kgutils is a small collection of everyday helpers: a streaming HTTP
//! downloader with a live progress line, human-readable byte and duration
//! formatters, slugs, spreadsheet column labels, file and line counting, and
//! colored console output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use kgutils::{download::Download, downloader::DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let reqwest_rs = "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip";
//! let download = Download::try_from(reqwest_rs)?;
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .build();
//! let summary = downloader.download(&download).await?;
//! println!("{} bytes", summary.transferred());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - the `Download` request and its `Summary`
//! - [`downloader`] - the `Downloader`, its builder and the per-transfer session
//! - [`error`] - centralized error handling with the `Error` enum
//! - [`http`] - HTTP client and the `Transport` seam
//! - [`progress`] - progress snapshots, line rendering and sinks
//! - [`utils`] - formatters and standalone helpers

pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod utils;

pub use download::{Download, Summary};
pub use downloader::{download_file, DownloadSession, Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig, HttpTransport, Transport, TransportResponse};
pub use progress::{ProgressSink, ProgressSnapshot, ProgressTarget};
pub use utils::{
    colorize, column_letters_to_number, column_number_to_letters, count_files_with_extension,
    count_lines, cprint, format_bytes, format_duration, format_size, slugify, Color, LineCounter,
};
