//! Downloader module containing the core downloader, its builder and configuration.
//!
//! - `downloader` - [`Downloader`], the streaming download loop
//! - `builder` - [`DownloaderBuilder`] for configuring a downloader
//! - `config` - [`DownloaderConfig`] and its defaults
//! - `session` - [`DownloadSession`], the running state of one transfer
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use kgutils::downloader::DownloaderBuilder;
//! use kgutils::download::Download;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build();
//! let download = Download::try_from("https://example.com/file1.zip")?;
//! let summary = downloader.download(&download).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage
//!
//! ```rust,no_run
//! use kgutils::downloader::DownloaderBuilder;
//! use kgutils::download::Download;
//! use std::convert::TryFrom;
//!
//! # fn example() -> Result<(), kgutils::Error> {
//! let downloader = DownloaderBuilder::hidden().chunk_size(8192).build();
//! let download = Download::try_from("https://example.com/file1.zip")?.with_destination("a.zip");
//! let summary = downloader.download_blocking(&download)?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod session;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, DEFAULT_CHUNK_SIZE};
pub use downloader::{download_file, Downloader};
pub use session::DownloadSession;
