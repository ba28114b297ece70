//! Download requests and their results.
//!
//! - [`download`] - the [`Download`] struct: source URL and destination
//! - [`summary`] - the [`Summary`] returned once a transfer completes
//!
//! # Examples
//!
//! ```rust
//! use kgutils::download::Download;
//! use std::convert::TryFrom;
//!
//! let download = Download::try_from("https://example.com/file.zip")?;
//! println!("Saving to: {}", download.destination.display());
//! # Ok::<(), kgutils::Error>(())
//! ```

pub mod download;
pub mod summary;

pub use download::Download;
pub use summary::Summary;
