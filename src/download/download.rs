//! A single file to download.
//!
//! # Examples
//!
//! ```rust
//! use kgutils::download::Download;
//! use std::convert::TryFrom;
//! use std::path::Path;
//!
//! // The destination defaults to the last path segment of the URL.
//! let download = Download::try_from("https://example.com/files/report%202024.pdf")?;
//! assert_eq!(download.destination, Path::new("report 2024.pdf"));
//!
//! // Or pick it explicitly.
//! let download = download.with_destination("out/report.pdf");
//! assert_eq!(download.destination, Path::new("out/report.pdf"));
//! # Ok::<(), kgutils::Error>(())
//! ```

use crate::error::Error;

use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::convert::TryFrom;
use std::path::PathBuf;

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// Where to write the file. Relative paths are resolved against the
    /// downloader directory.
    pub destination: PathBuf,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using the [`Download::try_from`] method, the destination is
    /// automatically extracted from the URL.
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
        }
    }

    /// Replace the destination.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }
}

/// A single path component: no separators, no NUL, not `.` or `..`.
fn is_plain_filename(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

impl TryFrom<&Url> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        let segment = value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .unwrap_or_default();

        let filename = percent_decode_str(segment).decode_utf8_lossy();
        if filename.is_empty() {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" does not contain a filename",
                value
            )));
        }
        if !is_plain_filename(&filename) {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" does not end with a usable filename: {:?}",
                value, filename
            )));
        }

        Ok(Download::new(value, filename.into_owned()))
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(Error::InvalidInput("the source address is empty".into()));
        }

        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Download::try_from(&u))
    }
}
