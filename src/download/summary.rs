//! Result of a finished download.

use super::download::Download;
use crate::progress::ProgressSnapshot;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// Resolved path the body was written to.
    path: PathBuf,
    /// Declared size, if the response carried one.
    total: Option<u64>,
    /// Bytes written to disk.
    transferred: u64,
    /// Time spent transferring the body.
    elapsed: Duration,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(
        download: Download,
        path: PathBuf,
        total: Option<u64>,
        transferred: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            download,
            path,
            total,
            transferred,
            elapsed,
        }
    }

    /// Get the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the path the file was written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the declared size.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Get the number of bytes written.
    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    /// Get the transfer duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Final progress of the transfer.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.transferred, self.total, self.elapsed)
    }

    /// `true` when every declared byte was received, or no size was declared.
    pub fn is_complete(&self) -> bool {
        self.snapshot().is_complete()
    }
}
