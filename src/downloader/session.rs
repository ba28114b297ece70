//! State of one in-flight transfer.

use crate::error::{Error, Result};
use crate::progress::ProgressSnapshot;

use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::warn;

/// Running state of a single download.
///
/// Created once the response is open, updated after every chunk and dropped
/// when the transfer ends. The declared total never changes and the byte
/// count only grows.
#[derive(Debug)]
pub struct DownloadSession {
    source: String,
    destination: PathBuf,
    chunk_size: usize,
    total: Option<u64>,
    transferred: u64,
    started: Instant,
}

impl DownloadSession {
    /// Start a session. Fails on a zero chunk size.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<PathBuf>,
        chunk_size: usize,
        total: Option<u64>,
    ) -> Result<Self> {
        check_chunk_size(chunk_size)?;
        Ok(Self {
            source: source.into(),
            destination: destination.into(),
            chunk_size,
            total,
            transferred: 0,
            started: Instant::now(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    /// Account for `len` more bytes written to the destination.
    pub fn record(&mut self, len: usize) {
        self.transferred = self.transferred.saturating_add(len as u64);
        if let Some(total) = self.total {
            if self.transferred > total {
                warn!(
                    "{} sent {} bytes but declared {}",
                    self.source, self.transferred, total
                );
            }
        }
    }

    /// Progress as of now.
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot_at(self.started.elapsed())
    }

    /// Progress as of `elapsed` after the start.
    pub fn snapshot_at(&self, elapsed: Duration) -> ProgressSnapshot {
        ProgressSnapshot::new(self.transferred, self.total, elapsed)
    }

    /// Split a received piece of body into chunks of at most `chunk_size`.
    ///
    /// An empty piece yields no chunk.
    pub fn chunks(&self, data: Bytes) -> impl Iterator<Item = Bytes> + 'static {
        split_chunks(data, self.chunk_size)
    }
}

/// Reject a zero chunk size.
pub(crate) fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::InvalidInput("chunk size must be positive".into()));
    }
    Ok(())
}

fn split_chunks(mut data: Bytes, chunk_size: usize) -> impl Iterator<Item = Bytes> {
    std::iter::from_fn(move || {
        if data.is_empty() {
            None
        } else {
            let len = chunk_size.min(data.len());
            Some(data.split_to(len))
        }
    })
}
