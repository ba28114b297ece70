//! Directory listings and line counting.

use crate::error::{Error, Result};

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Buffer size used by [`StreamingLineCounter`].
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Count the entries of `dir` whose file name ends with `suffix`.
///
/// Only the direct children of `dir` are considered. The match is a plain
/// string suffix match on the entry name, so `"txt"` matches both `a.txt` and
/// `notxt`.
pub fn count_files_with_extension(dir: &Path, suffix: &str) -> Result<usize> {
    let mut total = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            total += 1;
        }
    }
    debug!("{} entries ending with {:?} in {:?}", total, suffix, dir);
    Ok(total)
}

/// Something able to count the lines of a file.
///
/// A line is terminated by `\n`; a trailing fragment without a terminator is
/// not counted, matching `wc -l`.
pub trait LineCounter {
    /// Count the line terminators of the file at `path`.
    fn count(&self, path: &Path) -> Result<u64>;
}

/// Counts lines by streaming the file through a buffered reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingLineCounter;

impl LineCounter for StreamingLineCounter {
    fn count(&self, path: &Path) -> Result<u64> {
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, File::open(path)?);
        let mut lines = 0u64;
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
            let consumed = buf.len();
            reader.consume(consumed);
        }
        Ok(lines)
    }
}

/// Delegates to the external `wc -l` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct WcLineCounter;

impl LineCounter for WcLineCounter {
    fn count(&self, path: &Path) -> Result<u64> {
        let output = Command::new("wc").arg("-l").arg(path).output()?;
        if !output.status.success() {
            return Err(Error::Internal(format!(
                "wc -l {:?} failed: {}",
                path,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .split_whitespace()
            .next()
            .and_then(|count| count.parse::<u64>().ok())
            .ok_or_else(|| Error::Internal(format!("unexpected wc output: {:?}", stdout.trim())))
    }
}

/// Count the lines of a file with the [`StreamingLineCounter`].
pub fn count_lines(path: &Path) -> Result<u64> {
    StreamingLineCounter.count(path)
}
