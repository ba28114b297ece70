//! Progress sinks.
//!
//! A [`ProgressSink`] receives the lifecycle of one transfer: a header when it
//! starts, a snapshot after every chunk, and a final snapshot on success. Sinks
//! differ in how they draw:
//!
//! - [`RedrawSink`] overwrites a single line in place with a carriage return.
//! - [`AppendSink`] appends one line per update, for outputs that cannot move
//!   the cursor back (files, pipes).
//! - [`BarSink`] hands the rendered line to an indicatif progress bar, which
//!   takes care of terminal detection and redraw throttling.
//!
//! # Examples
//!
//! ```rust
//! use kgutils::progress::{ProgressSink, ProgressSnapshot, RedrawSink};
//! use std::time::Duration;
//!
//! let mut sink = RedrawSink::new(Vec::new());
//! sink.start("http://example.com/a.bin", Some(4)).unwrap();
//! sink.update(&ProgressSnapshot::new(4, Some(4), Duration::from_secs(1))).unwrap();
//! let out = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(out.contains("\r  100.00% |"));
//! ```

use crate::progress::{LineStyle, ProgressSnapshot};

use indicatif::{ProgressBar, ProgressDrawTarget};
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// Receives progress for a single transfer.
///
/// Errors returned by a sink do not abort the transfer: the downloader logs
/// the first one and stops reporting to that sink.
pub trait ProgressSink: Send {
    /// Called once, before the first chunk.
    fn start(&mut self, source: &str, total: Option<u64>) -> io::Result<()>;

    /// Called after every non-empty chunk.
    fn update(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()>;

    /// Called once the transfer has completed successfully.
    ///
    /// Not called on failure, so the last drawn line is left as-is.
    fn finish(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()>;

    /// Whether the sink redraws a single line in place.
    fn supports_redraw(&self) -> bool;
}

/// Redraws the progress line in place using carriage returns.
#[derive(Debug)]
pub struct RedrawSink<W> {
    writer: W,
    style: LineStyle,
    drawn: bool,
}

impl<W: Write + Send> RedrawSink<W> {
    /// Create a new [`RedrawSink`] with the default [`LineStyle`].
    pub fn new(writer: W) -> Self {
        Self::with_style(writer, LineStyle::default())
    }

    /// Create a new [`RedrawSink`] with a custom [`LineStyle`].
    pub fn with_style(writer: W, style: LineStyle) -> Self {
        Self {
            writer,
            style,
            drawn: false,
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ProgressSink for RedrawSink<W> {
    fn start(&mut self, source: &str, total: Option<u64>) -> io::Result<()> {
        writeln!(self.writer, "{}", self.style.render_header(source, total))?;
        self.writer.flush()
    }

    fn update(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()> {
        write!(self.writer, "\r{}", self.style.render_line(snapshot))?;
        self.drawn = true;
        self.writer.flush()
    }

    fn finish(&mut self, _snapshot: &ProgressSnapshot) -> io::Result<()> {
        if self.drawn {
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    fn supports_redraw(&self) -> bool {
        true
    }
}

/// Appends one progress line per update.
#[derive(Debug)]
pub struct AppendSink<W> {
    writer: W,
    style: LineStyle,
}

impl<W: Write + Send> AppendSink<W> {
    /// Create a new [`AppendSink`] with the default [`LineStyle`].
    pub fn new(writer: W) -> Self {
        Self::with_style(writer, LineStyle::default())
    }

    /// Create a new [`AppendSink`] with a custom [`LineStyle`].
    pub fn with_style(writer: W, style: LineStyle) -> Self {
        Self { writer, style }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ProgressSink for AppendSink<W> {
    fn start(&mut self, source: &str, total: Option<u64>) -> io::Result<()> {
        writeln!(self.writer, "{}", self.style.render_header(source, total))
    }

    fn update(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()> {
        writeln!(self.writer, "{}", self.style.render_line(snapshot))
    }

    fn finish(&mut self, _snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.writer.flush()
    }

    fn supports_redraw(&self) -> bool {
        false
    }
}

/// Shows the progress line through an indicatif [`ProgressBar`] on stdout.
pub struct BarSink {
    bar: ProgressBar,
    style: LineStyle,
}

impl fmt::Debug for BarSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarSink")
            .field("hidden", &self.bar.is_hidden())
            .field("style", &self.style)
            .finish()
    }
}

impl Default for BarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl BarSink {
    /// Create a new [`BarSink`] drawing to stdout.
    pub fn new() -> Self {
        let style = LineStyle::default();
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout())
            .with_style(style.to_progress_style());
        Self { bar, style }
    }

    /// Create a [`BarSink`] which draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            style: LineStyle::default(),
        }
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl ProgressSink for BarSink {
    fn start(&mut self, source: &str, total: Option<u64>) -> io::Result<()> {
        if let Some(total) = total {
            self.bar.set_length(total);
        }
        self.bar.println(self.style.render_header(source, total));
        Ok(())
    }

    fn update(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.bar.set_position(snapshot.transferred());
        self.bar.set_message(self.style.render_line(snapshot));
        Ok(())
    }

    fn finish(&mut self, snapshot: &ProgressSnapshot) -> io::Result<()> {
        self.bar.finish_with_message(self.style.render_line(snapshot));
        Ok(())
    }

    fn supports_redraw(&self) -> bool {
        !self.bar.is_hidden()
    }
}

/// Where the downloader reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressTarget {
    /// Redraw in place when stdout is a terminal, append lines otherwise.
    #[default]
    Auto,
    /// Redraw a single line on stdout.
    Redraw,
    /// Append one line per chunk on stdout.
    Append,
    /// Use an indicatif progress bar on stdout.
    Bar,
    /// Report nothing.
    Hidden,
}

impl ProgressTarget {
    /// Create the sink for this target.
    pub fn into_sink(self) -> Box<dyn ProgressSink> {
        match self {
            ProgressTarget::Auto if io::stdout().is_terminal() => {
                Box::new(RedrawSink::new(io::stdout()))
            }
            ProgressTarget::Auto | ProgressTarget::Append => {
                Box::new(AppendSink::new(io::stdout()))
            }
            ProgressTarget::Redraw => Box::new(RedrawSink::new(io::stdout())),
            ProgressTarget::Bar => Box::new(BarSink::new()),
            ProgressTarget::Hidden => Box::new(BarSink::hidden()),
        }
    }
}
