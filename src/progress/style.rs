//! Progress line layout.
//!
//! A line for a transfer of known size looks like:
//!
//! ```text
//!    42.17% |█████████████                   |  1.21MB/s eta 00:00:07
//! ```
//!
//! Without a declared size the percentage, bar and ETA are left out:
//!
//! ```text
//!     3.40MB received   1.21MB/s
//! ```

use crate::progress::ProgressSnapshot;
use crate::utils::format::{format_bytes, format_duration, format_size};

use indicatif::ProgressStyle;

/// Define how progress lines are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
    /// Number of cells in the bar.
    bar_width: usize,
    /// Character used for filled cells.
    fill: char,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            bar_width: LineStyle::BAR_WIDTH,
            fill: LineStyle::FILL,
        }
    }
}

impl LineStyle {
    /// Default bar width, in cells.
    pub const BAR_WIDTH: usize = 32;
    /// Default fill character.
    pub const FILL: char = '█';
    /// indicatif template used by [`crate::progress::BarSink`]; the whole line
    /// is rendered by [`LineStyle::render_line`] and passed as the message.
    pub const TEMPLATE_MESSAGE: &'static str = "{msg}";

    /// Create a new [`LineStyle`].
    pub fn new(bar_width: usize, fill: char) -> Self {
        Self { bar_width, fill }
    }

    /// Width of the bar in cells.
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Render the bar for a fraction in `[0, 1]`, padded with spaces.
    pub fn render_bar(&self, percent: f64) -> String {
        let filled = (percent.clamp(0.0, 1.0) * self.bar_width as f64) as usize;
        let mut bar: String = std::iter::repeat(self.fill).take(filled).collect();
        bar.extend(std::iter::repeat(' ').take(self.bar_width - filled));
        bar
    }

    /// Render the progress line for a snapshot, without any cursor control.
    pub fn render_line(&self, snapshot: &ProgressSnapshot) -> String {
        let speed = format_size(snapshot.average_speed(), 2);
        match (snapshot.percent(), snapshot.eta()) {
            (Some(percent), Some(eta)) => format!(
                "  {:6.2}% |{}| {:>9}/s eta {}",
                100.0 * percent,
                self.render_bar(percent),
                speed,
                format_duration(eta)
            ),
            _ => format!(
                "  {:>9} received {:>9}/s",
                format_bytes(snapshot.transferred()),
                speed
            ),
        }
    }

    /// Render the line announcing a transfer.
    pub fn render_header(&self, source: &str, total: Option<u64>) -> String {
        let size = total.map_or_else(|| "unknown size".to_string(), format_bytes);
        format!("Downloading {} ({})", source, size)
    }

    /// Create an indicatif [`ProgressStyle`] that displays rendered lines.
    pub fn to_progress_style(&self) -> ProgressStyle {
        ProgressStyle::with_template(LineStyle::TEMPLATE_MESSAGE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
