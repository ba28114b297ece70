//! Progress reporting for transfers.
//!
//! - `snapshot` - [`ProgressSnapshot`], the values derived after each chunk
//! - `style` - [`LineStyle`], the layout of the progress line
//! - `display` - [`ProgressSink`] implementations and [`ProgressTarget`]
//!
//! # Examples
//!
//! ```rust
//! use kgutils::progress::{LineStyle, ProgressSnapshot};
//! use std::time::Duration;
//!
//! let snapshot = ProgressSnapshot::new(256, Some(1024), Duration::from_secs(2));
//! let line = LineStyle::default().render_line(&snapshot);
//! assert!(line.starts_with("   25.00% |████████"));
//! ```

pub(crate) mod display;
pub(crate) mod snapshot;
pub(crate) mod style;

pub use display::{AppendSink, BarSink, ProgressSink, ProgressTarget, RedrawSink};
pub use snapshot::ProgressSnapshot;
pub use style::LineStyle;
