//! Standalone helpers.
//!
//! Each function here is a small, stateless transformation. The downloader
//! reuses the formatters; everything else stands on its own.
//!
//! - [`format`] - human-readable byte counts and durations
//! - [`slug`] - URL-friendly slugs
//! - [`files`] - directory entry counts and line counting
//! - [`column`] - spreadsheet column labels
//! - [`color`] - ANSI colored console lines
//! - [`content_length`] - `Content-Length` header parsing
//!
//! # Examples
//!
//! ```rust
//! use kgutils::utils::{column_number_to_letters, format_bytes, format_duration, slugify};
//!
//! assert_eq!(format_bytes(1536), "1.50kB");
//! assert_eq!(format_duration(3661.0), "01:01:01");
//! assert_eq!(slugify("Hello, World!"), "hello-world");
//! assert_eq!(column_number_to_letters(703).unwrap(), "AAA");
//! ```

pub mod color;
pub mod column;
pub mod content_length;
pub mod files;
pub mod format;
pub mod slug;

pub use color::{colorize, cprint, write_colored, Color};
pub use column::{column_letters_to_number, column_number_to_letters};
pub use content_length::content_length_from_headers;
pub use files::{
    count_files_with_extension, count_lines, LineCounter, StreamingLineCounter, WcLineCounter,
};
pub use format::{format_bytes, format_duration, format_duration_of, format_size};
pub use slug::slugify;
