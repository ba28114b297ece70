//! Human-readable formatting for byte counts and durations.
//!
//! Both formatters are pure and never fail: out-of-domain inputs (negative,
//! NaN or infinite values) render as zero.

use std::time::Duration;

/// Unit prefixes, each one 1024 times the previous.
pub const UNITS: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Step between two consecutive units.
const UNIT_STEP: f64 = 1024.0;

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a byte count with two decimal places.
///
/// ```rust
/// use kgutils::utils::format::format_bytes;
///
/// assert_eq!(format_bytes(0), "0.00B");
/// assert_eq!(format_bytes(1024), "1.00kB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes as f64, 2)
}

/// Format a (possibly fractional) byte quantity with `decimal_places` decimals.
///
/// The value is scaled down by 1024 until its *displayed* mantissa is below
/// 1024, so `1048575` renders as `1.00MB` rather than `1024.00kB`. Once the
/// last unit is reached the mantissa is left as it is.
///
/// ```rust
/// use kgutils::utils::format::format_size;
///
/// assert_eq!(format_size(1536.0, 1), "1.5kB");
/// ```
pub fn format_size(size: f64, decimal_places: usize) -> String {
    let mut value = if size.is_finite() && size > 0.0 {
        size
    } else {
        0.0
    };
    let last = UNITS.len() - 1;
    let mut unit = 0;

    loop {
        let rendered = format!("{:.*}", decimal_places, value);
        let fits = rendered
            .parse::<f64>()
            .map_or(true, |mantissa| mantissa < UNIT_STEP);
        if fits || unit == last {
            return format!("{}{}B", rendered, UNITS[unit]);
        }
        value /= UNIT_STEP;
        unit += 1;
    }
}

/// Format a number of seconds as `HH:MM:SS`.
///
/// The fractional part is truncated. Durations of a day or more are rendered
/// with a day prefix (`1 day, 2:03:04`, `3 days, 0:00:05`). The result is
/// left-padded with zeros to at least 8 characters.
///
/// ```rust
/// use kgutils::utils::format::format_duration;
///
/// assert_eq!(format_duration(65.0), "00:01:05");
/// assert_eq!(format_duration(3661.9), "01:01:01");
/// ```
pub fn format_duration(seconds: f64) -> String {
    // `as` saturates on overflow.
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    render_clock(total)
}

/// Same as [`format_duration`] for a [`Duration`].
pub fn format_duration_of(duration: Duration) -> String {
    render_clock(duration.as_secs())
}

fn render_clock(total: u64) -> String {
    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);
    let rendered = match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    };
    format!("{:0>8}", rendered)
}
