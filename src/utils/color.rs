//! ANSI colored console output.

use std::io::{self, Write};

/// Escape sequence restoring the default terminal style.
pub const RESET: &str = "\x1b[0m";

/// Terminal colors addressable by a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Bright red, code `r` (SGR 91).
    Red,
    /// Bright green, code `g` (SGR 92).
    Green,
    /// Bright yellow, code `y` (SGR 93). Used for unknown codes.
    #[default]
    Yellow,
    /// Bright blue, code `b` (SGR 94).
    LightBlue,
    /// Magenta, code `p` (SGR 35).
    Purple,
    /// Cyan, code `c` (SGR 36).
    Cyan,
}

/// Short codes accepted by [`Color::from_code`].
pub const COLOR_CODES: [(&str, Color); 6] = [
    ("r", Color::Red),
    ("g", Color::Green),
    ("y", Color::Yellow),
    ("b", Color::LightBlue),
    ("p", Color::Purple),
    ("c", Color::Cyan),
];

impl Color {
    /// SGR foreground code of the color.
    pub const fn ansi_code(self) -> u8 {
        match self {
            Color::Red => 91,
            Color::Green => 92,
            Color::Yellow => 93,
            Color::LightBlue => 94,
            Color::Purple => 35,
            Color::Cyan => 36,
        }
    }

    /// Look up a color by its short code. Unknown codes fall back to yellow.
    pub fn from_code(code: &str) -> Self {
        COLOR_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, color)| *color)
            .unwrap_or_default()
    }
}

/// Wrap `text` in the escape sequences for `color`.
pub fn colorize(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}{}", color.ansi_code(), text, RESET)
}

/// Write `text` as a colored line to `writer`.
pub fn write_colored<W: Write>(writer: &mut W, text: &str, code: &str) -> io::Result<()> {
    writeln!(writer, "{}", colorize(text, Color::from_code(code)))
}

/// Print `text` as a colored line on stdout.
pub fn cprint(text: &str, code: &str) {
    println!("{}", colorize(text, Color::from_code(code)));
}
