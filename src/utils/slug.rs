//! URL-friendly slugs.

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Simplify an arbitrary string into a lowercase, hyphen-separated slug.
///
/// Spaces, hyphens, dots and slashes act as word separators, every other
/// non-word character is dropped, and runs of separators collapse into a
/// single hyphen. Applying it twice gives the same result as applying it once.
///
/// ```rust
/// use kgutils::utils::slugify;
///
/// assert_eq!(slugify("[Some] _ Article's Title--"), "some-articles-title");
/// ```
pub fn slugify(s: &str) -> String {
    let separated: String = s
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' | '.' | '/' => '_',
            c => c,
        })
        .collect();
    let words = NON_WORD.replace_all(&separated, "");
    let spaced = words.replace('_', " ");
    let collapsed = WHITESPACE.replace_all(&spaced, " ");
    collapsed.trim().replace(' ', "-")
}
