//! String helpers shared by the shape matchers and the token classifier.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("BLOCK_COMMENT regex is invalid"));

/// Remove every line break so a multi-line declaration becomes one line.
///
/// Both `\n` and `\r` are dropped, which keeps CRLF sources matchable.
///
/// # Example
///
/// ```
/// use argsof::string_utils::collapse_line_breaks;
///
/// assert_eq!(collapse_line_breaks("function f(a,\r\n  b) {}"), "function f(a,  b) {}");
/// assert_eq!(collapse_line_breaks("a => a"), "a => a");
/// ```
pub fn collapse_line_breaks(s: &str) -> Cow<'_, str> {
    if s.contains(['\n', '\r']) {
        Cow::Owned(s.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(s)
    }
}

/// Remove `/* ... */` comments.
///
/// Each comment is removed on its own, so text between two comments survives.
/// An unterminated `/*` is left alone.
pub fn strip_block_comments(s: &str) -> Cow<'_, str> {
    BLOCK_COMMENT.replace_all(s, "")
}
