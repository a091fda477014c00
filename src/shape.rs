//! Callable shapes and the patterns that recognise them
//!
//! Each shape owns one anchored pattern whose first capture group is the raw
//! parameter text. The patterns are heuristics over source text, not a
//! grammar: a default value containing `)` ends the capture early, and the
//! arrow pattern claims anything that contains `=>`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static CLASS_CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^class\s.*constructor\s*?\(([^)]*?)\)")
        .expect("CLASS_CONSTRUCTOR regex is invalid")
});

static ARROW_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?(.*?)\)?\s*?=>").expect("ARROW_FUNCTION regex is invalid")
});

static REGULAR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^function\s?.*?\(([^)]*?)\)").expect("REGULAR_FUNCTION regex is invalid")
});

/// The callable syntaxes a parameter list can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// `class Name { constructor(...) { ... } }`
    Class,
    /// `(...) => ...` or `name => ...`
    Arrow,
    /// `function name(...) { ... }`
    Regular,
}

impl Shape {
    /// Order in which enabled shapes are tried. The first match wins.
    pub const PRIORITY: [Shape; 3] = [Shape::Class, Shape::Arrow, Shape::Regular];

    fn pattern(self) -> &'static Regex {
        match self {
            Shape::Class => &CLASS_CONSTRUCTOR,
            Shape::Arrow => &ARROW_FUNCTION,
            Shape::Regular => &REGULAR_FUNCTION,
        }
    }

    /// Capture the raw, trimmed parameter text if `text` looks like this shape.
    ///
    /// `text` is expected to be a single line; see
    /// [`collapse_line_breaks`](crate::string_utils::collapse_line_breaks).
    /// A declaration with no parameters yields `Some("")`, which is still a match.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsof::Shape;
    ///
    /// assert_eq!(Shape::Arrow.capture("(a, b) => a + b"), Some("a, b"));
    /// assert_eq!(Shape::Arrow.capture("a => a"), Some("a"));
    /// assert_eq!(Shape::Regular.capture("function f() {}"), Some(""));
    /// assert_eq!(Shape::Class.capture("function f() {}"), None);
    /// ```
    pub fn capture(self, text: &str) -> Option<&str> {
        self.pattern()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Lowercase name, as used in CLI flags and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Class => "class",
            Shape::Arrow => "arrow",
            Shape::Regular => "regular",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
