//! Parameter descriptors and token classification
//!
//! A captured parameter list is split on every comma and each token is run
//! through an ordered table of rules. The first rule that accepts a token
//! decides its descriptor, so a rest marker is checked before a default.

use log::trace;
use serde::Serialize;

use crate::string_utils::strip_block_comments;

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    /// Parameter name, without rest marker or default value
    pub name: String,
    /// Declared with a leading `...`
    pub rest: bool,
    /// Declared with `= value`
    pub has_default: bool,
}

type Rule = fn(&str) -> Option<Parameter>;

/// Classification rules, in priority order. `plain_name` accepts everything.
const RULES: &[(&str, Rule)] = &[
    ("rest", rest_marker),
    ("default", default_value),
    ("plain", plain_name),
];

fn rest_marker(token: &str) -> Option<Parameter> {
    token.strip_prefix("...").map(Parameter::rest)
}

fn default_value(token: &str) -> Option<Parameter> {
    token
        .split_once('=')
        .map(|(name, _value)| Parameter::defaulted(name.trim()))
}

fn plain_name(token: &str) -> Option<Parameter> {
    Some(Parameter::plain(token))
}

impl Parameter {
    /// A parameter with neither rest marker nor default.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: false,
            has_default: false,
        }
    }

    /// A `...name` parameter.
    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: true,
            has_default: false,
        }
    }

    /// A `name = value` parameter.
    pub fn defaulted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: false,
            has_default: true,
        }
    }

    /// Classify a single parameter token.
    ///
    /// The token is trimmed first; an empty token yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsof::Parameter;
    ///
    /// assert_eq!(Parameter::classify(" ...args "), Some(Parameter::rest("args")));
    /// assert_eq!(Parameter::classify("a = 1"), Some(Parameter::defaulted("a")));
    /// assert_eq!(Parameter::classify("b"), Some(Parameter::plain("b")));
    /// assert_eq!(Parameter::classify("   "), None);
    /// ```
    pub fn classify(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        RULES.iter().find_map(|(rule_name, rule)| {
            let param = rule(token)?;
            trace!("token {:?} classified as {}", token, rule_name);
            Some(param)
        })
    }
}

/// Turn a captured parameter list into descriptors, in declaration order.
///
/// Block comments are removed, then the text is split on every comma.
/// Commas inside default values are not special, so `a = [1, 2]` splits
/// into two tokens.
pub fn parse_parameter_list(raw: &str) -> Vec<Parameter> {
    if raw.is_empty() {
        return Vec::new();
    }

    strip_block_comments(raw)
        .split(',')
        .filter_map(Parameter::classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain() {
        assert_eq!(Parameter::classify("value"), Some(Parameter::plain("value")));
    }

    #[test]
    fn test_classify_rest() {
        let param = Parameter::classify("...rest").unwrap();
        assert_eq!(param.name, "rest");
        assert!(param.rest);
        assert!(!param.has_default);
    }

    #[test]
    fn test_classify_default_keeps_name_only() {
        let param = Parameter::classify("a = 1").unwrap();
        assert_eq!(param.name, "a");
        assert!(!param.rest);
        assert!(param.has_default);
    }

    #[test]
    fn test_classify_default_splits_at_first_equals() {
        assert_eq!(
            Parameter::classify("cmp = (x, y) => x === y"),
            Some(Parameter::defaulted("cmp"))
        );
    }

    #[test]
    fn test_classify_rest_checked_before_default() {
        // Not valid JavaScript, but the rule order must hold.
        assert_eq!(Parameter::classify("...xs = []"), Some(Parameter::rest("xs = []")));
    }

    #[test]
    fn test_classify_empty_and_blank() {
        assert_eq!(Parameter::classify(""), None);
        assert_eq!(Parameter::classify(" \t "), None);
    }

    #[test]
    fn test_parse_parameter_list_order() {
        let params = parse_parameter_list("a, b = 2, ...c");
        assert_eq!(
            params,
            vec![
                Parameter::plain("a"),
                Parameter::defaulted("b"),
                Parameter::rest("c"),
            ]
        );
    }

    #[test]
    fn test_parse_parameter_list_empty() {
        assert!(parse_parameter_list("").is_empty());
    }

    #[test]
    fn test_parse_parameter_list_trailing_comma() {
        assert_eq!(
            parse_parameter_list("a, b,"),
            vec![Parameter::plain("a"), Parameter::plain("b")]
        );
    }

    #[test]
    fn test_parse_parameter_list_strips_comments() {
        assert_eq!(
            parse_parameter_list("a /* first */, /* second */ b"),
            vec![Parameter::plain("a"), Parameter::plain("b")]
        );
    }

    #[test]
    fn test_parse_parameter_list_flat_split_in_defaults() {
        // Known limitation: the array literal is split apart.
        let names: Vec<_> = parse_parameter_list("a = [1, 2], b")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "2]", "b"]);
    }

    #[test]
    fn test_serialize_parameter() {
        let json = serde_json::to_value(Parameter::rest("args")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "args", "rest": true, "has_default": false})
        );
    }
}
