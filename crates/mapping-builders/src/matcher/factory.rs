//! Matcher factory.
//!
//! One function per matcher kind. The short form applies the defaults
//! (`ignore_case = true`, `reject_on_match = false`); the `*_with` form takes
//! the flags explicitly. Patterns are passed through untouched: empty lists
//! and malformed regex/JSON/XPath text are the mock service's problem.

use super::types::{MatcherDescriptor, MatcherKind, MatcherPattern, SimMetricType};

/// Anything that can produce a [`MatcherDescriptor`].
pub trait BuildMatcher {
    fn build(&self) -> MatcherDescriptor;
}

impl BuildMatcher for MatcherDescriptor {
    fn build(&self) -> MatcherDescriptor {
        self.clone()
    }
}

impl<M: BuildMatcher + ?Sized> BuildMatcher for &M {
    fn build(&self) -> MatcherDescriptor {
        (**self).build()
    }
}

/// Builder for matchers over string values.
///
/// Accepted wherever a request field matches text: path, url, headers,
/// cookies, params, client IP and body.
#[derive(Debug, Clone, PartialEq)]
pub struct StringMatcherBuilder {
    descriptor: MatcherDescriptor,
}

impl BuildMatcher for StringMatcherBuilder {
    fn build(&self) -> MatcherDescriptor {
        self.descriptor.clone()
    }
}

/// Builder for matchers over structured values (JSON, similarity).
///
/// Only accepted as a body matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherBuilder {
    descriptor: MatcherDescriptor,
}

impl BuildMatcher for MatcherBuilder {
    fn build(&self) -> MatcherDescriptor {
        self.descriptor.clone()
    }
}

fn collect_patterns<I, S>(patterns: I) -> MatcherPattern
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MatcherPattern::Multiple {
        patterns: patterns.into_iter().map(Into::into).collect(),
    }
}

fn string_matcher(
    name: MatcherKind,
    pattern: MatcherPattern,
    ignore_case: Option<bool>,
    reject_on_match: bool,
) -> StringMatcherBuilder {
    StringMatcherBuilder {
        descriptor: MatcherDescriptor {
            name,
            pattern,
            ignore_case,
            reject_on_match,
        },
    }
}

/// `ExactMatcher` with `reject_on_match = false`.
pub fn exact<I, S>(patterns: I) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    exact_with(false, patterns)
}

/// `ExactMatcher`. Exact matching has no case option.
pub fn exact_with<I, S>(reject_on_match: bool, patterns: I) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    string_matcher(
        MatcherKind::Exact,
        collect_patterns(patterns),
        None,
        reject_on_match,
    )
}

/// Case-insensitive `WildcardMatcher` (`*` and `?` globbing).
pub fn wildcard<I, S>(patterns: I) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    wildcard_with(true, false, patterns)
}

pub fn wildcard_with<I, S>(
    ignore_case: bool,
    reject_on_match: bool,
    patterns: I,
) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    string_matcher(
        MatcherKind::Wildcard,
        collect_patterns(patterns),
        Some(ignore_case),
        reject_on_match,
    )
}

/// Case-insensitive `RegexMatcher`.
pub fn regex<I, S>(patterns: I) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    regex_with(true, false, patterns)
}

pub fn regex_with<I, S>(
    ignore_case: bool,
    reject_on_match: bool,
    patterns: I,
) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    string_matcher(
        MatcherKind::Regex,
        collect_patterns(patterns),
        Some(ignore_case),
        reject_on_match,
    )
}

/// `JsonMatcher`: deep equality against `json`, which may be a structured
/// value or a JSON string.
pub fn json(json: impl Into<serde_json::Value>) -> MatcherBuilder {
    json_with(json, false)
}

pub fn json_with(json: impl Into<serde_json::Value>, reject_on_match: bool) -> MatcherBuilder {
    MatcherBuilder {
        descriptor: MatcherDescriptor {
            name: MatcherKind::Json,
            pattern: MatcherPattern::Single {
                pattern: json.into(),
            },
            ignore_case: None,
            reject_on_match,
        },
    }
}

pub fn json_path<I, S>(patterns: I) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    json_path_with(false, patterns)
}

pub fn json_path_with<I, S>(reject_on_match: bool, patterns: I) -> StringMatcherBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    string_matcher(
        MatcherKind::JsonPath,
        collect_patterns(patterns),
        None,
        reject_on_match,
    )
}

pub fn xpath(xpath: impl Into<String>) -> StringMatcherBuilder {
    xpath_with(xpath, false)
}

pub fn xpath_with(xpath: impl Into<String>, reject_on_match: bool) -> StringMatcherBuilder {
    string_matcher(
        MatcherKind::XPath,
        MatcherPattern::Single {
            pattern: serde_json::Value::String(xpath.into()),
        },
        None,
        reject_on_match,
    )
}

/// `SimMetricsMatcher.<algorithm>`: similarity score against `pattern`.
pub fn similarity(algorithm: SimMetricType, pattern: impl Into<String>) -> MatcherBuilder {
    similarity_with(algorithm, pattern, false)
}

pub fn similarity_with(
    algorithm: SimMetricType,
    pattern: impl Into<String>,
    reject_on_match: bool,
) -> MatcherBuilder {
    MatcherBuilder {
        descriptor: MatcherDescriptor {
            name: MatcherKind::SimMetrics(algorithm),
            pattern: MatcherPattern::Single {
                pattern: serde_json::Value::String(pattern.into()),
            },
            ignore_case: None,
            reject_on_match,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exact() {
        let matcher = exact(["a", "b"]).build();
        assert_eq!(matcher.name, MatcherKind::Exact);
        assert_eq!(
            matcher.patterns(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert!(matcher.ignore_case.is_none());
        assert!(!matcher.reject_on_match);
    }

    #[test]
    fn test_short_forms_equal_explicit_defaults() {
        assert_eq!(exact(["x"]).build(), exact_with(false, ["x"]).build());
        assert_eq!(
            wildcard(["x"]).build(),
            wildcard_with(true, false, ["x"]).build()
        );
        assert_eq!(regex(["x"]).build(), regex_with(true, false, ["x"]).build());
        assert_eq!(
            json_path(["$.x"]).build(),
            json_path_with(false, ["$.x"]).build()
        );
        assert_eq!(xpath("/x").build(), xpath_with("/x", false).build());
        assert_eq!(json(json!(1)).build(), json_with(json!(1), false).build());
        assert_eq!(
            similarity(SimMetricType::Jaro, "x").build(),
            similarity_with(SimMetricType::Jaro, "x", false).build()
        );
    }

    #[test]
    fn test_wildcard_and_regex_carry_ignore_case() {
        let matcher = wildcard_with(false, true, ["*.json"]).build();
        assert_eq!(matcher.name, MatcherKind::Wildcard);
        assert_eq!(matcher.ignore_case, Some(false));
        assert!(matcher.reject_on_match);

        let matcher = regex(["^/api/\\d+$"]).build();
        assert_eq!(matcher.name, MatcherKind::Regex);
        assert_eq!(matcher.ignore_case, Some(true));
    }

    #[test]
    fn test_json_matcher_keeps_value() {
        let matcher = json_with(json!({"test": true}), true).build();
        assert_eq!(matcher.name.name(), "JsonMatcher");
        assert_eq!(matcher.pattern(), Some(&json!({"test": true})));
        assert!(matcher.patterns().is_none());
        assert!(matcher.ignore_case.is_none());
        assert!(matcher.reject_on_match);
    }

    #[test]
    fn test_json_matcher_accepts_string() {
        let matcher = json(r#"{"id": 1}"#).build();
        assert_eq!(matcher.pattern(), Some(&json!(r#"{"id": 1}"#)));
    }

    #[test]
    fn test_json_path() {
        let matcher = json_path(["$.things[?(@.name == 'x')]"]).build();
        assert_eq!(matcher.name.name(), "JsonPathMatcher");
        assert_eq!(matcher.patterns().map(|p| p.len()), Some(1));
        assert!(matcher.ignore_case.is_none());
    }

    #[test]
    fn test_xpath() {
        let matcher = xpath("/todo-list[count(todo-item) = 3]").build();
        assert_eq!(matcher.name.name(), "XPathMatcher");
        assert_eq!(
            matcher.pattern(),
            Some(&json!("/todo-list[count(todo-item) = 3]"))
        );
        assert!(matcher.ignore_case.is_none());
    }

    #[test]
    fn test_similarity_name_includes_algorithm() {
        let matcher = similarity(SimMetricType::Levenstein, "hello").build();
        assert_eq!(matcher.name.name(), "SimMetricsMatcher.Levenstein");
        assert_eq!(matcher.pattern(), Some(&json!("hello")));
        assert!(!matcher.reject_on_match);
    }

    #[test]
    fn test_patterns_pass_through_unvalidated() {
        let empty = exact(Vec::<String>::new()).build();
        assert_eq!(empty.patterns(), Some(&[][..]));

        let broken = regex(["(unclosed["]).build();
        assert_eq!(broken.patterns(), Some(&["(unclosed[".to_string()][..]));
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = wildcard(["/a"]);
        assert_eq!(builder.build(), builder.build());
    }
}
