//! Serializable matcher descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

const SIM_METRICS_PREFIX: &str = "SimMetricsMatcher.";

/// Similarity algorithms available to `SimMetricsMatcher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimMetricType {
    BlockDistance,
    ChapmanLengthDeviation,
    ChapmanMeanLength,
    CosineSimilarity,
    DiceSimilarity,
    EuclideanDistance,
    JaccardSimilarity,
    Jaro,
    JaroWinkler,
    Levenstein,
    MatchingCoefficient,
    MongeElkan,
    NeedlemanWunch,
    OverlapCoefficient,
    QGramsDistance,
    SmithWaterman,
    SmithWatermanGotoh,
    SmithWatermanGotohWindowedAffine,
}

impl SimMetricType {
    const ALL: [SimMetricType; 18] = [
        SimMetricType::BlockDistance,
        SimMetricType::ChapmanLengthDeviation,
        SimMetricType::ChapmanMeanLength,
        SimMetricType::CosineSimilarity,
        SimMetricType::DiceSimilarity,
        SimMetricType::EuclideanDistance,
        SimMetricType::JaccardSimilarity,
        SimMetricType::Jaro,
        SimMetricType::JaroWinkler,
        SimMetricType::Levenstein,
        SimMetricType::MatchingCoefficient,
        SimMetricType::MongeElkan,
        SimMetricType::NeedlemanWunch,
        SimMetricType::OverlapCoefficient,
        SimMetricType::QGramsDistance,
        SimMetricType::SmithWaterman,
        SimMetricType::SmithWatermanGotoh,
        SimMetricType::SmithWatermanGotohWindowedAffine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimMetricType::BlockDistance => "BlockDistance",
            SimMetricType::ChapmanLengthDeviation => "ChapmanLengthDeviation",
            SimMetricType::ChapmanMeanLength => "ChapmanMeanLength",
            SimMetricType::CosineSimilarity => "CosineSimilarity",
            SimMetricType::DiceSimilarity => "DiceSimilarity",
            SimMetricType::EuclideanDistance => "EuclideanDistance",
            SimMetricType::JaccardSimilarity => "JaccardSimilarity",
            SimMetricType::Jaro => "Jaro",
            SimMetricType::JaroWinkler => "JaroWinkler",
            SimMetricType::Levenstein => "Levenstein",
            SimMetricType::MatchingCoefficient => "MatchingCoefficient",
            SimMetricType::MongeElkan => "MongeElkan",
            SimMetricType::NeedlemanWunch => "NeedlemanWunch",
            SimMetricType::OverlapCoefficient => "OverlapCoefficient",
            SimMetricType::QGramsDistance => "QGramsDistance",
            SimMetricType::SmithWaterman => "SmithWaterman",
            SimMetricType::SmithWatermanGotoh => "SmithWatermanGotoh",
            SimMetricType::SmithWatermanGotohWindowedAffine => "SmithWatermanGotohWindowedAffine",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for SimMetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matcher name as understood by the mock service.
///
/// Serialized as a plain string (`"ExactMatcher"`, `"SimMetricsMatcher.Jaro"`, ...).
/// Names this crate does not produce itself are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatcherKind {
    Exact,
    Wildcard,
    Regex,
    Json,
    JsonPath,
    XPath,
    SimMetrics(SimMetricType),
    Other(String),
}

impl MatcherKind {
    pub fn name(&self) -> String {
        match self {
            MatcherKind::Exact => "ExactMatcher".to_string(),
            MatcherKind::Wildcard => "WildcardMatcher".to_string(),
            MatcherKind::Regex => "RegexMatcher".to_string(),
            MatcherKind::Json => "JsonMatcher".to_string(),
            MatcherKind::JsonPath => "JsonPathMatcher".to_string(),
            MatcherKind::XPath => "XPathMatcher".to_string(),
            MatcherKind::SimMetrics(kind) => format!("{SIM_METRICS_PREFIX}{kind}"),
            MatcherKind::Other(name) => name.clone(),
        }
    }

    /// Whether descriptors of this kind carry an `ignoreCase` flag.
    pub fn supports_ignore_case(&self) -> bool {
        matches!(self, MatcherKind::Wildcard | MatcherKind::Regex)
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<String> for MatcherKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "ExactMatcher" => MatcherKind::Exact,
            "WildcardMatcher" => MatcherKind::Wildcard,
            "RegexMatcher" => MatcherKind::Regex,
            "JsonMatcher" => MatcherKind::Json,
            "JsonPathMatcher" => MatcherKind::JsonPath,
            "XPathMatcher" => MatcherKind::XPath,
            other => other
                .strip_prefix(SIM_METRICS_PREFIX)
                .and_then(SimMetricType::parse)
                .map(MatcherKind::SimMetrics)
                .unwrap_or(MatcherKind::Other(name)),
        }
    }
}

impl From<MatcherKind> for String {
    fn from(kind: MatcherKind) -> Self {
        kind.name()
    }
}

/// Pattern payload of a matcher: a single value or an ordered list of strings.
///
/// Flattened into [`MatcherDescriptor`] so exactly one of `pattern` / `patterns`
/// appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatcherPattern {
    Single { pattern: serde_json::Value },
    Multiple { patterns: Vec<String> },
}

/// One matching rule, evaluated by the mock service against live requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherDescriptor {
    pub name: MatcherKind,
    #[serde(flatten)]
    pub pattern: MatcherPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
    #[serde(default)]
    pub reject_on_match: bool,
}

impl MatcherDescriptor {
    /// The single pattern, for json / xpath / similarity matchers.
    pub fn pattern(&self) -> Option<&serde_json::Value> {
        match &self.pattern {
            MatcherPattern::Single { pattern } => Some(pattern),
            MatcherPattern::Multiple { .. } => None,
        }
    }

    /// The pattern list, for exact / wildcard / regex / json-path matchers.
    pub fn patterns(&self) -> Option<&[String]> {
        match &self.pattern {
            MatcherPattern::Multiple { patterns } => Some(patterns),
            MatcherPattern::Single { .. } => None,
        }
    }
}
