//! Request specification types.

use serde::{Deserialize, Serialize};

use crate::matcher::MatcherDescriptor;

/// OR-combined list of matchers for a single request field (path, url, client IP).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatcherGroup {
    pub matchers: Vec<MatcherDescriptor>,
}

/// Matchers for one named header, cookie or query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMatcherGroup {
    pub name: String,
    pub matchers: Vec<MatcherDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub matcher: MatcherDescriptor,
}

/// Constraints a request must satisfy for a mapping to apply.
///
/// An empty `methods` list means any method. Named groups keep one entry per
/// builder call, so two entries may share a name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSpecification {
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<MatcherGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<MatcherGroup>,
    #[serde(default)]
    pub headers: Vec<NamedMatcherGroup>,
    #[serde(default)]
    pub cookies: Vec<NamedMatcherGroup>,
    #[serde(default)]
    pub params: Vec<NamedMatcherGroup>,
    #[serde(rename = "clientIP", default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<MatcherGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodySpec>,
}

impl RequestSpecification {
    /// True when no method restriction is set.
    pub fn matches_any_method(&self) -> bool {
        self.methods.is_empty()
    }
}
