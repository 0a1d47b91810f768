//! Fluent builder for [`RequestSpecification`].
//!
//! Not thread-safe: confine a builder to one construction sequence. Every
//! setter returns `&mut Self` so calls chain; `build()` hands out a reference
//! to the accumulated specification and leaves the builder usable.

use std::borrow::Borrow;

use tracing::{debug, trace};

use super::types::{BodySpec, MatcherGroup, NamedMatcherGroup, RequestSpecification};
use crate::error::{MappingError, Result};
use crate::matcher::{
    exact_with, wildcard_with, BuildMatcher, MatcherDescriptor, MatcherKind, MatcherPattern,
    StringMatcherBuilder,
};

/// Builds the request half of a mapping.
///
/// ```
/// use mapping_builders::RequestSpecBuilder;
///
/// let mut builder = RequestSpecBuilder::new();
/// builder
///     .using_get()
///     .with_path(["/api/orders/*"])
///     .with_header("Accept", ["application/json"]);
///
/// let spec = builder.build();
/// assert_eq!(spec.methods, vec!["get"]);
/// assert_eq!(spec.headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestSpecBuilder {
    spec: RequestSpecification,
}

fn build_all<I, B>(matchers: I) -> Vec<MatcherDescriptor>
where
    I: IntoIterator<Item = B>,
    B: Borrow<StringMatcherBuilder>,
{
    matchers
        .into_iter()
        .map(|matcher| matcher.borrow().build())
        .collect()
}

fn wildcards<I, S>(reject_on_match: bool, patterns: I) -> Vec<StringMatcherBuilder>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    patterns
        .into_iter()
        .map(|pattern| wildcard_with(true, reject_on_match, [pattern]))
        .collect()
}

/// Wildcard `*` matching any value, with no case flag.
fn any_value(reject_on_match: bool) -> MatcherDescriptor {
    MatcherDescriptor {
        name: MatcherKind::Wildcard,
        pattern: MatcherPattern::Multiple {
            patterns: vec!["*".to_string()],
        },
        ignore_case: None,
        reject_on_match,
    }
}

impl RequestSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated specification. No copy is made and nothing is validated.
    pub fn build(&self) -> &RequestSpecification {
        &self.spec
    }

    /// Consume the builder and take ownership of the specification.
    pub fn into_spec(self) -> RequestSpecification {
        self.spec
    }

    // ===== Methods =====

    /// Drop every method restriction.
    pub fn using_any_method(&mut self) -> &mut Self {
        self.spec.methods.clear();
        self
    }

    /// Union `methods` (lower-cased) into the method set.
    ///
    /// Fails with [`MappingError::InvalidArgument`] when any entry is blank;
    /// the set is left untouched in that case.
    pub fn using_method<I, S>(&mut self, methods: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let methods = methods
            .into_iter()
            .map(|method| {
                let method = method.as_ref().trim();
                if method.is_empty() {
                    Err(MappingError::invalid_argument("methods must not be blank"))
                } else {
                    Ok(method.to_ascii_lowercase())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        for method in methods {
            self.add_method(method);
        }
        Ok(self)
    }

    pub fn using_get(&mut self) -> &mut Self {
        self.add_method("get")
    }

    pub fn using_post(&mut self) -> &mut Self {
        self.add_method("post")
    }

    pub fn using_put(&mut self) -> &mut Self {
        self.add_method("put")
    }

    pub fn using_patch(&mut self) -> &mut Self {
        self.add_method("patch")
    }

    pub fn using_delete(&mut self) -> &mut Self {
        self.add_method("delete")
    }

    pub fn using_head(&mut self) -> &mut Self {
        self.add_method("head")
    }

    fn add_method(&mut self, method: impl Into<String>) -> &mut Self {
        let method = method.into();
        if !self.spec.methods.contains(&method) {
            self.spec.methods.push(method);
        }
        self
    }

    // ===== Body =====

    /// Case-insensitive wildcard match on the request body.
    pub fn with_body(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.with_body_with(pattern, true, false)
    }

    pub fn with_body_with(
        &mut self,
        pattern: impl Into<String>,
        ignore_case: bool,
        reject_on_match: bool,
    ) -> &mut Self {
        self.with_body_matcher(wildcard_with(ignore_case, reject_on_match, [pattern]))
    }

    /// Replace the body matcher. Accepts any matcher kind, including JSON and similarity.
    pub fn with_body_matcher(&mut self, matcher: impl BuildMatcher) -> &mut Self {
        if self.spec.body.is_some() {
            debug!("Replacing existing body matcher");
        }
        self.spec.body = Some(BodySpec {
            matcher: matcher.build(),
        });
        self
    }

    // ===== Client IP =====

    /// Replace the client IP matchers with one case-insensitive wildcard per address.
    pub fn with_client_ip<I, S>(&mut self, client_ips: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_client_ip_with(false, client_ips)
    }

    pub fn with_client_ip_with<I, S>(&mut self, reject_on_match: bool, client_ips: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_client_ip_matchers(wildcards(reject_on_match, client_ips))
    }

    pub fn with_client_ip_matchers<I, B>(&mut self, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Borrow<StringMatcherBuilder>,
    {
        self.spec.client_ip = Some(MatcherGroup {
            matchers: build_all(matchers),
        });
        self
    }

    // ===== Cookies =====

    /// Append a cookie constraint using a case-insensitive wildcard.
    pub fn with_cookie(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> &mut Self {
        self.with_cookie_with(name, pattern, true, false)
    }

    pub fn with_cookie_with(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        ignore_case: bool,
        reject_on_match: bool,
    ) -> &mut Self {
        self.with_cookie_matchers(name, [wildcard_with(ignore_case, reject_on_match, [pattern])])
    }

    /// Append a cookie constraint. Never merges with an existing entry of the same name.
    pub fn with_cookie_matchers<I, B>(&mut self, name: impl Into<String>, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Borrow<StringMatcherBuilder>,
    {
        let group = NamedMatcherGroup {
            name: name.into(),
            matchers: build_all(matchers),
        };
        trace!(cookie = %group.name, "Adding cookie matchers");
        self.spec.cookies.push(group);
        self
    }

    // ===== Headers =====

    /// Append a header constraint with one case-insensitive wildcard per pattern.
    pub fn with_header<I, S>(&mut self, name: impl Into<String>, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_header_with(name, true, false, patterns)
    }

    pub fn with_header_with<I, S>(
        &mut self,
        name: impl Into<String>,
        ignore_case: bool,
        reject_on_match: bool,
        patterns: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let matchers: Vec<_> = patterns
            .into_iter()
            .map(|pattern| wildcard_with(ignore_case, reject_on_match, [pattern]))
            .collect();
        self.with_header_matchers(name, matchers)
    }

    /// Append a header constraint. Never merges with an existing entry of the same name.
    pub fn with_header_matchers<I, B>(&mut self, name: impl Into<String>, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Borrow<StringMatcherBuilder>,
    {
        let group = NamedMatcherGroup {
            name: name.into(),
            matchers: build_all(matchers),
        };
        trace!(header = %group.name, "Adding header matchers");
        self.spec.headers.push(group);
        self
    }

    // ===== Query parameters =====

    /// Require the parameter to be present with any value.
    pub fn with_param(&mut self, key: impl Into<String>) -> &mut Self {
        self.with_param_with(key, false)
    }

    pub fn with_param_with(&mut self, key: impl Into<String>, reject_on_match: bool) -> &mut Self {
        self.push_param(key.into(), vec![any_value(reject_on_match)])
    }

    /// Require the parameter to equal one of `values` exactly.
    pub fn with_param_values<I, S>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_param_values_with(key, false, values)
    }

    pub fn with_param_values_with<I, S>(
        &mut self,
        key: impl Into<String>,
        reject_on_match: bool,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let matchers: Vec<_> = values
            .into_iter()
            .map(|value| exact_with(reject_on_match, [value]))
            .collect();
        self.with_param_matchers(key, matchers)
    }

    pub fn with_param_matchers<I, B>(&mut self, key: impl Into<String>, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Borrow<StringMatcherBuilder>,
    {
        self.push_param(key.into(), build_all(matchers))
    }

    fn push_param(&mut self, name: String, matchers: Vec<MatcherDescriptor>) -> &mut Self {
        trace!(param = %name, "Adding query parameter matchers");
        self.spec.params.push(NamedMatcherGroup { name, matchers });
        self
    }

    // ===== Path / URL =====

    /// Replace the path matchers with one case-insensitive wildcard per path.
    pub fn with_path<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_path_with(false, paths)
    }

    pub fn with_path_with<I, S>(&mut self, reject_on_match: bool, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_path_matchers(wildcards(reject_on_match, paths))
    }

    pub fn with_path_matchers<I, B>(&mut self, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Borrow<StringMatcherBuilder>,
    {
        if self.spec.path.is_some() {
            debug!("Replacing existing path matchers");
        }
        self.spec.path = Some(MatcherGroup {
            matchers: build_all(matchers),
        });
        self
    }

    /// Replace the URL matchers with one case-insensitive wildcard per URL.
    pub fn with_url<I, S>(&mut self, urls: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_url_with(false, urls)
    }

    pub fn with_url_with<I, S>(&mut self, reject_on_match: bool, urls: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_url_matchers(wildcards(reject_on_match, urls))
    }

    pub fn with_url_matchers<I, B>(&mut self, matchers: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Borrow<StringMatcherBuilder>,
    {
        if self.spec.url.is_some() {
            debug!("Replacing existing url matchers");
        }
        self.spec.url = Some(MatcherGroup {
            matchers: build_all(matchers),
        });
        self
    }
}
