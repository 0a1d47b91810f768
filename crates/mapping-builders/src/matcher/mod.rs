//! Matcher descriptors and the factory that produces them.
//!
//! - `types` - wire-level [`MatcherDescriptor`] and [`MatcherKind`]
//! - `factory` - one constructor per matcher kind, returning builders

mod factory;
mod types;

pub use factory::{
    exact, exact_with, json, json_path, json_path_with, json_with, regex, regex_with, similarity,
    similarity_with, wildcard, wildcard_with, xpath, xpath_with, BuildMatcher, MatcherBuilder,
    StringMatcherBuilder,
};
pub use types::{MatcherDescriptor, MatcherKind, MatcherPattern, SimMetricType};
