//! Request half of a mapping: what an incoming request must look like.

mod builder;
mod types;

pub use builder::RequestSpecBuilder;
pub use types::{BodySpec, MatcherGroup, NamedMatcherGroup, RequestSpecification};
