//! Response half of a mapping: what the mock service answers with.

mod builder;
mod types;

pub use builder::ResponseSpecBuilder;
pub use types::{BodyDestination, BodyRepresentation, ResponseSpecification};
