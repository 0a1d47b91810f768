//! Builders for HTTP mock mapping specifications.
//!
//! A mapping pairs a request specification (which requests it applies to)
//! with a response specification (what to answer). This crate only builds
//! and serializes them; matching and serving is done by the mock service that
//! consumes the JSON shape.
//!
//! # Example
//!
//! ```
//! use mapping_builders::{matcher, MappingSpecification, RequestSpecBuilder, ResponseSpecBuilder};
//!
//! let mut request = RequestSpecBuilder::new();
//! request
//!     .using_post()
//!     .with_path(["/orders"])
//!     .with_body_matcher(matcher::json_path(["$.items[0]"]));
//!
//! let mut response = ResponseSpecBuilder::new();
//! response.with_status_code(201).with_body_as_json(serde_json::json!({"id": 1}));
//!
//! let mapping = MappingSpecification::new(request.into_spec(), response.into_spec())
//!     .with_title("create order");
//! let json = mapping.to_json_pretty().unwrap();
//! assert!(json.contains("JsonPathMatcher"));
//! ```

pub mod encoding;
pub mod error;
pub mod mapping;
pub mod matcher;
pub mod request;
pub mod response;

pub use encoding::{EncodingDescriptor, TextEncoding};
pub use error::{MappingError, Result};
pub use mapping::{load_mapping, load_mappings, save_mapping, MappingSpecification};
pub use matcher::{BuildMatcher, MatcherDescriptor, MatcherKind, SimMetricType};
pub use request::{RequestSpecBuilder, RequestSpecification};
pub use response::{BodyRepresentation, ResponseSpecBuilder, ResponseSpecification};
