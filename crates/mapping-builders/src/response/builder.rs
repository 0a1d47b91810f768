//! Fluent builder for [`ResponseSpecification`].
//!
//! Not thread-safe: confine a builder to one construction sequence.

use std::collections::btree_map::Entry;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, trace};

use super::types::{BodyDestination, ResponseSpecification};
use crate::encoding::{EncodingDescriptor, TextEncoding};
use crate::error::{MappingError, Result};

/// Builds the response half of a mapping.
///
/// ```
/// use mapping_builders::ResponseSpecBuilder;
/// use http::StatusCode;
///
/// let mut builder = ResponseSpecBuilder::new();
/// builder
///     .with_status(StatusCode::CREATED)
///     .with_header("Content-Type", ["application/json"])
///     .with_body_as_json(serde_json::json!({"id": 7}));
///
/// assert_eq!(builder.build().status_code, 201);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseSpecBuilder {
    spec: ResponseSpecification,
}

impl ResponseSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated specification. No copy is made and nothing is validated.
    pub fn build(&self) -> &ResponseSpecification {
        &self.spec
    }

    pub fn into_spec(self) -> ResponseSpecification {
        self.spec
    }

    // ===== Status =====

    /// Set the status code. Not range-checked beyond what `u16` holds (0..=65535).
    pub fn with_status_code(&mut self, code: u16) -> &mut Self {
        self.spec.status_code = code;
        self
    }

    pub fn with_status(&mut self, status: http::StatusCode) -> &mut Self {
        self.with_status_code(status.as_u16())
    }

    pub fn with_success(&mut self) -> &mut Self {
        self.with_status(http::StatusCode::OK)
    }

    pub fn with_not_found(&mut self) -> &mut Self {
        self.with_status(http::StatusCode::NOT_FOUND)
    }

    // ===== Headers =====

    /// Add header values.
    ///
    /// A new header takes `values` as given. For an existing header the stored
    /// list becomes the union of old and new values, first-seen order, no duplicates.
    pub fn with_header<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::<String>::into);
        match self.spec.headers.entry(name.into()) {
            Entry::Vacant(entry) => {
                entry.insert(values.collect());
            }
            Entry::Occupied(mut entry) => {
                let mut union: Vec<String> = Vec::new();
                for value in entry.get_mut().drain(..).chain(values) {
                    if !union.contains(&value) {
                        union.push(value);
                    }
                }
                *entry.get_mut() = union;
            }
        }
        self
    }

    /// Replace all headers with single-valued entries.
    pub fn with_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.spec.headers = headers
            .into_iter()
            .map(|(name, value)| (name.into(), vec![value.into()]))
            .collect();
        self
    }

    /// Replace all headers with multi-valued entries.
    pub fn with_headers_multi<I, K>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        self.spec.headers = headers
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .collect();
        self
    }

    // ===== Body =====

    /// Read `path` now and use its bytes as the body.
    ///
    /// The body is reset before reading, so a failed read leaves no body set.
    pub fn with_body_from_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        self.reset_body();

        let bytes = std::fs::read(path).map_err(|e| MappingError::io(path, e))?;
        debug!("Loaded {} body bytes from {:?}", bytes.len(), path);
        self.spec.body_as_bytes = Some(bytes);
        Ok(self)
    }

    /// Reference a file the mock service reads when serving the response.
    pub fn with_body_from_remote_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.reset_body();
        self.spec.body_as_file = Some(path.into());
        self
    }

    /// Like [`with_body_from_remote_file`](Self::with_body_from_remote_file),
    /// asking the mock service to cache the file contents.
    pub fn with_cached_body_from_remote_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.with_body_from_remote_file(path);
        self.spec.body_as_file_is_cached = Some(true);
        self
    }

    /// UTF-8 text body.
    pub fn with_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.with_body_encoded(body, TextEncoding::Utf8)
    }

    pub fn with_body_encoded(
        &mut self,
        body: impl Into<String>,
        encoding: TextEncoding,
    ) -> &mut Self {
        self.reset_body();
        self.spec.body = Some(body.into());
        self.spec.body_encoding = Some(EncodingDescriptor::from(encoding));
        self
    }

    pub fn with_body_as_bytes(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
        self.with_body_as_bytes_encoded(body, TextEncoding::Utf8)
    }

    /// Raw bytes body.
    ///
    /// Compatibility quirk: only the destination marker is cleared, not the
    /// other body fields, so a text or JSON body set earlier stays in place.
    pub fn with_body_as_bytes_encoded(
        &mut self,
        body: impl Into<Vec<u8>>,
        encoding: TextEncoding,
    ) -> &mut Self {
        self.spec.body_destination = None;
        self.spec.body_as_bytes = Some(body.into());
        self.spec.body_encoding = Some(EncodingDescriptor::from(encoding));
        self
    }

    /// Structured JSON body, UTF-8, serializer default indentation.
    pub fn with_body_as_json(&mut self, body: impl Into<serde_json::Value>) -> &mut Self {
        self.with_body_as_json_encoded(body, TextEncoding::Utf8, None)
    }

    pub fn with_body_as_json_indented(
        &mut self,
        body: impl Into<serde_json::Value>,
        indented: bool,
    ) -> &mut Self {
        self.with_body_as_json_encoded(body, TextEncoding::Utf8, Some(indented))
    }

    pub fn with_body_as_json_encoded(
        &mut self,
        body: impl Into<serde_json::Value>,
        encoding: TextEncoding,
        indented: Option<bool>,
    ) -> &mut Self {
        self.reset_body();
        self.spec.body_as_json = Some(body.into());
        self.spec.body_as_json_indented = indented;
        self.spec.body_encoding = Some(EncodingDescriptor::from(encoding));
        self
    }

    /// Tell the mock service how to render the body. Set after the body itself,
    /// since every body setter clears it.
    pub fn with_body_destination(&mut self, destination: BodyDestination) -> &mut Self {
        self.spec.body_destination = Some(destination);
        self
    }

    fn reset_body(&mut self) {
        trace!("Resetting response body");
        let spec = &mut self.spec;
        spec.body = None;
        spec.body_as_bytes = None;
        spec.body_as_file = None;
        spec.body_as_file_is_cached = None;
        spec.body_as_json = None;
        spec.body_as_json_indented = None;
        spec.body_destination = None;
        spec.body_encoding = None;
    }

    // ===== Behaviour =====

    /// Let the mock service run response templating. There is no way to turn it off again.
    pub fn with_transformer(&mut self) -> &mut Self {
        self.spec.use_transformer = Some(true);
        self
    }

    pub fn with_delay(&mut self, milliseconds: u32) -> &mut Self {
        self.spec.delay = Some(milliseconds);
        self
    }

    /// Delay truncated to whole milliseconds, saturating at `u32::MAX`.
    pub fn with_delay_duration(&mut self, delay: Duration) -> &mut Self {
        let milliseconds = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self.with_delay(milliseconds)
    }

    /// Forward matching requests to `proxy_url`, optionally presenting a client
    /// certificate identified by thumbprint or subject name.
    pub fn with_proxy(
        &mut self,
        proxy_url: impl Into<String>,
        client_cert_thumbprint_or_subject_name: Option<String>,
    ) -> &mut Self {
        self.spec.proxy_url = Some(proxy_url.into());
        self.spec.x509_thumbprint_or_subject_name = client_cert_thumbprint_or_subject_name;
        self
    }
}
