//! Response specification types.

use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::encoding::EncodingDescriptor;

/// How the mock service should render the body it sends back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyDestination {
    SameAsSource,
    String,
    Bytes,
}

/// Response template the mock service answers with when the request half matches.
///
/// Body fields are kept flat, matching the wire shape. The builder keeps them
/// mutually exclusive on write; [`ResponseSpecification::body_representation`]
/// gives a tagged view for readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSpecification {
    #[serde(default = "default_status_code")]
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Raw body bytes, base64 on the wire.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_base64",
        deserialize_with = "deserialize_base64"
    )]
    pub body_as_bytes: Option<Vec<u8>>,
    /// File path resolved by the mock service, not by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_as_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_as_file_is_cached: Option<bool>,
    /// A present `null` is a JSON body of `null`, not a missing body.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present_json"
    )]
    pub body_as_json: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_as_json_indented: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_destination: Option<BodyDestination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_encoding: Option<EncodingDescriptor>,
    /// Delay before responding, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_transformer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(
        rename = "x509ThumbprintOrSubjectName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x509_thumbprint_or_subject_name: Option<String>,
}

fn default_status_code() -> u16 {
    200
}

fn serialize_base64<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bytes {
        Some(bytes) => {
            serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
        }
        None => serializer.serialize_none(),
    }
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded: Option<String> = Option::deserialize(deserializer)?;
    encoded
        .map(|encoded| {
            base64::engine::general_purpose::STANDARD
                .decode(encoded.as_bytes())
                .map_err(serde::de::Error::custom)
        })
        .transpose()
}

fn deserialize_present_json<'de, D>(
    deserializer: D,
) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl Default for ResponseSpecification {
    fn default() -> Self {
        Self {
            status_code: default_status_code(),
            headers: BTreeMap::new(),
            body: None,
            body_as_bytes: None,
            body_as_file: None,
            body_as_file_is_cached: None,
            body_as_json: None,
            body_as_json_indented: None,
            body_destination: None,
            body_encoding: None,
            delay: None,
            use_transformer: None,
            proxy_url: None,
            x509_thumbprint_or_subject_name: None,
        }
    }
}

/// Tagged view over the body fields of a [`ResponseSpecification`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyRepresentation<'a> {
    Empty,
    Text {
        text: &'a str,
        encoding: Option<&'a EncodingDescriptor>,
    },
    Bytes {
        bytes: &'a [u8],
        encoding: Option<&'a EncodingDescriptor>,
    },
    Json {
        value: &'a serde_json::Value,
        indented: Option<bool>,
        encoding: Option<&'a EncodingDescriptor>,
    },
    RemoteFile {
        path: &'a str,
        cached: bool,
    },
}

impl ResponseSpecification {
    /// The body as the mock service will read it.
    ///
    /// Bytes win over text, text over JSON, JSON over a file reference. Only
    /// the bytes setter can leave more than one field populated.
    pub fn body_representation(&self) -> BodyRepresentation<'_> {
        let encoding = self.body_encoding.as_ref();
        if let Some(bytes) = &self.body_as_bytes {
            BodyRepresentation::Bytes { bytes, encoding }
        } else if let Some(text) = &self.body {
            BodyRepresentation::Text { text, encoding }
        } else if let Some(value) = &self.body_as_json {
            BodyRepresentation::Json {
                value,
                indented: self.body_as_json_indented,
                encoding,
            }
        } else if let Some(path) = &self.body_as_file {
            BodyRepresentation::RemoteFile {
                path,
                cached: self.body_as_file_is_cached.unwrap_or(false),
            }
        } else {
            BodyRepresentation::Empty
        }
    }
}
