//! Text encoding identities attached to textual and binary response bodies.

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, Result};

/// Text encodings understood by the mock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// Little-endian UTF-16.
    Utf16,
    Utf16BigEndian,
    Utf32,
    Ascii,
    Latin1,
}

impl TextEncoding {
    const ALL: [TextEncoding; 6] = [
        TextEncoding::Utf8,
        TextEncoding::Utf16,
        TextEncoding::Utf16BigEndian,
        TextEncoding::Utf32,
        TextEncoding::Ascii,
        TextEncoding::Latin1,
    ];

    pub fn code_page(&self) -> i32 {
        match self {
            TextEncoding::Utf8 => 65001,
            TextEncoding::Utf16 => 1200,
            TextEncoding::Utf16BigEndian => 1201,
            TextEncoding::Utf32 => 12000,
            TextEncoding::Ascii => 20127,
            TextEncoding::Latin1 => 28591,
        }
    }

    /// Human-readable encoding name.
    pub fn encoding_name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "Unicode (UTF-8)",
            TextEncoding::Utf16 => "Unicode",
            TextEncoding::Utf16BigEndian => "Unicode (Big-Endian)",
            TextEncoding::Utf32 => "Unicode (UTF-32)",
            TextEncoding::Ascii => "US-ASCII",
            TextEncoding::Latin1 => "Western European (ISO)",
        }
    }

    /// IANA name as used in `Content-Type` charsets.
    pub fn web_name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Utf16BigEndian => "utf-16BE",
            TextEncoding::Utf32 => "utf-32",
            TextEncoding::Ascii => "us-ascii",
            TextEncoding::Latin1 => "iso-8859-1",
        }
    }

    /// Resolve an encoding from its web name (case-insensitive).
    pub fn from_web_name(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|encoding| encoding.web_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MappingError::invalid_argument(format!("unknown encoding '{name}'")))
    }

    pub fn descriptor(&self) -> EncodingDescriptor {
        EncodingDescriptor::from(*self)
    }
}

/// Serialized identity of a text encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingDescriptor {
    pub code_page: i32,
    pub encoding_name: String,
    pub web_name: String,
}

impl From<TextEncoding> for EncodingDescriptor {
    fn from(encoding: TextEncoding) -> Self {
        Self {
            code_page: encoding.code_page(),
            encoding_name: encoding.encoding_name().to_string(),
            web_name: encoding.web_name().to_string(),
        }
    }
}
