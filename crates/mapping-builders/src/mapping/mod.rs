//! A complete mapping: request constraints paired with the response to serve.

mod store;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::request::RequestSpecification;
use crate::response::ResponseSpecification;

pub use store::{load_mapping, load_mappings, save_mapping};

/// Request/response pair submitted to the mock service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Lower values win when several mappings match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub request: RequestSpecification,
    pub response: ResponseSpecification,
}

impl MappingSpecification {
    pub fn new(request: RequestSpecification, response: ResponseSpecification) -> Self {
        Self {
            guid: None,
            title: None,
            priority: None,
            request,
            response,
        }
    }

    pub fn with_guid(mut self, guid: Uuid) -> Self {
        self.guid = Some(guid);
        self
    }

    /// Assign a random (v4) guid.
    pub fn with_new_guid(self) -> Self {
        self.with_guid(Uuid::new_v4())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
