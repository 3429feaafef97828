//! Top-level document.

use crate::Resource;
use serde_json::Value as JsonValue;

/// Shape of the primary `data` member.
///
/// Entries that failed to parse are kept as `None` so positions still match
/// the original document.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryData {
    /// No `data` member, or `data: null`.
    Absent,
    /// `data` was a single object.
    Single(Option<Resource>),
    /// `data` was an array.
    Many(Vec<Option<Resource>>),
}

impl PrimaryData {
    pub fn is_collection(&self) -> bool {
        matches!(self, PrimaryData::Many(_))
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub data: PrimaryData,
    /// Included resources in document order, `None` where unparseable.
    pub included: Vec<Option<Resource>>,
}

impl Document {
    /// Read a document. Never fails: anything unusable is simply absent.
    pub fn from_json(json: &JsonValue) -> Self {
        let data = match json.get("data") {
            None | Some(JsonValue::Null) => PrimaryData::Absent,
            Some(JsonValue::Array(items)) => {
                PrimaryData::Many(items.iter().map(Resource::parse).collect())
            }
            Some(other) => PrimaryData::Single(Resource::parse(other)),
        };

        let included = match json.get("included") {
            Some(JsonValue::Array(items)) => items.iter().map(Resource::parse).collect(),
            _ => Vec::new(),
        };

        Self { data, included }
    }

    /// Count of resources that parsed successfully.
    pub fn resource_count(&self) -> usize {
        let primary = match &self.data {
            PrimaryData::Absent => 0,
            PrimaryData::Single(resource) => usize::from(resource.is_some()),
            PrimaryData::Many(items) => items.iter().flatten().count(),
        };
        primary + self.included.iter().flatten().count()
    }
}
