//! Resource objects and relationship references.

use docmap_core::is_temporary_id;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

/// `(type, id)` pair naming a resource within a document or a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceIdentifier {
    /// Wire type name.
    pub type_name: String,
    /// Raw id as written in the document, temporary ids included.
    pub raw_id: Option<String>,
}

impl ResourceIdentifier {
    pub fn new(type_name: impl Into<String>, raw_id: Option<String>) -> Self {
        Self {
            type_name: type_name.into(),
            raw_id,
        }
    }

    /// Identifier with a concrete id.
    pub fn with_id(type_name: impl Into<String>, raw_id: impl Into<String>) -> Self {
        Self::new(type_name, Some(raw_id.into()))
    }

    /// Returns true if the id names a document-local resource.
    pub fn is_temporary(&self) -> bool {
        self.raw_id.as_deref().is_some_and(is_temporary_id)
    }

    /// Returns true if the resource must be created rather than looked up.
    pub fn is_new(&self) -> bool {
        self.raw_id.is_none() || self.is_temporary()
    }

    /// Parse a `{type, id}` reference. Both members are required.
    pub fn parse_reference(json: &JsonValue) -> Option<Self> {
        let object = json.as_object()?;
        let type_name = object.get("type")?.as_str()?;
        let raw_id = object.get("id").and_then(parse_id)?;
        Some(Self::with_id(type_name, raw_id))
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_id {
            Some(id) => write!(f, "{}/{}", self.type_name, id),
            None => write!(f, "{}/<new>", self.type_name),
        }
    }
}

/// Resolved `data` member of a relationship entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipData {
    /// To-one reference.
    Single(ResourceIdentifier),
    /// To-many references in document order.
    Many(Vec<ResourceIdentifier>),
    /// Null, missing, empty or unusable data.
    Empty,
}

impl RelationshipData {
    /// Parse one relationship entry (`{"data": ...}`).
    pub fn parse(entry: &JsonValue) -> Self {
        let data = match entry.as_object().and_then(|o| o.get("data")) {
            Some(data) => data,
            None => return RelationshipData::Empty,
        };

        match data {
            JsonValue::Array(items) => {
                let ids: Vec<_> = items
                    .iter()
                    .filter_map(ResourceIdentifier::parse_reference)
                    .collect();
                if ids.is_empty() {
                    RelationshipData::Empty
                } else {
                    RelationshipData::Many(ids)
                }
            }
            other => ResourceIdentifier::parse_reference(other)
                .map_or(RelationshipData::Empty, RelationshipData::Single),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RelationshipData::Empty)
    }
}

/// A resource object.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub identifier: ResourceIdentifier,
    /// Raw attribute values keyed by wire name.
    pub attributes: Map<String, JsonValue>,
    /// Usable relationship entries keyed by wire name. Empty entries are dropped.
    pub relationships: BTreeMap<String, RelationshipData>,
}

impl Resource {
    /// Parse one resource object.
    ///
    /// Returns `None` when the value is not an object, lacks a string `type`,
    /// or carries `attributes`/`relationships` that are not objects.
    pub fn parse(json: &JsonValue) -> Option<Self> {
        let object = json.as_object()?;
        let type_name = object.get("type")?.as_str()?;
        let raw_id = object.get("id").and_then(parse_id);

        let attributes = match object.get("attributes") {
            None | Some(JsonValue::Null) => Map::new(),
            Some(JsonValue::Object(attrs)) => attrs.clone(),
            Some(_) => return None,
        };

        let relationships = match object.get("relationships") {
            None | Some(JsonValue::Null) => BTreeMap::new(),
            Some(JsonValue::Object(entries)) => entries
                .iter()
                .map(|(name, entry)| (name.clone(), RelationshipData::parse(entry)))
                .filter(|(_, data)| !data.is_empty())
                .collect(),
            Some(_) => return None,
        };

        Some(Self {
            identifier: ResourceIdentifier::new(type_name, raw_id),
            attributes,
            relationships,
        })
    }

    /// Wire type name.
    pub fn type_name(&self) -> &str {
        &self.identifier.type_name
    }

    /// Raw id, if the resource carries one.
    pub fn raw_id(&self) -> Option<&str> {
        self.identifier.raw_id.as_deref()
    }
}

// Ids are strings on the wire, but numeric ids are common enough to accept.
fn parse_id(json: &JsonValue) -> Option<String> {
    match json {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
