//! Wire vocabulary <-> domain vocabulary.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Caller-supplied renames between document names and domain names.
///
/// Type renames map a wire type to a domain type. Attribute renames are
/// scoped per wire type. Absent entries mean identity.
///
/// When several wire names of one type map to the same domain field, the
/// first one declared is the one reported back. Deserialized tables declare
/// wire names in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RenameDecl")]
pub struct RenameTable {
    types: HashMap<String, String>,
    attributes: HashMap<String, HashMap<String, String>>,
    /// Domain field -> wire name, per wire type.
    reverse: HashMap<String, HashMap<String, String>>,
}

/// Serialized form of a `RenameTable`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RenameDecl {
    types: BTreeMap<String, String>,
    attributes: BTreeMap<String, BTreeMap<String, String>>,
}

impl From<RenameDecl> for RenameTable {
    fn from(decl: RenameDecl) -> Self {
        let mut table = Self {
            types: decl.types.into_iter().collect(),
            ..Self::default()
        };
        for (wire_type, renames) in decl.attributes {
            for (wire_attr, domain_attr) in renames {
                table = table.with_attribute(wire_type.as_str(), wire_attr, domain_attr);
            }
        }
        table
    }
}

impl RenameTable {
    /// Create an empty (identity) table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a wire type to a domain type.
    pub fn with_type(mut self, wire_type: impl Into<String>, domain_type: impl Into<String>) -> Self {
        self.types.insert(wire_type.into(), domain_type.into());
        self
    }

    /// Map a wire attribute of `wire_type` to a domain field.
    pub fn with_attribute(
        mut self,
        wire_type: impl Into<String>,
        wire_attr: impl Into<String>,
        domain_attr: impl Into<String>,
    ) -> Self {
        let (wire_type, wire_attr, domain_attr) = (wire_type.into(), wire_attr.into(), domain_attr.into());
        let reverse = self.reverse.entry(wire_type.clone()).or_default();
        let previous = self
            .attributes
            .entry(wire_type)
            .or_default()
            .insert(wire_attr.clone(), domain_attr.clone());
        if let Some(previous) = previous {
            if reverse.get(&previous) == Some(&wire_attr) {
                reverse.remove(&previous);
            }
        }
        reverse.entry(domain_attr).or_insert(wire_attr);
        self
    }

    /// Explicit domain type for a wire type, if one was declared.
    pub fn domain_type(&self, wire_type: &str) -> Option<&str> {
        self.types.get(wire_type).map(String::as_str)
    }

    /// Domain field name for a wire attribute.
    pub fn domain_attribute<'a>(&'a self, wire_type: &str, wire_attr: &'a str) -> &'a str {
        self.attributes
            .get(wire_type)
            .and_then(|renames| renames.get(wire_attr))
            .map_or(wire_attr, String::as_str)
    }

    /// Wire attribute name for a domain field.
    pub fn wire_attribute<'a>(&'a self, wire_type: &str, domain_attr: &'a str) -> &'a str {
        self.reverse
            .get(wire_type)
            .and_then(|renames| renames.get(domain_attr))
            .map_or(domain_attr, String::as_str)
    }

    /// Returns true if no rename was declared.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.attributes.values().all(HashMap::is_empty)
    }
}
