//! JSON:API error documents built from validation failures.

use docmap_registry::RenameTable;
use regex_lite::Regex;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::result::{MappedResource, Mapping, Primary};

/// Status reported for every validation failure.
const UNPROCESSABLE: &str = "422";

/// `{ "errors": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Serialise to a JSON value.
    pub fn to_json(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }
}

/// One failed field of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
    pub detail: String,
    pub code: String,
    pub meta: ErrorMeta,
    pub source: ErrorSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMeta {
    /// Wire type of the resource.
    #[serde(rename = "type")]
    pub wire_type: String,
    /// Persisted id, absent for new entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSource {
    pub pointer: String,
}

/// Build the error document for every invalid primary and included entity.
///
/// Field names and types are reported in wire vocabulary. An entity that
/// appears more than once is reported at its first position.
pub fn error_report(mapping: &Mapping, renames: &RenameTable) -> ErrorDocument {
    let primary = match mapping.primary() {
        Primary::Missing => Vec::new(),
        Primary::Single(resource) => vec![(resource, "/data".to_string())],
        Primary::Collection(resources) => resources
            .iter()
            .map(|r| (r, section_pointer("/data", r)))
            .collect(),
    };
    let included = mapping
        .included()
        .iter()
        .map(|r| (r, section_pointer("/included", r)));

    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    for (resource, base) in primary.into_iter().chain(included) {
        if !seen.insert(resource.handle) {
            continue;
        }
        let Some(entity) = mapping.entity(resource.handle) else {
            continue;
        };
        for failure in &entity.errors {
            let field = renames.wire_attribute(&resource.wire_type, &failure.field);
            errors.push(ErrorObject {
                status: UNPROCESSABLE.to_string(),
                title: failure.message.clone(),
                detail: failure.message.clone(),
                code: error_code(&failure.message),
                meta: ErrorMeta {
                    wire_type: resource.wire_type.clone(),
                    id: entity.id.clone(),
                },
                source: ErrorSource {
                    pointer: format!("{}/attributes/{}", base, field),
                },
            });
        }
    }

    ErrorDocument { errors }
}

fn section_pointer(section: &str, resource: &MappedResource) -> String {
    match resource.position {
        Some(position) => format!("{}/{}", section, position),
        None => section.to_string(),
    }
}

fn non_alphanumeric() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[^a-z0-9]+").ok()).as_ref()
}

/// Machine code for a validation message: `"can't be blank"` -> `can_t_be_blank`.
pub fn error_code(message: &str) -> String {
    let lower = message.to_lowercase();
    let code = match non_alphanumeric() {
        Some(pattern) => pattern.replace_all(&lower, "_").into_owned(),
        None => lower,
    };
    code.trim_matches('_').to_string()
}
