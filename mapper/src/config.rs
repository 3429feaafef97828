//! Serde-loadable mapper configuration.

use docmap_registry::{DomainRegistry, RenameTable};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::{ConfigError, MapperResult};
use crate::mapper::DocumentMapper;

/// Rules, renames and unscoped types in one document:
///
/// ```json
/// {
///   "rules": { "people": ["name", { "country": "uruguay" }] },
///   "renames": { "types": { "persons": "Person" } },
///   "unscoped": ["pet_dogs"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapperConfig {
    /// Raw rule declarations; checked when compiled.
    pub rules: JsonValue,
    #[serde(default)]
    pub renames: RenameTable,
    /// Wire types allowed to omit their scope.
    #[serde(default)]
    pub unscoped: Vec<String>,
}

impl MapperConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json(value: JsonValue) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Compile against a registry. Takes the unscoped path only when some
    /// type is declared unscoped.
    pub fn compile<'r>(&self, registry: &'r DomainRegistry) -> MapperResult<DocumentMapper<'r>> {
        if self.unscoped.is_empty() {
            DocumentMapper::new(registry, &self.rules, self.renames.clone())
        } else {
            tracing::warn!(unscoped = ?self.unscoped, "compiling rules with unscoped types");
            DocumentMapper::new_unsafe(
                registry,
                &self.rules,
                self.unscoped.iter().cloned(),
                self.renames.clone(),
            )
        }
    }
}
