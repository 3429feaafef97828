//! Rule compilation: per-type whitelists and scopes -> `TypeDescriptor`s.
//!
//! A rule declaration maps each wire type to a list of whitelisted names
//! followed by a scope object:
//!
//! ```json
//! { "people": ["name", "pet", { "country": "uruguay" }] }
//! ```
//!
//! Compilation is the only place where names are checked against the
//! domain registry. After it succeeds the mapper never probes for fields
//! again.

use crate::error::{CompileError, CompileResult};
use crate::{default_domain_type_name, DomainRegistry, DomainType, FieldKind, RenameTable};
use docmap_core::{Scope, Value};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Compiled rule for one wire type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type name as written in documents.
    pub wire_name: String,
    /// Domain type the wire type resolves to.
    pub domain_type: String,
    /// Whitelisted wire names mapped to their domain field names.
    whitelist: BTreeMap<String, String>,
    /// Scope fields, force-applied on creation and used to filter lookups.
    pub scope: Scope,
}

impl TypeDescriptor {
    /// Domain field for a whitelisted wire name.
    pub fn permits(&self, wire_field: &str) -> Option<&str> {
        self.whitelist.get(wire_field).map(String::as_str)
    }

    /// Whitelisted (wire name, domain name) pairs.
    pub fn whitelist(&self) -> impl Iterator<Item = (&str, &str)> {
        self.whitelist.iter().map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// Whitelisted domain field names.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.whitelist.values().map(String::as_str)
    }

    /// Returns true if the type carries at least one scope constraint.
    pub fn is_scoped(&self) -> bool {
        !self.scope.is_empty()
    }
}

/// The complete compiled ruleset, keyed by wire type.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    descriptors: HashMap<String, TypeDescriptor>,
}

impl Ruleset {
    /// Get the descriptor for a wire type.
    pub fn get(&self, wire_type: &str) -> Option<&TypeDescriptor> {
        self.descriptors.get(wire_type)
    }

    /// Number of compiled wire types.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no wire type is permitted.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterate over all descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors.values()
    }
}

/// Compiles raw rule declarations against a domain registry.
pub struct RuleCompiler<'a> {
    registry: &'a DomainRegistry,
    renames: &'a RenameTable,
    unscoped: HashSet<String>,
}

impl<'a> RuleCompiler<'a> {
    pub fn new(registry: &'a DomainRegistry, renames: &'a RenameTable) -> Self {
        Self {
            registry,
            renames,
            unscoped: HashSet::new(),
        }
    }

    /// Let the named wire types omit the trailing scope object.
    pub fn allow_unscoped<I, S>(mut self, wire_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unscoped.extend(wire_types.into_iter().map(Into::into));
        self
    }

    /// Compile every declared wire type.
    pub fn compile(&self, rules: &JsonValue) -> CompileResult<Ruleset> {
        let declarations = rules
            .as_object()
            .ok_or_else(|| CompileError::malformed("rules must be an object keyed by type"))?;

        let mut descriptors = HashMap::with_capacity(declarations.len());
        for (wire_type, declaration) in declarations {
            let descriptor = self.compile_type(wire_type, declaration)?;
            tracing::debug!(
                wire_type = %wire_type,
                domain_type = %descriptor.domain_type,
                fields = descriptor.whitelist.len(),
                scoped = descriptor.is_scoped(),
                "compiled rule"
            );
            descriptors.insert(wire_type.clone(), descriptor);
        }

        Ok(Ruleset { descriptors })
    }

    fn compile_type(&self, wire_type: &str, declaration: &JsonValue) -> CompileResult<TypeDescriptor> {
        let entries = declaration.as_array().ok_or_else(|| {
            CompileError::malformed(format!("rule for {} must be a list", wire_type))
        })?;

        let (names, scope_decl) = match entries.split_last() {
            Some((JsonValue::Object(scope), names)) => (names, Some(scope)),
            _ if self.unscoped.contains(wire_type) => (entries.as_slice(), None),
            _ => return Err(CompileError::missing_scope(wire_type)),
        };

        let mut wire_names = Vec::with_capacity(names.len());
        for entry in names {
            match entry.as_str() {
                Some(name) => wire_names.push(name),
                None => return Err(CompileError::invalid_entry(wire_type, entry.to_string())),
            }
        }

        let mut scope = Scope::new();
        for (field, raw) in scope_decl.into_iter().flatten() {
            let value = Value::from(raw);
            if !value.is_scalar() {
                return Err(CompileError::invalid_entry(
                    wire_type,
                    format!("{}: {}", field, raw),
                ));
            }
            scope.insert(field.clone(), value);
        }

        // Scope fields may never be client-writable, whatever they are renamed from
        let mut whitelist = BTreeMap::new();
        for wire_name in wire_names {
            let domain_name = self.renames.domain_attribute(wire_type, wire_name);
            if scope.contains_key(domain_name) {
                return Err(CompileError::scope_collision(wire_type, domain_name));
            }
            whitelist.insert(wire_name.to_string(), domain_name.to_string());
        }

        let domain = self.resolve_type(wire_type)?;
        for domain_name in whitelist.values() {
            if !domain.has_field(domain_name) {
                return Err(CompileError::unknown_field(&domain.name, domain_name));
            }
        }
        for (field, value) in &scope {
            match domain.get_field(field).map(|def| &def.kind) {
                Some(FieldKind::Attribute(value_type)) if value_type.accepts(value) => {}
                Some(FieldKind::Attribute(value_type)) => {
                    return Err(CompileError::invalid_entry(
                        wire_type,
                        format!("{}: expected {}, got {}", field, value_type.name(), value.type_name()),
                    ));
                }
                _ => return Err(CompileError::unknown_field(&domain.name, field)),
            }
        }

        Ok(TypeDescriptor {
            wire_name: wire_type.to_string(),
            domain_type: domain.name.clone(),
            whitelist,
            scope,
        })
    }

    fn resolve_type(&self, wire_type: &str) -> CompileResult<&'a DomainType> {
        let name = match self.renames.domain_type(wire_type) {
            Some(name) => name.to_string(),
            None => default_domain_type_name(wire_type),
        };
        self.registry
            .get_type(&name)
            .ok_or_else(|| CompileError::unknown_type(name))
    }
}
