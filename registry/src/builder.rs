//! DomainRegistryBuilder for constructing an immutable DomainRegistry.

use crate::{DomainRegistry, DomainType, FieldDef, FieldKind, ValueType};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate field {field} on type {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("Unknown association target {target} for {type_name}.{field}")]
    UnknownTarget {
        type_name: String,
        field: String,
        target: String,
    },
}

/// Builder for constructing an immutable DomainRegistry.
#[derive(Debug, Default)]
pub struct DomainRegistryBuilder {
    /// Types being built.
    types: HashMap<String, DomainType>,
}

impl DomainRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a domain type definition.
    pub fn add_type(&mut self, name: impl Into<String>) -> DomainTypeBuilder<'_> {
        DomainTypeBuilder {
            builder: self,
            name: name.into(),
            fields: HashMap::new(),
            duplicate: None,
        }
    }

    /// Build the immutable DomainRegistry.
    pub fn build(self) -> Result<DomainRegistry, RegistryError> {
        // Every association must point at a registered type
        for ty in self.types.values() {
            for field in ty.fields.values() {
                if let Some(target) = field.target() {
                    if !self.types.contains_key(target) {
                        return Err(RegistryError::UnknownTarget {
                            type_name: ty.name.clone(),
                            field: field.name.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }

        Ok(DomainRegistry::new(self.types))
    }
}

/// Builder for a domain type definition.
pub struct DomainTypeBuilder<'a> {
    builder: &'a mut DomainRegistryBuilder,
    name: String,
    fields: HashMap<String, FieldDef>,
    duplicate: Option<String>,
}

impl<'a> DomainTypeBuilder<'a> {
    /// Add an untyped scalar attribute.
    pub fn attr(self, name: impl Into<String>) -> Self {
        self.typed_attr(name, ValueType::Any)
    }

    /// Add a scalar attribute with a declared value type.
    pub fn typed_attr(self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.field(FieldDef::new(name, FieldKind::Attribute(value_type)))
    }

    /// Add a singular association.
    pub fn belongs_to(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(FieldDef::new(
            name,
            FieldKind::BelongsTo {
                target: target.into(),
            },
        ))
    }

    /// Add a collection association.
    pub fn has_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(FieldDef::new(
            name,
            FieldKind::HasMany {
                target: target.into(),
            },
        ))
    }

    fn field(mut self, def: FieldDef) -> Self {
        if self.fields.contains_key(&def.name) && self.duplicate.is_none() {
            self.duplicate = Some(def.name.clone());
        }
        self.fields.insert(def.name.clone(), def);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<(), RegistryError> {
        // Check for duplicate name
        if self.builder.types.contains_key(&self.name) {
            return Err(RegistryError::DuplicateTypeName(self.name));
        }

        if let Some(field) = self.duplicate {
            return Err(RegistryError::DuplicateField {
                type_name: self.name,
                field,
            });
        }

        let domain_type = DomainType {
            name: self.name.clone(),
            fields: self.fields,
        };
        self.builder.types.insert(self.name, domain_type);

        Ok(())
    }
}
