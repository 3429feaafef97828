//! Domain type definitions and their typed field setters.

use crate::error::{AssignError, AssignResult};
use docmap_core::{Entity, EntityHandle, Value};
use std::collections::HashMap;

/// Declared kind of a scalar attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    /// Any non-reference value.
    #[default]
    Any,
    String,
    Int,
    Float,
    Bool,
}

impl ValueType {
    /// Type name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Any => "Any",
            ValueType::String => "String",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::Bool => "Bool",
        }
    }

    /// Check if a value may be stored in an attribute of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_ref() {
            return false;
        }
        match (self, value) {
            (ValueType::Any, _) | (_, Value::Null) => true,
            (ValueType::String, Value::String(_)) => true,
            (ValueType::Int, Value::Int(_)) => true,
            // Int can be used where Float is expected
            (ValueType::Float, Value::Float(_) | Value::Int(_)) => true,
            (ValueType::Bool, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

/// What a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar attribute.
    Attribute(ValueType),
    /// Singular association to another domain type.
    BelongsTo { target: String },
    /// Ordered collection association to another domain type.
    HasMany { target: String },
}

impl FieldKind {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            FieldKind::Attribute(value_type) => format!("{} attribute", value_type.name()),
            FieldKind::BelongsTo { target } => format!("{} association", target),
            FieldKind::HasMany { target } => format!("collection of {}", target),
        }
    }
}

/// Field definition within a domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field kind.
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns true for scalar attributes.
    pub fn is_attribute(&self) -> bool {
        matches!(self.kind, FieldKind::Attribute(_))
    }

    /// Domain type referenced by an association field.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Attribute(_) => None,
            FieldKind::BelongsTo { target } | FieldKind::HasMany { target } => Some(target),
        }
    }
}

/// Domain type definition.
#[derive(Debug, Clone)]
pub struct DomainType {
    /// Type name.
    pub name: String,
    /// Field definitions.
    pub fields: HashMap<String, FieldDef>,
}

impl DomainType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Check if this type has a settable field or association.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Check if this type has a scalar attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_field(name).is_some_and(FieldDef::is_attribute)
    }

    /// Get all field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }

    /// Set a scalar attribute.
    ///
    /// Associations can never be overwritten through this path.
    pub fn assign_attribute(&self, entity: &mut Entity, field: &str, value: Value) -> AssignResult<()> {
        let def = self.field(field)?;
        match &def.kind {
            FieldKind::Attribute(value_type) if value_type.accepts(&value) => {
                entity.set(field, value);
                Ok(())
            }
            kind => Err(AssignError::type_mismatch(
                &self.name,
                field,
                kind.describe(),
                value.type_name(),
            )),
        }
    }

    /// Point a singular association at `target`.
    pub fn assign_link(
        &self,
        entity: &mut Entity,
        field: &str,
        target: EntityHandle,
        target_type: &str,
    ) -> AssignResult<()> {
        let def = self.field(field)?;
        match &def.kind {
            FieldKind::BelongsTo { target: expected } if expected == target_type => {
                entity.set(field, Value::Ref(target));
                Ok(())
            }
            kind => Err(AssignError::type_mismatch(
                &self.name,
                field,
                kind.describe(),
                target_type,
            )),
        }
    }

    /// Append `target` to a collection association.
    pub fn append_link(
        &self,
        entity: &mut Entity,
        field: &str,
        target: EntityHandle,
        target_type: &str,
    ) -> AssignResult<()> {
        let def = self.field(field)?;
        match &def.kind {
            FieldKind::HasMany { target: expected } if expected == target_type => {
                entity.push(field, Value::Ref(target));
                Ok(())
            }
            kind => Err(AssignError::type_mismatch(
                &self.name,
                field,
                kind.describe(),
                format!("collection of {}", target_type),
            )),
        }
    }

    fn field(&self, name: &str) -> AssignResult<&FieldDef> {
        self.get_field(name)
            .ok_or_else(|| AssignError::unknown_field(&self.name, name))
    }
}
