//! Field validations run by the store before saving.

use docmap_core::{Entity, FieldErrors, Value};

/// A declared validation on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The field must be set to a non-null, non-blank value.
    Presence(String),
}

impl Validation {
    /// Record a failure on `errors` if `entity` violates this validation.
    pub fn check(&self, entity: &Entity, errors: &mut FieldErrors) {
        match self {
            Validation::Presence(field) => {
                let blank = match entity.get(field) {
                    None | Some(Value::Null) => true,
                    Some(Value::String(s)) => s.trim().is_empty(),
                    Some(Value::List(items)) => items.is_empty(),
                    Some(_) => false,
                };
                if blank {
                    errors.add(field.clone(), "can't be blank");
                }
            }
        }
    }
}
