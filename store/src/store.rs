//! In-memory repository.

use docmap_core::{
    Attributes, Entity, EntityHandle, EntitySet, FieldErrors, Repository, RepositoryError,
    RepositoryResult, Scope, Value,
};
use std::collections::{BTreeMap, HashMap};

use crate::Validation;

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    rows: BTreeMap<u64, Attributes>,
}

impl Table {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.rows.insert(self.next_id, Attributes::new());
        self.next_id
    }
}

/// In-memory store keyed by domain type and sequential numeric ids.
///
/// Associations are stored as the target's id: a string for singular
/// associations, a list of strings for collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Table>,
    validations: HashMap<String, Vec<Validation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` of `domain_type` to be present on save.
    pub fn validates_presence_of(
        &mut self,
        domain_type: impl Into<String>,
        field: impl Into<String>,
    ) -> &mut Self {
        self.validations
            .entry(domain_type.into())
            .or_default()
            .push(Validation::Presence(field.into()));
        self
    }

    /// Insert a row directly, bypassing validation. Returns its id.
    pub fn create(&mut self, domain_type: &str, fields: Attributes) -> String {
        let table = self.tables.entry(domain_type.to_string()).or_default();
        let id = table.allocate();
        table.rows.insert(id, fields);
        id.to_string()
    }

    /// Load a row as a persisted entity, ignoring any scope.
    pub fn find(&self, domain_type: &str, id: &str) -> Option<Entity> {
        let key = id.parse::<u64>().ok()?;
        let row = self.tables.get(domain_type)?.rows.get(&key)?;
        Some(Entity::persisted(domain_type, id, row.clone()))
    }

    /// All rows of a type in id order.
    pub fn all(&self, domain_type: &str) -> Vec<Entity> {
        self.tables
            .get(domain_type)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|(id, row)| Entity::persisted(domain_type, id.to_string(), row.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self, domain_type: &str) -> usize {
        self.tables.get(domain_type).map_or(0, |t| t.rows.len())
    }

    /// Number of rows whose `field` equals `value`.
    pub fn count_where(&self, domain_type: &str, field: &str, value: &Value) -> usize {
        self.tables.get(domain_type).map_or(0, |t| {
            t.rows
                .values()
                .filter(|row| row.get(field) == Some(value))
                .count()
        })
    }

    /// Give the entity a key if it does not have one yet.
    fn ensure_id(&mut self, handle: EntityHandle, entities: &mut EntitySet) -> RepositoryResult<String> {
        let entity = entities
            .get_mut(handle)
            .ok_or(RepositoryError::UnknownHandle(handle))?;
        if let Some(id) = &entity.id {
            return Ok(id.clone());
        }
        let id = self
            .tables
            .entry(entity.domain_type.clone())
            .or_default()
            .allocate()
            .to_string();
        entity.id = Some(id.clone());
        Ok(id)
    }

    /// Replace entity references by the referenced ids.
    fn stored_value(&mut self, value: &Value, entities: &mut EntitySet) -> RepositoryResult<Value> {
        match value {
            Value::Ref(target) => Ok(Value::String(self.ensure_id(*target, entities)?)),
            Value::List(items) => {
                let mut stored = Vec::with_capacity(items.len());
                for item in items {
                    stored.push(self.stored_value(item, entities)?);
                }
                Ok(Value::List(stored))
            }
            other => Ok(other.clone()),
        }
    }
}

fn matches_scope(row: &Attributes, scope: &Scope) -> bool {
    scope
        .iter()
        .all(|(field, expected)| row.get(field).map_or(expected.is_null(), |v| v == expected))
}

impl Repository for MemoryStore {
    fn find_scoped(&self, domain_type: &str, scope: &Scope, id: &str) -> RepositoryResult<Entity> {
        self.find(domain_type, id)
            .filter(|entity| matches_scope(&entity.fields, scope))
            .ok_or_else(|| RepositoryError::not_found(domain_type, id))
    }

    fn validate(&self, entity: &Entity) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for validation in self.validations.get(&entity.domain_type).into_iter().flatten() {
            validation.check(entity, &mut errors);
        }
        errors
    }

    fn save(&mut self, handle: EntityHandle, entities: &mut EntitySet) -> RepositoryResult<()> {
        let id = self.ensure_id(handle, entities)?;
        let (domain_type, fields) = match entities.get(handle) {
            Some(entity) => (entity.domain_type.clone(), entity.fields.clone()),
            None => return Err(RepositoryError::UnknownHandle(handle)),
        };

        let mut row = Attributes::with_capacity(fields.len());
        for (name, value) in &fields {
            row.insert(name.clone(), self.stored_value(value, entities)?);
        }

        let key = id
            .parse::<u64>()
            .map_err(|_| RepositoryError::backend(format!("malformed {} id {}", domain_type, id)))?;
        self.tables
            .entry(domain_type.clone())
            .or_default()
            .rows
            .insert(key, row);
        tracing::debug!(domain_type = %domain_type, id = %id, "saved entity");
        Ok(())
    }
}
