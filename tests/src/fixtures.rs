//! Shared domain and seeded store.
//!
//! The world mirrors a small people/pets schema:
//! - `Person`: name, country, admin, pet_id, parent -> Person, pet -> PetDog,
//!   children -> [Person]
//! - `PetDog`: name, country, age, person -> Person; `name` must be present
//!
//! Seeded rows: bob and ana in uruguay, ari in belgium, the dog ace in uruguay.

use docmap_core::{attrs, Entity, Value};
use docmap_mapper::{MapperError, Mapping};
use docmap_registry::{DomainRegistry, DomainRegistryBuilder, RenameTable, ValueType};
use docmap_store::MemoryStore;
use serde_json::{json, Value as JsonValue};

/// Build the test domain registry.
pub fn registry() -> DomainRegistry {
    let mut builder = DomainRegistryBuilder::new();
    builder
        .add_type("Person")
        .typed_attr("name", ValueType::String)
        .typed_attr("country", ValueType::String)
        .typed_attr("admin", ValueType::Bool)
        .attr("pet_id")
        .belongs_to("parent", "Person")
        .belongs_to("pet", "PetDog")
        .has_many("children", "Person")
        .done()
        .expect("Person is well formed");
    builder
        .add_type("PetDog")
        .typed_attr("name", ValueType::String)
        .typed_attr("country", ValueType::String)
        .typed_attr("age", ValueType::Int)
        .belongs_to("person", "Person")
        .done()
        .expect("PetDog is well formed");
    builder.build().expect("associations resolve")
}

/// Registry, seeded store and the ids of the seeded rows.
pub struct World {
    pub registry: DomainRegistry,
    pub store: MemoryStore,
    pub bob: String,
    pub ana: String,
    pub ari: String,
    pub ace: String,
}

impl World {
    pub fn new() -> Self {
        let mut store = MemoryStore::new();
        store.validates_presence_of("PetDog", "name");

        let bob = store.create("Person", person("bob", "uruguay"));
        let ana = store.create("Person", person("ana", "uruguay"));
        let ari = store.create("Person", person("ari", "belgium"));
        let ace = store.create("PetDog", attrs! { "name" => "ace", "country" => "uruguay" });

        Self {
            registry: registry(),
            store,
            bob,
            ana,
            ari,
            ace,
        }
    }

    pub fn map(&self, document: &JsonValue, rules: &JsonValue) -> Result<Mapping, MapperError> {
        docmap_mapper::map(&self.registry, &self.store, document, rules, None)
    }

    pub fn map_renamed(
        &self,
        document: &JsonValue,
        rules: &JsonValue,
        renames: RenameTable,
    ) -> Result<Mapping, MapperError> {
        docmap_mapper::map(&self.registry, &self.store, document, rules, Some(renames))
    }

    pub fn map_unsafe(
        &self,
        document: &JsonValue,
        unscoped: &[&str],
        rules: &JsonValue,
    ) -> Result<Mapping, MapperError> {
        docmap_mapper::map_unsafe(
            &self.registry,
            &self.store,
            document,
            rules,
            unscoped.iter().copied(),
            None,
        )
    }

    pub fn save_all(&mut self, mapping: &mut Mapping) -> Result<bool, MapperError> {
        docmap_mapper::save_all(mapping, &mut self.store)
    }

    /// Reload a stored row.
    pub fn reload(&self, domain_type: &str, id: &str) -> Entity {
        self.store
            .find(domain_type, id)
            .unwrap_or_else(|| panic!("{} {} is stored", domain_type, id))
    }

    /// Stored string field of a row.
    pub fn string(&self, domain_type: &str, id: &str, field: &str) -> Option<String> {
        self.reload(domain_type, id).get_str(field).map(String::from)
    }

    /// Id stored in a singular association of a row.
    pub fn link(&self, domain_type: &str, id: &str, field: &str) -> Option<String> {
        self.string(domain_type, id, field)
    }

    /// Ids stored in a collection association of a row.
    pub fn links(&self, domain_type: &str, id: &str, field: &str) -> Vec<String> {
        self.reload(domain_type, id)
            .get(field)
            .and_then(Value::as_list)
            .map(|items| items.iter().filter_map(|v| v.as_str().map(String::from)).collect())
            .unwrap_or_default()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn person(name: &str, country: &str) -> docmap_core::Attributes {
    attrs! { "name" => name, "country" => country, "admin" => false }
}

/// Rules permitting names and singular associations, scoped to uruguay.
pub fn standard_rules() -> JsonValue {
    json!({
        "people": ["name", "pet", "parent", { "country": "uruguay" }],
        "pet_dogs": ["name", { "country": "uruguay" }]
    })
}

/// Renames bob to rob, makes bob and ana each other's parent and gives
/// both the same new dog.
pub fn doc_updating_bob_ana_and_adding_pet(world: &World) -> JsonValue {
    json!({
        "data": {
            "type": "people",
            "id": world.bob,
            "attributes": { "name": "rob", "admin": true },
            "relationships": {
                "pet": { "data": { "type": "pet_dogs", "id": "@1" } },
                "parent": { "data": { "type": "people", "id": world.ana } }
            }
        },
        "included": [
            {
                "type": "people",
                "id": world.ana,
                "relationships": {
                    "pet": { "data": { "type": "pet_dogs", "id": "@1" } },
                    "parent": { "data": { "type": "people", "id": world.bob } }
                }
            },
            { "type": "pet_dogs", "id": "@1", "attributes": { "name": "ace" } }
        ]
    })
}
