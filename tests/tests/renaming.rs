//! Wire names that differ from domain names.

use docmap_tests::prelude::*;

fn renames() -> RenameTable {
    RenameTable::new()
        .with_type("persons", "Person")
        .with_type("pets", "PetDog")
        .with_attribute("persons", "handle", "name")
        .with_attribute("persons", "dog", "pet")
        .with_attribute("persons", "parental_figure", "parent")
        .with_attribute("pets", "nickname", "name")
}

fn renamed_document(world: &World) -> JsonValue {
    json!({
        "data": {
            "type": "persons",
            "id": world.bob,
            "attributes": { "handle": "rob", "admin": true },
            "relationships": {
                "dog": { "data": { "type": "pets", "id": "@1" } },
                "parental_figure": { "data": { "type": "persons", "id": world.ana } }
            }
        },
        "included": [
            {
                "type": "persons",
                "id": world.ana,
                "relationships": {
                    "dog": { "data": { "type": "pets", "id": "@1" } },
                    "parental_figure": { "data": { "type": "persons", "id": world.bob } }
                }
            },
            { "type": "pets", "id": "@1", "attributes": { "nickname": "ace" } }
        ]
    })
}

#[test]
fn test_maps_renamed_types_attributes_and_relationships() {
    // GIVEN
    let mut world = World::new();
    let document = renamed_document(&world);
    let rules = json!({
        "persons": ["handle", "dog", "parental_figure", { "country": "uruguay" }],
        "pets": ["nickname", { "country": "uruguay" }]
    });

    // WHEN
    let mut mapping = world.map_renamed(&document, &rules, renames()).unwrap();
    world.save_all(&mut mapping).unwrap();

    // THEN
    assert_eq!(world.string("Person", &world.bob, "name").as_deref(), Some("rob"));
    assert_eq!(world.link("Person", &world.bob, "parent"), Some(world.ana.clone()));
    assert_eq!(world.link("Person", &world.ana, "parent"), Some(world.bob.clone()));

    let pet = world.link("Person", &world.bob, "pet").unwrap();
    assert_eq!(world.link("Person", &world.ana, "pet"), Some(pet.clone()));
    assert_eq!(world.string("PetDog", &pet, "name").as_deref(), Some("ace"));
    assert_eq!(world.string("PetDog", &pet, "country").as_deref(), Some("uruguay"));
}

#[test]
fn test_cannot_write_scope_attribute_through_a_rename() {
    let world = World::new();
    let document = renamed_document(&world);
    let renames = RenameTable::new()
        .with_attribute("pet_dogs", "nickname", "name")
        .with_attribute("pet_dogs", "nationality", "country");
    let rules = json!({ "pet_dogs": ["nationality", { "country": "uruguay" }] });

    let err = world.map_renamed(&document, &rules, renames).unwrap_err();

    assert!(matches!(err, MapperError::Compile(CompileError::ScopeCollision { .. })));
}

#[test]
fn test_unrenamed_wire_types_are_ignored() {
    // `persons` has no rule of its own here, so the renamed document maps nothing.
    let world = World::new();
    let document = renamed_document(&world);

    let mapping = world.map(&document, &standard_rules()).unwrap();

    assert!(!mapping.is_single());
    assert!(mapping.included_handles().is_empty());
}

#[test]
fn test_config_loaded_from_json() {
    // GIVEN
    let mut world = World::new();
    let document = renamed_document(&world);
    let config = MapperConfig::from_json(json!({
        "rules": {
            "persons": ["handle", "dog", "parental_figure", { "country": "uruguay" }],
            "pets": ["nickname", { "country": "uruguay" }]
        },
        "renames": {
            "types": { "persons": "Person", "pets": "PetDog" },
            "attributes": {
                "persons": { "handle": "name", "dog": "pet", "parental_figure": "parent" },
                "pets": { "nickname": "name" }
            }
        }
    }))
    .unwrap();

    // WHEN
    let mapper = config.compile(&world.registry).unwrap();
    let mut mapping = mapper.map(&document, &world.store).unwrap();
    let saved = mapper.save_all(&mut mapping, &mut world.store).unwrap();

    // THEN
    assert!(saved);
    assert_eq!(world.string("Person", &world.bob, "name").as_deref(), Some("rob"));
}
