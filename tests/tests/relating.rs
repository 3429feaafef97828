//! Relationship resolution across data, included and the store.

use docmap_tests::prelude::*;

mod shared_targets {
    use super::*;

    #[test]
    fn test_same_new_resource_is_shared_by_every_reference() {
        // GIVEN
        let mut world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);

        // WHEN
        let mut mapping = world.map(&document, &standard_rules()).unwrap();

        // THEN
        let bob = mapping.data_handle().unwrap();
        let ana = mapping.included_handles()[0];
        let bob_pet = mapping.entity(bob).and_then(|e| e.get("pet").cloned());
        let ana_pet = mapping.entity(ana).and_then(|e| e.get("pet").cloned());
        assert!(matches!(bob_pet, Some(Value::Ref(_))));
        assert_eq!(bob_pet, ana_pet);

        world.save_all(&mut mapping).unwrap();
        let pet = world.link("Person", &world.bob, "pet").unwrap();
        assert_eq!(world.link("Person", &world.ana, "pet"), Some(pet.clone()));
        assert!(world.store.find("PetDog", &pet).is_some());
    }

    #[test]
    fn test_references_a_new_resource_from_included() {
        // GIVEN
        let mut world = World::new();
        let document = json!({
            "data": { "type": "people", "id": "@1", "attributes": { "name": "bob" } },
            "included": [{
                "type": "pet_dogs",
                "id": world.ace,
                "relationships": { "person": { "data": { "type": "people", "id": "@1" } } }
            }]
        });
        let rules = json!({
            "people": ["name", { "country": "uruguay" }],
            "pet_dogs": ["person", { "country": "uruguay" }]
        });

        // WHEN
        let mut mapping = world.map(&document, &rules).unwrap();
        assert!(world.save_all(&mut mapping).unwrap());

        // THEN
        let person = mapping.data().and_then(|e| e.id.clone());
        assert!(person.is_some());
        assert_eq!(world.link("PetDog", &world.ace, "person"), person);
    }

    #[test]
    fn test_creates_and_relates_only_in_inner_relationships() {
        // GIVEN
        let mut world = World::new();
        let document = json!({
            "data": { "type": "people", "id": world.bob, "attributes": {} },
            "included": [
                {
                    "type": "people",
                    "id": world.ana,
                    "relationships": { "pet": { "data": { "type": "pet_dogs", "id": "@1" } } }
                },
                { "type": "pet_dogs", "id": "@1", "attributes": { "name": "ace" } }
            ]
        });

        // WHEN
        let mut mapping = world.map(&document, &standard_rules()).unwrap();
        world.save_all(&mut mapping).unwrap();

        // THEN
        let pet = world.link("Person", &world.ana, "pet").unwrap();
        assert_eq!(world.string("PetDog", &pet, "name").as_deref(), Some("ace"));
        assert!(world.link("Person", &world.bob, "pet").is_none());
    }

    #[test]
    fn test_relates_existing_resources_with_scope_only_rules() {
        // GIVEN
        let mut world = World::new();
        let document = json!({
            "data": {
                "type": "people",
                "id": world.bob,
                "relationships": { "pet": { "data": { "type": "pet_dogs", "id": world.ace } } }
            }
        });
        let rules = json!({
            "people": ["pet", { "country": "uruguay" }],
            "pet_dogs": [{ "country": "uruguay" }]
        });

        // WHEN
        let mut mapping = world.map(&document, &rules).unwrap();
        world.save_all(&mut mapping).unwrap();

        // THEN
        assert_eq!(world.link("Person", &world.bob, "pet"), Some(world.ace.clone()));
    }

    #[test]
    fn test_collection_relationship_mixes_stored_and_new_targets() {
        let mut world = World::new();
        let document = json!({
            "data": {
                "type": "people",
                "id": world.bob,
                "relationships": { "children": { "data": [
                    { "type": "people", "id": world.ana },
                    { "type": "people", "id": "@1" }
                ]}}
            },
            "included": [{ "type": "people", "id": "@1", "attributes": { "name": "zoe" } }]
        });
        let rules = json!({
            "people": ["name", "children", { "country": "uruguay" }]
        });

        let mut mapping = world.map(&document, &rules).unwrap();
        world.save_all(&mut mapping).unwrap();

        let children = world.links("Person", &world.bob, "children");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], world.ana);
        assert_eq!(world.string("Person", &children[1], "name").as_deref(), Some("zoe"));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn test_undeclared_temporary_id_is_not_found() {
        // GIVEN
        let world = World::new();
        let document = json!({
            "data": {
                "type": "people",
                "id": world.bob,
                "attributes": { "name": "rob" },
                "relationships": { "pet": { "data": { "type": "pet_dogs", "id": "@1" } } }
            },
            "included": [{ "type": "people", "id": world.ana }]
        });

        // WHEN
        let err = world.map(&document, &standard_rules()).unwrap_err();

        // THEN
        assert!(matches!(err, MapperError::NotFound { ref id, .. } if id == "@1"));
        assert_eq!(world.string("Person", &world.bob, "name").as_deref(), Some("bob"));
    }

    #[test]
    fn test_remote_resource_not_found() {
        let world = World::new();
        let document = json!({
            "data": {
                "type": "people",
                "id": world.bob,
                "relationships": { "pet": { "data": { "type": "pet_dogs", "id": "999" } } }
            }
        });

        let err = world.map(&document, &standard_rules()).unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, MapperError::NotFound { ref domain_type, .. } if domain_type == "PetDog"));
    }

    #[test]
    fn test_primary_resource_not_found() {
        let world = World::new();
        let document = json!({ "data": { "type": "people", "id": "999" } });

        let err = world.map(&document, &standard_rules()).unwrap_err();

        assert!(err.is_not_found());
    }
}

mod fields {
    use super::*;

    #[test]
    fn test_plain_id_attribute_bypasses_relationships() {
        // GIVEN
        let mut world = World::new();
        let document = json!({
            "data": { "type": "people", "id": world.bob, "attributes": { "pet_id": world.ace } }
        });
        let rules = json!({ "people": ["pet_id", { "country": "uruguay" }] });

        // WHEN
        let mut mapping = world.map(&document, &rules).unwrap();
        world.save_all(&mut mapping).unwrap();

        // THEN
        assert_eq!(world.string("Person", &world.bob, "pet_id"), Some(world.ace.clone()));
    }

    #[test]
    fn test_association_cannot_be_set_from_an_attribute() {
        let world = World::new();
        let document = json!({
            "data": { "type": "people", "id": world.bob, "attributes": { "pet": world.ace } }
        });
        let rules = json!({ "people": ["pet", { "country": "uruguay" }] });

        let err = world.map(&document, &rules).unwrap_err();

        assert!(matches!(err, MapperError::TypeMismatch { ref field, .. } if field == "pet"));
    }

    #[test]
    fn test_null_attribute_for_an_association_is_ignored() {
        // GIVEN bob already has a pet
        let mut world = World::new();
        let first = json!({
            "data": {
                "type": "people",
                "id": world.bob,
                "relationships": { "pet": { "data": { "type": "pet_dogs", "id": world.ace } } }
            }
        });
        let mut mapping = world.map(&first, &standard_rules()).unwrap();
        world.save_all(&mut mapping).unwrap();

        // WHEN
        let document = json!({
            "data": { "type": "people", "id": world.bob, "attributes": { "name": "rob", "pet": null } }
        });
        let mut mapping = world.map(&document, &standard_rules()).unwrap();
        world.save_all(&mut mapping).unwrap();

        // THEN
        assert_eq!(mapping.data().and_then(|e| e.get_str("name")), Some("rob"));
        assert_eq!(world.link("Person", &world.bob, "pet"), Some(world.ace.clone()));
    }

    #[test]
    fn test_relationship_to_the_wrong_type_is_a_mismatch() {
        let world = World::new();
        let document = json!({
            "data": {
                "type": "people",
                "id": world.bob,
                "relationships": { "pet": { "data": { "type": "people", "id": world.ana } } }
            }
        });

        let err = world.map(&document, &standard_rules()).unwrap_err();

        assert!(matches!(err, MapperError::TypeMismatch { .. }));
    }

    #[test]
    fn test_attribute_of_the_wrong_type_is_a_mismatch() {
        let world = World::new();
        let document = json!({
            "data": { "type": "people", "id": world.bob, "attributes": { "name": 11 } }
        });

        let err = world.map(&document, &standard_rules()).unwrap_err();

        assert!(matches!(err, MapperError::TypeMismatch { ref field, .. } if field == "name"));
    }
}
