//! Whitelists decide which types, attributes and relationships get through.

use docmap_tests::prelude::*;

mod ignored {
    use super::*;

    #[test]
    fn test_ignores_types_that_were_not_permitted() {
        // GIVEN
        let mut world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({ "people": ["name", "pet", "parent", { "country": "uruguay" }] });

        // WHEN
        let mut mapping = world.map(&document, &rules).unwrap();

        // THEN
        assert!(mapping.is_single());
        assert_eq!(mapping.included_handles().len(), 1);
        assert!(mapping.linked(mapping.data_handle().unwrap(), "pet").is_none());

        world.save_all(&mut mapping).unwrap();
        assert!(world.link("Person", &world.bob, "pet").is_none());
        assert!(world.link("Person", &world.ana, "pet").is_none());
        assert_eq!(world.link("Person", &world.bob, "parent"), Some(world.ana.clone()));
        assert_eq!(world.store.count("PetDog"), 1);
    }

    #[test]
    fn test_ignores_relationships_that_were_not_permitted() {
        let mut world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({
            "people": ["name", "pet", { "country": "uruguay" }],
            "pet_dogs": ["name", { "country": "uruguay" }]
        });

        let mut mapping = world.map(&document, &rules).unwrap();
        world.save_all(&mut mapping).unwrap();

        assert!(world.link("Person", &world.bob, "parent").is_none());
        assert!(world.link("Person", &world.ana, "parent").is_none());
        assert!(world.link("Person", &world.bob, "pet").is_some());
    }

    #[test]
    fn test_ignores_attributes_that_were_not_permitted() {
        let mut world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({ "people": ["pet", { "country": "uruguay" }] });

        let mut mapping = world.map(&document, &rules).unwrap();
        world.save_all(&mut mapping).unwrap();

        assert_eq!(world.string("Person", &world.bob, "name").as_deref(), Some("bob"));
        assert_eq!(
            world.reload("Person", &world.bob).get("admin"),
            Some(&Value::Bool(false))
        );
    }
}

mod unresolvable {
    use super::*;

    #[test]
    fn test_fails_when_type_is_missing() {
        let world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({ "bogus_class": ["bogus_attribute", { "country": "uruguay" }] });

        let err = world.map(&document, &rules).unwrap_err();

        assert!(!err.is_rules_error());
        assert!(matches!(
            err,
            MapperError::Compile(CompileError::UnknownType { ref name }) if name == "BogusClass"
        ));
    }

    #[test]
    fn test_fails_when_attribute_is_missing() {
        let world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({ "people": ["bogus_attribute", { "country": "uruguay" }] });

        let err = world.map(&document, &rules).unwrap_err();

        assert!(matches!(
            err,
            MapperError::Compile(CompileError::UnknownField { ref field, .. }) if field == "bogus_attribute"
        ));
    }

    #[test]
    fn test_fails_when_scope_field_is_missing() {
        let world = World::new();
        let rules = json!({ "people": ["name", { "planet": "earth" }] });

        let err = world.map(&json!({}), &rules).unwrap_err();

        assert!(matches!(
            err,
            MapperError::Compile(CompileError::UnknownField { ref field, .. }) if field == "planet"
        ));
    }
}

mod declarations {
    use super::*;

    #[test]
    fn test_whitelist_entries_must_be_names() {
        let world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({
            "people": [11, { "country": "uruguay" }],
            "pet_dogs": [["fubar"], { "country": "uruguay" }]
        });

        let err = world.map(&document, &rules).unwrap_err();

        assert!(err.is_rules_error());
        assert!(matches!(err, MapperError::Compile(CompileError::InvalidEntry { .. })));
    }

    #[test]
    fn test_scope_must_be_an_object() {
        let world = World::new();
        let document = doc_updating_bob_ana_and_adding_pet(&world);
        let rules = json!({ "people": [11] });

        let err = world.map(&document, &rules).unwrap_err();

        assert!(err.is_rules_error());
    }

    #[test]
    fn test_rules_must_be_an_object_of_arrays() {
        let world = World::new();

        for rules in [json!([]), json!("people"), json!({ "people": "name" })] {
            let err = world.map(&json!({}), &rules).unwrap_err();
            assert!(matches!(err, MapperError::Compile(CompileError::MalformedRules { .. })));
        }
    }

    #[test]
    fn test_rules_errors_surface_before_any_lookup() {
        // A document referencing missing rows still reports the rules problem.
        let world = World::new();
        let document = json!({ "data": { "type": "people", "id": "999" } });

        let err = world.map(&document, &json!({ "people": ["name"] })).unwrap_err();

        assert!(matches!(err, MapperError::Compile(CompileError::MissingScope { .. })));
    }
}
