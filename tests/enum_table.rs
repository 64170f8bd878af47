use std::collections::HashSet;
use webgpu_enum_names::{EnumNameTable, Error, Slot};

#[test]
fn test_every_ordinal_resolves_to_its_slot() {
    let table = EnumNameTable::global();
    for category in table.categories() {
        for (ordinal, slot) in category.iter() {
            assert_eq!(
                table.resolve(category.name(), ordinal).unwrap(),
                slot,
                "{}[{}]",
                category.name(),
                ordinal
            );
        }
    }
}

#[test]
fn test_one_past_the_end_is_out_of_range() {
    let table = EnumNameTable::global();
    for category in table.categories() {
        let len = category.len() as u32;
        match table.resolve(category.name(), len) {
            Err(Error::OrdinalOutOfRange { category: name, ordinal, len: reported }) => {
                assert_eq!(name, category.name());
                assert_eq!(ordinal, len);
                assert_eq!(reported, category.len());
            }
            other => panic!("{}: expected OrdinalOutOfRange, got {:?}", category.name(), other),
        }
    }
    assert!(table.resolve("TextureFormat", u32::MAX).is_err());
}

#[test]
fn test_unknown_category_fails() {
    let err = webgpu_enum_names::resolve("NotARealCategory", 0).unwrap_err();
    assert!(matches!(err, Error::UnknownCategory(_)));
    assert_eq!(err.to_string(), "Unknown enum category: NotARealCategory");
    assert!(EnumNameTable::global().len("").is_err());
}

#[test]
fn test_spot_checks() {
    let resolve = webgpu_enum_names::resolve;
    assert_eq!(resolve("BlendOperation", 0).unwrap(), Slot::Named("add"));
    assert_eq!(resolve("TextureDimension", 2).unwrap(), Slot::Named("3d"));
    assert_eq!(resolve("CompareFunction", 0).unwrap(), Slot::Unnamed);
    assert_eq!(resolve("CompareFunction", 1).unwrap(), Slot::Named("never"));
    assert_eq!(resolve("TextureFormat", 94).unwrap(), Slot::Named("astc-12x12-unorm-srgb"));
    assert_eq!(resolve("VertexFormat", 30).unwrap(), Slot::Named("sint32x4"));
    assert_eq!(resolve("FeatureName", 12).unwrap(), Slot::Named("float32filterable"));
}

#[test]
fn test_category_sizes() {
    let table = EnumNameTable::global();
    assert_eq!(table.category_count(), 32);
    assert_eq!(table.len("TextureFormat").unwrap(), 95);
    assert_eq!(table.len("VertexFormat").unwrap(), 31);
    assert_eq!(table.len("BlendFactor").unwrap(), 13);
    assert_eq!(table.len("StorageTextureAccess").unwrap(), 2);
}

#[test]
fn test_categories_are_in_alphabetical_order() {
    let names: Vec<_> = EnumNameTable::global().categories().map(|c| c.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.first(), Some(&"AddressMode"));
    assert_eq!(names.last(), Some(&"VertexStepMode"));
}

#[test]
fn test_no_duplicate_names_within_a_category() {
    for category in EnumNameTable::global().categories() {
        let mut seen = HashSet::new();
        for name in category.slots().filter_map(Slot::name) {
            assert!(seen.insert(name), "{} repeats '{}'", category.name(), name);
        }
    }
}

#[test]
fn test_names_are_lowercase_hyphenated() {
    for category in EnumNameTable::global().categories() {
        for name in category.slots().filter_map(Slot::name) {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{}: '{}'",
                category.name(),
                name
            );
        }
    }
}

#[test]
fn test_names_recur_across_categories() {
    let table = EnumNameTable::global();
    assert_eq!(table.ordinal_of("BlendFactor", "zero").unwrap(), 0);
    assert_eq!(table.ordinal_of("StencilOperation", "zero").unwrap(), 1);
    assert_eq!(table.ordinal_of("TextureDimension", "2d").unwrap(), 1);
    assert_eq!(table.ordinal_of("TextureViewDimension", "2d").unwrap(), 2);
}

#[test]
fn test_unnamed_slots_are_reserved_defaults() {
    let unnamed: Vec<(&str, u32)> = EnumNameTable::global()
        .categories()
        .flat_map(|c| {
            c.iter()
                .filter(|(_, slot)| !slot.is_named())
                .map(move |(ordinal, _)| (c.name(), ordinal))
        })
        .collect();

    assert_eq!(
        unnamed,
        vec![
            ("BufferBindingType", 0),
            ("CompareFunction", 0),
            ("FeatureName", 0),
            ("IndexFormat", 0),
            ("LoadOp", 0),
            ("PowerPreference", 0),
            ("SamplerBindingType", 0),
            ("StorageTextureAccess", 0),
            ("StoreOp", 0),
            ("TextureFormat", 0),
            ("TextureSampleType", 0),
            ("TextureViewDimension", 0),
            ("VertexFormat", 0),
            ("VertexStepMode", 2),
        ]
    );
}

#[test]
fn test_ordinal_of_inverts_resolve() {
    let table = EnumNameTable::global();
    for category in table.categories() {
        for (ordinal, slot) in category.iter() {
            if let Slot::Named(name) = slot {
                assert_eq!(table.ordinal_of(category.name(), name).unwrap(), ordinal);
            }
        }
    }
}

#[test]
fn test_lookups_are_idempotent() {
    let table = EnumNameTable::global();
    let first = table.resolve("PrimitiveTopology", 3).unwrap();
    let second = table.resolve("PrimitiveTopology", 3).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Slot::Named("triangle-list"));
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            std::thread::spawn(move || {
                let table = EnumNameTable::global();
                (0..1000u32)
                    .map(|n| table.resolve("TextureFormat", (n + i) % 95).unwrap())
                    .filter(|slot| slot.is_named())
                    .count()
            })
        })
        .collect();

    for handle in handles {
        let named = handle.join().unwrap();
        assert!(named >= 989, "unexpected named count {named}");
    }
}
