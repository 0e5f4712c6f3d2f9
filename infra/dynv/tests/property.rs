use proptest::prelude::*;
use tinct_domain::Color;
use tinct_domain::constants::{TAG_COLOR, TAG_FLOAT, TAG_INT32, TAG_STRING};
use tinct_dynv::{DynvError, HandlerMap, Store, Value};

fn store() -> Store {
    Store::new(&HandlerMap::with_builtin_handlers()).unwrap()
}

fn tagged_value() -> impl Strategy<Value = (&'static str, Value)> {
    prop_oneof![
        any::<String>().prop_map(|s| (TAG_STRING, Value::String(s))),
        any::<i32>().prop_map(|v| (TAG_INT32, Value::Int32(v))),
        (-1.0e6_f32..1.0e6).prop_map(|v| (TAG_FLOAT, Value::Float(v))),
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| (TAG_COLOR, Value::Color(Color::from_rgb8(r, g, b)))),
    ]
}

proptest! {
    #[test]
    fn set_then_get_returns_the_value(name in "[A-Za-z.]{1,16}", (tag, value) in tagged_value()) {
        let store = store();
        store.set(tag, &name, value.clone()).unwrap();
        prop_assert_eq!(store.get(tag, &name).unwrap(), value);
    }

    #[test]
    fn other_tags_never_yield_a_value(name in "[a-z]{1,8}", (tag, value) in tagged_value()) {
        let store = store();
        store.set(tag, &name, value).unwrap();

        for other in [TAG_STRING, TAG_INT32, TAG_FLOAT, TAG_COLOR].into_iter().filter(|t| *t != tag) {
            let is_mismatch = matches!(store.get(other, &name), Err(DynvError::TypeMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn absent_names_are_not_found(present in "[a-m]{1,8}", absent in "[n-z]{1,8}", v in any::<i32>()) {
        let store = store();
        store.set_int32(&present, v).unwrap();
        let is_not_found = matches!(store.get(TAG_INT32, &absent), Err(DynvError::NotFound { .. }));
        prop_assert!(is_not_found);
    }

    #[test]
    fn export_then_import_preserves_serializable_values(
        entries in proptest::collection::btree_map("[a-z]{1,8}", tagged_value(), 0..8)
    ) {
        let source = store();
        for (name, (tag, value)) in &entries {
            source.set(tag, name, value.clone()).unwrap();
        }

        let target = store();
        for entry in source.export() {
            target.import(&entry.tag, &entry.name, &entry.text).unwrap();
        }

        prop_assert_eq!(target.len(), entries.len());
        for (name, (tag, value)) in &entries {
            prop_assert_eq!(&target.get(tag, name).unwrap(), value);
        }
    }
}
