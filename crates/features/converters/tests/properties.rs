use proptest::prelude::*;
use tinct_converters::{ConverterCatalog, ConverterDescriptor, ConverterRegistry, PersistedConverters};
use tinct_domain::Color;

const KNOWN: [&str; 5] = [
    "color_web_hex",
    "color_web_hex_no_hash",
    "color_css_rgb",
    "color_css_hsl",
    "color_vec3_float",
];

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(KNOWN.to_vec()).prop_map(str::to_owned),
        1 => "[a-z_]{1,12}",
    ]
}

fn persisted() -> impl Strategy<Value = PersistedConverters> {
    (
        proptest::collection::vec(name(), 0..8),
        proptest::collection::vec(any::<bool>(), 0..8),
        proptest::collection::vec(any::<bool>(), 0..8),
        name(),
    )
        .prop_map(|(names, copy, paste, display)| PersistedConverters { names, copy, paste, display })
}

fn reconciled(prefs: &PersistedConverters) -> ConverterRegistry {
    let mut registry = ConverterRegistry::from_catalog(&ConverterCatalog::builtin());
    registry.reconcile(prefs);
    registry
}

proptest! {
    #[test]
    fn enablement_never_exceeds_capabilities(prefs in persisted()) {
        let registry = reconciled(&prefs);
        for d in registry.iter() {
            prop_assert!(!d.copy_enabled() || d.serialize_available());
            prop_assert!(!d.paste_enabled() || d.deserialize_available());
        }
    }

    #[test]
    fn lookups_follow_registry_order(prefs in persisted(), toggles in proptest::collection::vec((name(), any::<bool>(), any::<bool>()), 0..6)) {
        let mut registry = reconciled(&prefs);
        for (name, copy, paste) in &toggles {
            let _ = registry.set_copy_enabled(name, *copy);
            let _ = registry.set_paste_enabled(name, *paste);
        }

        let copy: Vec<&str> = registry.copy_converters().map(ConverterDescriptor::name).collect();
        let expected: Vec<&str> = registry.iter().filter(|d| d.copy_enabled()).map(ConverterDescriptor::name).collect();
        prop_assert_eq!(copy, expected);

        let paste: Vec<&str> = registry.paste_converters().map(ConverterDescriptor::name).collect();
        let expected: Vec<&str> = registry.iter().filter(|d| d.paste_enabled()).map(ConverterDescriptor::name).collect();
        prop_assert_eq!(paste, expected);
    }

    #[test]
    fn reconcile_is_a_permutation_with_named_first(prefs in persisted()) {
        let registry = reconciled(&prefs);
        let order: Vec<&str> = registry.iter().map(ConverterDescriptor::name).collect();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        let mut known = KNOWN.to_vec();
        known.sort_unstable();
        prop_assert_eq!(sorted, known);

        let listed: Vec<&str> = if prefs.names.is_empty() {
            vec!["color_web_hex", "color_css_rgb", "color_css_hsl"]
        } else {
            prefs.names.iter().map(String::as_str).collect()
        };
        // Each known name listed ends up ranked by its last occurrence.
        let mut expected: Vec<&str> = Vec::new();
        for name in listed.iter().rev() {
            if KNOWN.contains(name) && !expected.contains(name) {
                expected.insert(0, *name);
            }
        }
        prop_assert_eq!(&order[..expected.len()], &expected[..]);
    }

    #[test]
    fn display_is_requested_or_web_hex(prefs in persisted()) {
        let registry = reconciled(&prefs);
        let display = registry.display().map(ConverterDescriptor::name);
        if KNOWN.contains(&prefs.display.as_str()) {
            prop_assert_eq!(display, Some(prefs.display.as_str()));
        } else {
            prop_assert_eq!(display, Some("color_web_hex"));
        }
    }

    #[test]
    fn display_text_pastes_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), display in proptest::sample::select(vec!["color_web_hex", "color_css_rgb"])) {
        let mut registry = reconciled(&PersistedConverters::default());
        registry.set_display(display).unwrap();

        let color = Color::from_rgb8(r, g, b);
        let text = registry.serialize(color).unwrap();
        let (parsed, _) = registry.deserialize_first(&text).unwrap();
        prop_assert_eq!(parsed.to_rgb8(), [r, g, b]);
    }
}
