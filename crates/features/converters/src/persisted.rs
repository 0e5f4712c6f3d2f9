use tinct_domain::constants::{
    CONVERTER_COPY, CONVERTER_DISPLAY, CONVERTER_NAMES, CONVERTER_PASTE, CONVERTER_SECTION,
    DEFAULT_DISPLAY_CONVERTER,
};
use tinct_kernel::settings::{SettingsSink, SettingsSource};

/// Converter preferences as stored in the `[Converter]` settings section.
///
/// An empty `names` list means no order was ever saved. `copy` and `paste` are positional:
/// entry `i` applies to `names[i]`, and lists shorter than `names` leave the remaining
/// converters untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedConverters {
    pub names: Vec<String>,
    pub copy: Vec<bool>,
    pub paste: Vec<bool>,
    pub display: String,
}

impl Default for PersistedConverters {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            copy: Vec::new(),
            paste: Vec::new(),
            display: DEFAULT_DISPLAY_CONVERTER.to_owned(),
        }
    }
}

impl PersistedConverters {
    /// Reads the `Converter.*` keys. Missing or malformed keys read as empty.
    #[must_use]
    pub fn load(source: &impl SettingsSource) -> Self {
        Self {
            names: source.get_string_list(CONVERTER_SECTION, CONVERTER_NAMES).unwrap_or_default(),
            copy: source.get_bool_list(CONVERTER_SECTION, CONVERTER_COPY).unwrap_or_default(),
            paste: source.get_bool_list(CONVERTER_SECTION, CONVERTER_PASTE).unwrap_or_default(),
            display: source.get_string_with_default(
                CONVERTER_SECTION,
                CONVERTER_DISPLAY,
                DEFAULT_DISPLAY_CONVERTER,
            ),
        }
    }

    pub fn save(&self, sink: &mut impl SettingsSink) {
        sink.set_string_list(CONVERTER_SECTION, CONVERTER_NAMES, &self.names);
        sink.set_bool_list(CONVERTER_SECTION, CONVERTER_COPY, &self.copy);
        sink.set_bool_list(CONVERTER_SECTION, CONVERTER_PASTE, &self.paste);
        sink.set_string(CONVERTER_SECTION, CONVERTER_DISPLAY, &self.display);
    }

    /// Whether any positional flag list is present, which switches reconciliation
    /// from enabling everything named to applying the flags one by one.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        !self.copy.is_empty() || !self.paste.is_empty()
    }
}
