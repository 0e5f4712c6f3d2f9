use crate::catalog::ConverterCatalog;
use crate::descriptor::{ConverterDescriptor, Direction};
use crate::error::ConverterError;
use crate::persisted::PersistedConverters;
use fxhash::FxHashMap;
use tinct_domain::Color;
use tinct_domain::constants::{DEFAULT_DISPLAY_CONVERTER, FALLBACK_CONVERTERS};
use tracing::{debug, warn};

/// Ordered converters with copy/paste lookups and an optional default display converter.
///
/// The copy and paste lookups always equal the registry order filtered by the matching flag.
/// Every mutation that can change a flag or the order rebuilds them before returning.
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    descriptors: Vec<ConverterDescriptor>,
    copy: Vec<usize>,
    paste: Vec<usize>,
    display: Option<usize>,
}

impl ConverterRegistry {
    /// Descriptors in catalog order, with both directions disabled and no display converter.
    #[must_use]
    pub fn from_catalog(catalog: &ConverterCatalog) -> Self {
        Self {
            descriptors: catalog.iter().cloned().map(ConverterDescriptor::new).collect(),
            ..Self::default()
        }
    }

    /// Applies persisted preferences: enablement, order and the display converter.
    ///
    /// Never fails. Unknown names are skipped, and an empty persisted order falls back to the
    /// built-in default order with every supported direction enabled.
    pub fn reconcile(&mut self, persisted: &PersistedConverters) {
        if persisted.names.is_empty() {
            debug!(order = ?FALLBACK_CONVERTERS, "No persisted converter order; using defaults");
            for name in FALLBACK_CONVERTERS {
                self.enable_available(name);
            }
            self.apply_order(FALLBACK_CONVERTERS);
        } else {
            let explicit = persisted.is_explicit();
            for (i, name) in persisted.names.iter().enumerate() {
                let Some(descriptor) = self.get_mut(name) else {
                    debug!(name = %name, "Skipping unknown persisted converter");
                    continue;
                };
                if explicit {
                    if let Some(&copy) = persisted.copy.get(i) {
                        descriptor.set_enabled(Direction::Copy, copy);
                    }
                    if let Some(&paste) = persisted.paste.get(i) {
                        descriptor.set_enabled(Direction::Paste, paste);
                    }
                } else {
                    descriptor.enable_available();
                }
            }
            self.apply_order(&persisted.names);
        }

        self.rebuild_lookups();
        self.resolve_display(&persisted.display);
        debug!(
            copy = self.copy.len(),
            paste = self.paste.len(),
            display = ?self.display().map(ConverterDescriptor::name),
            "Converters reconciled"
        );
    }

    // --- Runtime mutation ---

    /// Enables or disables copying with converter `name`. Returns the effective flag.
    ///
    /// # Errors
    /// Returns [`ConverterError::Unknown`] if no converter is named `name`.
    pub fn set_copy_enabled(&mut self, name: &str, enabled: bool) -> Result<bool, ConverterError> {
        self.set_enabled(name, Direction::Copy, enabled)
    }

    /// Enables or disables pasting with converter `name`. Returns the effective flag.
    ///
    /// # Errors
    /// Returns [`ConverterError::Unknown`] if no converter is named `name`.
    pub fn set_paste_enabled(&mut self, name: &str, enabled: bool) -> Result<bool, ConverterError> {
        self.set_enabled(name, Direction::Paste, enabled)
    }

    /// Moves the named converters to the front in the given order. Unknown names are ignored
    /// and unmentioned converters keep their relative order after the named ones.
    pub fn reorder<S: AsRef<str>>(&mut self, names: &[S]) {
        self.apply_order(names);
        self.rebuild_lookups();
    }

    /// Makes `name` the default display converter.
    ///
    /// # Errors
    /// Returns [`ConverterError::Unknown`] if no converter is named `name`.
    pub fn set_display(&mut self, name: &str) -> Result<(), ConverterError> {
        self.display = Some(self.position(name).ok_or_else(|| unknown(name))?);
        Ok(())
    }

    // --- Accessors ---

    /// Descriptors in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ConverterDescriptor> {
        self.descriptors.iter()
    }

    /// Copy-enabled descriptors in registry order.
    pub fn copy_converters(&self) -> impl Iterator<Item = &ConverterDescriptor> {
        self.converters(Direction::Copy)
    }

    /// Paste-enabled descriptors in registry order.
    pub fn paste_converters(&self) -> impl Iterator<Item = &ConverterDescriptor> {
        self.converters(Direction::Paste)
    }

    pub fn converters(&self, direction: Direction) -> impl Iterator<Item = &ConverterDescriptor> {
        let lookup = match direction {
            Direction::Copy => &self.copy,
            Direction::Paste => &self.paste,
        };
        lookup.iter().map(|&i| &self.descriptors[i])
    }

    #[must_use]
    pub fn display(&self) -> Option<&ConverterDescriptor> {
        self.display.map(|i| &self.descriptors[i])
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConverterDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Snapshot of the current order, flags and display converter for saving.
    #[must_use]
    pub fn persisted(&self) -> PersistedConverters {
        PersistedConverters {
            names: self.iter().map(|d| d.name().to_owned()).collect(),
            copy: self.iter().map(ConverterDescriptor::copy_enabled).collect(),
            paste: self.iter().map(ConverterDescriptor::paste_enabled).collect(),
            display: self
                .display()
                .map_or(DEFAULT_DISPLAY_CONVERTER, ConverterDescriptor::name)
                .to_owned(),
        }
    }

    // --- Conversions ---

    /// Formats `color` with the default display converter.
    ///
    /// # Errors
    /// Returns [`ConverterError::NoDisplay`] if no display converter is set, or the
    /// converter's own error.
    pub fn serialize(&self, color: Color) -> Result<String, ConverterError> {
        let display = self.display().ok_or_else(|| ConverterError::NoDisplay {
            message: "No default display converter is configured".into(),
            context: None,
        })?;
        display.serialize(color)
    }

    /// Parses `text` with the first paste-enabled converter that accepts it.
    ///
    /// # Errors
    /// Returns [`ConverterError::Parse`] if no paste-enabled converter accepts `text`.
    pub fn deserialize_first(&self, text: &str) -> Result<(Color, &ConverterDescriptor), ConverterError> {
        self.paste_converters()
            .find_map(|d| d.deserialize(text).ok().map(|color| (color, d)))
            .ok_or_else(|| ConverterError::Parse {
                message: text.to_owned().into(),
                context: Some("No paste converter accepts the text".into()),
            })
    }

    // --- Internals ---

    fn position(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.name() == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut ConverterDescriptor> {
        self.descriptors.iter_mut().find(|d| d.name() == name)
    }

    fn enable_available(&mut self, name: &str) {
        match self.get_mut(name) {
            Some(descriptor) => descriptor.enable_available(),
            None => debug!(name, "Default converter is not registered"),
        }
    }

    fn set_enabled(&mut self, name: &str, direction: Direction, enabled: bool) -> Result<bool, ConverterError> {
        let effective = self.get_mut(name).ok_or_else(|| unknown(name))?.set_enabled(direction, enabled);
        if effective != enabled {
            debug!(name, %direction, "Converter does not support this direction");
        }
        self.rebuild_lookups();
        Ok(effective)
    }

    /// Stable reorder. A name listed more than once takes the position of its last occurrence.
    fn apply_order<S: AsRef<str>>(&mut self, names: &[S]) {
        let rank: FxHashMap<&str, usize> =
            names.iter().enumerate().map(|(i, name)| (name.as_ref(), i)).collect();

        let display = self.display().map(|d| d.name().to_owned());
        self.descriptors.sort_by_key(|d| rank.get(d.name()).copied().unwrap_or(usize::MAX));
        self.display = display.and_then(|name| self.position(&name));
    }

    fn rebuild_lookups(&mut self) {
        let enabled = |direction: Direction| -> Vec<usize> {
            self.descriptors
                .iter()
                .enumerate()
                .filter(|(_, d)| d.is_enabled(direction))
                .map(|(i, _)| i)
                .collect()
        };
        let copy = enabled(Direction::Copy);
        let paste = enabled(Direction::Paste);
        self.copy = copy;
        self.paste = paste;
    }

    fn resolve_display(&mut self, requested: &str) {
        self.display = self.position(requested).or_else(|| {
            warn!(requested, fallback = DEFAULT_DISPLAY_CONVERTER, "Unknown display converter");
            self.position(DEFAULT_DISPLAY_CONVERTER)
        });
        if self.display.is_none() {
            warn!("No display converter available");
        }
    }
}

fn unknown(name: &str) -> ConverterError {
    ConverterError::Unknown { message: name.to_owned().into(), context: None }
}
