use crate::catalog::ConverterSpec;
use crate::error::ConverterError;
use std::fmt;
use tinct_domain::{Capabilities, Color};

/// The two clipboard directions a converter takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Color to text.
    Copy,
    /// Text to color.
    Paste,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => f.write_str("copy"),
            Self::Paste => f.write_str("paste"),
        }
    }
}

/// A registered converter and its user-controlled enablement.
///
/// `copy_enabled` can only be set when the converter serializes and `paste_enabled` only
/// when it deserializes: requested flags are AND-ed with the capabilities, never rejected.
#[derive(Debug, Clone)]
pub struct ConverterDescriptor {
    spec: ConverterSpec,
    capabilities: Capabilities,
    copy_enabled: bool,
    paste_enabled: bool,
}

impl ConverterDescriptor {
    /// Creates a descriptor with both directions disabled.
    #[must_use]
    pub fn new(spec: ConverterSpec) -> Self {
        let capabilities = spec.capabilities();
        Self { spec, capabilities, copy_enabled: false, paste_enabled: false }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.spec.label
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub const fn serialize_available(&self) -> bool {
        self.capabilities.can_serialize()
    }

    #[must_use]
    pub const fn deserialize_available(&self) -> bool {
        self.capabilities.can_deserialize()
    }

    #[must_use]
    pub const fn copy_enabled(&self) -> bool {
        self.copy_enabled
    }

    #[must_use]
    pub const fn paste_enabled(&self) -> bool {
        self.paste_enabled
    }

    #[must_use]
    pub const fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Copy => self.copy_enabled,
            Direction::Paste => self.paste_enabled,
        }
    }

    /// Formats `color` with this converter.
    ///
    /// # Errors
    /// Returns [`ConverterError::Unsupported`] if the converter cannot serialize.
    pub fn serialize(&self, color: Color) -> Result<String, ConverterError> {
        let serialize = self.spec.serialize.ok_or_else(|| self.unsupported(Direction::Copy))?;
        Ok(serialize(color))
    }

    /// Parses `text` with this converter.
    ///
    /// # Errors
    /// Returns [`ConverterError::Unsupported`] if the converter cannot deserialize and
    /// [`ConverterError::Parse`] if `text` is not in its format.
    pub fn deserialize(&self, text: &str) -> Result<Color, ConverterError> {
        let deserialize = self.spec.deserialize.ok_or_else(|| self.unsupported(Direction::Paste))?;
        deserialize(text).ok_or_else(|| ConverterError::Parse {
            message: text.to_owned().into(),
            context: Some(self.spec.name.clone()),
        })
    }

    // Flag writes stay crate-private so the registry can keep its lookups in sync.

    /// Returns the effective flag.
    pub(crate) fn set_enabled(&mut self, direction: Direction, requested: bool) -> bool {
        match direction {
            Direction::Copy => {
                self.copy_enabled = self.serialize_available() && requested;
                self.copy_enabled
            },
            Direction::Paste => {
                self.paste_enabled = self.deserialize_available() && requested;
                self.paste_enabled
            },
        }
    }

    /// Enables every direction the converter supports.
    pub(crate) fn enable_available(&mut self) {
        self.set_enabled(Direction::Copy, true);
        self.set_enabled(Direction::Paste, true);
    }

    fn unsupported(&self, direction: Direction) -> ConverterError {
        ConverterError::Unsupported {
            message: format!("'{}' does not support {direction}", self.spec.name).into(),
            context: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConverterCatalog;
    use tinct_domain::constants::{COLOR_VEC3_FLOAT, COLOR_WEB_HEX};

    fn descriptor(name: &str) -> ConverterDescriptor {
        ConverterDescriptor::new(ConverterCatalog::builtin().get(name).unwrap().clone())
    }

    #[test]
    fn flags_are_gated_by_capabilities() {
        let mut vec3 = descriptor(COLOR_VEC3_FLOAT);
        assert!(!vec3.copy_enabled() && !vec3.paste_enabled());

        vec3.enable_available();
        assert!(vec3.copy_enabled());
        assert!(!vec3.paste_enabled());

        assert!(!vec3.set_enabled(Direction::Paste, true));
        assert!(!vec3.set_enabled(Direction::Copy, false));
    }

    #[test]
    fn conversions_report_unsupported_directions() {
        let vec3 = descriptor(COLOR_VEC3_FLOAT);
        assert!(matches!(vec3.deserialize("0, 0, 0"), Err(ConverterError::Unsupported { .. })));

        let hex = descriptor(COLOR_WEB_HEX);
        assert_eq!(hex.serialize(Color::WHITE).unwrap(), "#ffffff");

        let err = hex.deserialize("white").unwrap_err();
        assert!(matches!(err, ConverterError::Parse { .. }));
        assert_eq!(err.context_str(), Some(COLOR_WEB_HEX));
    }
}
