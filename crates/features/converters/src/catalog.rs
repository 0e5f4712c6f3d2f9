use crate::formats;
use std::borrow::Cow;
use std::fmt;
use tinct_domain::constants::{
    COLOR_CSS_HSL, COLOR_CSS_RGB, COLOR_VEC3_FLOAT, COLOR_WEB_HEX, COLOR_WEB_HEX_NO_HASH,
};
use tinct_domain::{Capabilities, Color};
use tracing::debug;

pub type SerializeFn = fn(Color) -> String;
pub type DeserializeFn = fn(&str) -> Option<Color>;

/// A converter implementation: its unique name, a human label and the directions it supports.
#[derive(Clone)]
pub struct ConverterSpec {
    pub name: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub serialize: Option<SerializeFn>,
    pub deserialize: Option<DeserializeFn>,
}

impl ConverterSpec {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
        serialize: Option<SerializeFn>,
        deserialize: Option<DeserializeFn>,
    ) -> Self {
        Self { name: name.into(), label: label.into(), serialize, deserialize }
    }

    /// Capabilities follow from which directions are implemented.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let mut capabilities = Capabilities::empty();
        capabilities.set(Capabilities::SERIALIZE, self.serialize.is_some());
        capabilities.set(Capabilities::DESERIALIZE, self.deserialize.is_some());
        capabilities
    }
}

impl fmt::Debug for ConverterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterSpec")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

/// The converter implementations available to a registry, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ConverterCatalog {
    specs: Vec<ConverterSpec>,
}

impl ConverterCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The converters shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(ConverterSpec::new(
            COLOR_WEB_HEX,
            "Web: hex code",
            Some(formats::web_hex),
            Some(formats::parse_web_hex),
        ));
        catalog.register(ConverterSpec::new(
            COLOR_WEB_HEX_NO_HASH,
            "Web: hex code (no hash symbol)",
            Some(formats::web_hex_no_hash),
            Some(formats::parse_web_hex_no_hash),
        ));
        catalog.register(ConverterSpec::new(
            COLOR_CSS_RGB,
            "CSS: red green blue",
            Some(formats::css_rgb),
            Some(formats::parse_css_rgb),
        ));
        catalog.register(ConverterSpec::new(
            COLOR_CSS_HSL,
            "CSS: hue saturation lightness",
            Some(formats::css_hsl),
            Some(formats::parse_css_hsl),
        ));
        catalog.register(ConverterSpec::new(
            COLOR_VEC3_FLOAT,
            "Float vector",
            Some(formats::vec3_float),
            None,
        ));
        catalog
    }

    /// Adds `spec`. A spec with an already registered name replaces the old one in place.
    pub fn register(&mut self, spec: ConverterSpec) {
        if let Some(existing) = self.specs.iter_mut().find(|s| s.name == spec.name) {
            debug!(name = %spec.name, "Converter implementation replaced");
            *existing = spec;
        } else {
            self.specs.push(spec);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConverterSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConverterSpec> {
        self.specs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
