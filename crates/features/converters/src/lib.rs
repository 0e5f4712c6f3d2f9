//! # Converters
//!
//! Color format converters and the registry that decides which of them take part in
//! copy and paste, in which order, and which one formats colors for display.
//!
//! ## Architecture
//!
//! 1.  **Catalog ([`ConverterCatalog`]):** the implementations, each with an optional
//!     serializer and deserializer. Capabilities follow from which one is present.
//! 2.  **Registry ([`ConverterRegistry`]):** descriptors in user order with copy/paste flags,
//!     derived copy and paste lookups, and the default display converter.
//! 3.  **Persistence ([`PersistedConverters`]):** the `[Converter]` settings section, applied
//!     with [`ConverterRegistry::reconcile`] at startup and captured with
//!     [`ConverterRegistry::persisted`] at shutdown.
//!
//! # Example
//!
//! ```rust
//! use tinct_converters::{ConverterCatalog, ConverterRegistry, PersistedConverters};
//! use tinct_domain::Color;
//!
//! let mut registry = ConverterRegistry::from_catalog(&ConverterCatalog::builtin());
//! registry.reconcile(&PersistedConverters::default());
//!
//! let names: Vec<&str> = registry.copy_converters().map(|c| c.name()).collect();
//! assert_eq!(names, ["color_web_hex", "color_css_rgb", "color_css_hsl"]);
//! assert_eq!(registry.serialize(Color::WHITE).unwrap(), "#ffffff");
//! ```

pub mod catalog;
mod descriptor;
mod error;
pub mod formats;
mod persisted;
mod registry;

pub use catalog::{ConverterCatalog, ConverterSpec, DeserializeFn, SerializeFn};
pub use descriptor::{ConverterDescriptor, Direction};
pub use error::{ConverterError, ConverterErrorExt};
pub use persisted::PersistedConverters;
pub use registry::ConverterRegistry;
