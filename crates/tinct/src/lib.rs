//! Facade crate for Tinct subsystems and shared modules.
//! Re-exports domain/kernel primitives, the dynamic property store and the converter slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use tinct_converters as converters;
pub use tinct_domain as domain;
pub use tinct_dynv as dynv;
pub use tinct_kernel as kernel;

/// The names most composition code needs.
pub mod prelude {
    pub use tinct_converters::{
        ConverterCatalog, ConverterDescriptor, ConverterError, ConverterRegistry, Direction,
        PersistedConverters,
    };
    pub use tinct_domain::config::AppConfig;
    pub use tinct_domain::{Capabilities, Color};
    pub use tinct_dynv::{DynvError, HandlerMap, Store, Value, ValueHandler};
    pub use tinct_kernel::settings::{Settings, SettingsError, SettingsSink, SettingsSource};
}
