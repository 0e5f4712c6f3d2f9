use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tinct::domain::constants::PROP_CONVERTERS;
use tinct::kernel::paths;
use tinct::prelude::*;
use tracing::{debug, info, warn};

/// The converter registry as published into the property store.
pub type SharedConverters = Arc<RwLock<ConverterRegistry>>;

/// A builder for [`AppContext`].
#[derive(Debug, Default)]
pub struct AppContextBuilder {
    config: Option<AppConfig>,
    catalog: Option<ConverterCatalog>,
}

impl AppContextBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the built-in converter catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: ConverterCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Starts the application subsystems.
    ///
    /// A missing or unreadable settings file is not an error: it is logged and the
    /// context starts from empty settings.
    ///
    /// # Errors
    /// Returns an error if the property store cannot be created or the converter
    /// registry cannot be published into it.
    pub fn build(self) -> Result<AppContext> {
        let config = self.config.unwrap_or_default();
        let catalog = self.catalog.unwrap_or_else(ConverterCatalog::builtin);

        let settings_path = paths::settings_file(&config.paths);
        let settings = load_settings(&config, &settings_path);

        let handlers = HandlerMap::with_builtin_handlers();
        let params = Store::new(&handlers).context("Failed to create the property store")?;
        debug!(handlers = ?handlers.tags(), "Property store created");

        let mut registry = ConverterRegistry::from_catalog(&catalog);
        registry.reconcile(&PersistedConverters::load(&settings));
        let converters: SharedConverters = Arc::new(RwLock::new(registry));
        params
            .set_ptr(PROP_CONVERTERS, &converters)
            .context("Failed to publish the converter registry")?;

        info!(
            settings = %settings_path.display(),
            converters = converters.read().len(),
            "Application context started"
        );

        Ok(AppContext { config, settings_path, settings, handlers, params, converters })
    }
}

/// Outcome of [`AppContext::shutdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownReport {
    /// The settings file was written.
    pub settings_saved: bool,
    /// The property store was the last holder and destroyed its values.
    pub store_released: bool,
    /// The handler registry was the last holder and dropped its handlers.
    pub handlers_released: bool,
}

/// Running application state.
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    settings_path: PathBuf,
    settings: Settings,
    handlers: HandlerMap,
    params: Store,
    converters: SharedConverters,
}

impl AppContext {
    #[must_use]
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::default()
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The application-wide dynamic property store.
    #[must_use]
    pub fn params(&self) -> &Store {
        &self.params
    }

    #[must_use]
    pub fn handlers(&self) -> &HandlerMap {
        &self.handlers
    }

    #[must_use]
    pub fn converters(&self) -> &SharedConverters {
        &self.converters
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Formats `color` with the default display converter.
    ///
    /// # Errors
    /// Returns the converter error if no display converter is configured.
    pub fn format_color(&self, color: Color) -> Result<String, ConverterError> {
        self.converters.read().serialize(color)
    }

    /// Parses `text` with the first paste-enabled converter that accepts it.
    /// Returns the color and the name of the converter that parsed it.
    ///
    /// # Errors
    /// Returns [`ConverterError::Parse`] if no paste-enabled converter accepts `text`.
    pub fn parse_color(&self, text: &str) -> Result<(Color, String), ConverterError> {
        let converters = self.converters.read();
        let (color, used) = converters.deserialize_first(text)?;
        Ok((color, used.name().to_owned()))
    }

    /// Saves converter preferences and releases the subsystems in reverse start order.
    ///
    /// Failing to write the settings file is logged and reported, never fatal.
    pub fn shutdown(self) -> ShutdownReport {
        let Self { config: _, settings_path, mut settings, handlers, params, converters } = self;

        converters.read().persisted().save(&mut settings);
        let settings_saved = match settings.save(&settings_path) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, path = %settings_path.display(), "Failed to save settings");
                false
            },
        };

        drop(converters);
        let store_released = params.release();
        let handlers_released = handlers.release();

        let report = ShutdownReport { settings_saved, store_released, handlers_released };
        info!(?report, "Application context stopped");
        report
    }
}

fn load_settings(config: &AppConfig, path: &Path) -> Settings {
    let settings = Settings::load(path).unwrap_or_else(|e| {
        warn!(error = %e, path = %path.display(), "Failed to load settings, using defaults");
        Settings::default()
    });

    if !path.exists()
        && let Err(e) = paths::ensure_config_dir(&config.paths)
    {
        warn!(error = %e, dir = %config.paths.config_dir.display(), "Failed to create config directory");
    }

    settings
}
