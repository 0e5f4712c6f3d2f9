use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default base name of the startup configuration file (`tinct.toml`, `tinct.yaml`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "tinct";

/// Environment prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TINCT";

/// Custom error type for config loading.
#[tinct_derive::tinct_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `tinct.toml`). If no path is provided,
///    it defaults to `"tinct"`. A missing file is not an error; `T` falls back to its serde defaults.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `TINCT__`.
///    Nested structures are accessed using double underscores (e.g., `TINCT__LOGGING__LEVEL`
///    maps to `logging.level`).
///
/// # Errors
/// This function will return an error if:
/// * The configuration file exists but cannot be parsed.
/// * The merged sources do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use tinct_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     zoom: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., TINCT__LOGGING__LEVEL)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
