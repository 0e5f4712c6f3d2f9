//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it holds config loading, the user settings file and path helpers.
//!
//! ## Settings
//! ```rust
//! use tinct_kernel::settings::{Settings, SettingsSink, SettingsSource};
//!
//! let mut settings = Settings::default();
//! settings.set_string("Converter", "Display", "color_css_rgb");
//! assert_eq!(settings.get_string_with_default("Converter", "Display", "color_web_hex"), "color_css_rgb");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use tinct_kernel::config::load_config;
//! use tinct_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("tinct.toml")).unwrap_or_default();
//! ```
pub mod config;
pub mod paths;
pub mod settings;

pub use tinct_domain as domain;
