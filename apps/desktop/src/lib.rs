//! # Tinct Desktop
//!
//! Composition root of the color picker. [`AppContext`] wires the subsystems together at
//! startup and tears them down in reverse order at shutdown:
//!
//! 1. user settings are loaded from the per-user config directory;
//! 2. the value handler registry and the dynamic property store are created;
//! 3. the converter registry is reconciled with the saved preferences and published
//!    into the store under `Converters`.
//!
//! ```no_run
//! use tinct::prelude::*;
//! use tinct_desktop::AppContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = AppContext::builder().config(AppConfig::default()).build()?;
//! let text = ctx.converters().read().serialize(Color::WHITE)?;
//! assert_eq!(text, "#ffffff");
//! ctx.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod args;
mod context;

pub use crate::context::{AppContext, AppContextBuilder, SharedConverters, ShutdownReport};
