//! # CLI Argument Definitions
//!
//! Command-line interface of the `tinct` binary, parsed with `clap`.

use clap::Parser;
use std::path::PathBuf;
use tinct::domain::config::AppConfig;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tinct")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Color picker core: converts colors between text formats using your saved preferences")]
pub struct Cli {
    /// Startup configuration file (defaults to `tinct.toml` in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the per-user directory holding `settings.toml`
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the converters in their saved order with copy/paste flags
    #[arg(long)]
    pub list: bool,

    /// A color in any paste-enabled format, printed with the display converter
    pub color: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.config_dir {
            config.paths.config_dir.clone_from(dir);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_to_config() {
        let cli = Cli::try_parse_from(["tinct", "--config-dir", "/tmp/x", "-l", "debug", "#ff0000"])
            .unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.paths.config_dir, PathBuf::from("/tmp/x"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(cli.color.as_deref(), Some("#ff0000"));
        assert!(!cli.list);
    }

    #[test]
    fn no_arguments_keep_defaults() {
        let cli = Cli::try_parse_from(["tinct"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.paths.config_dir, PathBuf::from(".tinct"));
        assert!(cli.color.is_none());
    }
}
