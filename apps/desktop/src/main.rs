#![allow(clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use tinct::domain::config::AppConfig;
use tinct::kernel::config::load_config;
use tinct_desktop::AppContext;
use tinct_desktop::args::Cli;
use tinct_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    cli.apply(&mut config);

    let _log = Logger::from_config("tinct", &config.logging)?;

    let ctx = AppContext::builder().config(config).build()?;

    if cli.list {
        for d in ctx.converters().read().iter() {
            let copy = if d.copy_enabled() { "copy" } else { "-" };
            let paste = if d.paste_enabled() { "paste" } else { "-" };
            println!("{:<24} {copy:<5} {paste:<5} {}", d.name(), d.label());
        }
    }

    if let Some(text) = &cli.color {
        let result = ctx
            .parse_color(text)
            .and_then(|(color, _)| ctx.format_color(color))
            .with_context(|| format!("Cannot convert '{text}'"));
        match result {
            Ok(formatted) => println!("{formatted}"),
            Err(e) => {
                ctx.shutdown();
                return Err(e);
            },
        }
    }

    ctx.shutdown();
    Ok(())
}
