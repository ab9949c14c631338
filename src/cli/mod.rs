pub mod commands;
pub mod report;
pub mod utils;

use anyhow::Result;
use clap::ArgMatches;
use enum_retrofit::Config;
use std::path::PathBuf;

/// Resolve configuration, then layer global CLI flags on top of it.
pub fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config.walker.root = root.clone();
    }
    if let Some(ext) = matches.get_one::<String>("ext") {
        config.walker.extension = ext.clone();
    }
    if matches.get_flag("verbose") {
        config.runtime.verbose = true;
    }
    if matches.get_flag("parallel") {
        config.runtime.parallel = true;
    }

    config.validate()?;
    Ok(config)
}
