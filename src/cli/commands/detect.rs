use anyhow::Result;
use clap::ArgMatches;

use enum_retrofit::{Config, FileWalker};

use crate::cli::report::{OutputFormat, print_detection};

pub fn handle_detect(matches: &ArgMatches, config: Config) -> Result<()> {
    let format = OutputFormat::parse(
        matches.get_one::<String>("format").map(String::as_str).unwrap_or("plain"),
    );

    let walker = FileWalker::from_config(&config)?;
    let report = walker.detect()?;
    print_detection(&report, format)
}
