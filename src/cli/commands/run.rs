use anyhow::Result;
use clap::ArgMatches;
use std::time::Instant;

use enum_retrofit::{Config, Direction, FileWalker};

use crate::cli::report::{OutputFormat, print_batch};
use crate::cli::utils::format_duration;

/// `apply` and `revert` share everything but the direction.
pub fn handle_run(matches: &ArgMatches, mut config: Config, direction: Direction) -> Result<()> {
    if matches.get_flag("dry-run") {
        config.runtime.dry_run = true;
    }
    let format = OutputFormat::parse(
        matches.get_one::<String>("format").map(String::as_str).unwrap_or("plain"),
    );
    let verbose = config.runtime.verbose;

    if verbose && format == OutputFormat::Plain {
        println!("🔧 enum-retrofit {}", direction);
        println!("Root: {}", config.walker.root.display());
        println!("Marker: {} ({})", config.marker.interface, config.marker.import);
        if config.runtime.dry_run {
            println!("🔍 Running in dry-run mode");
        }
        println!();
    }

    let start_time = Instant::now();
    let walker = FileWalker::from_config(&config)?;
    let report = walker.run(direction)?;

    print_batch(&report, format, verbose)?;
    if verbose && format == OutputFormat::Plain {
        println!("Finished in {}", format_duration(start_time.elapsed()));
    }

    Ok(())
}
