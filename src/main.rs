use clap::{Arg, ArgAction, Command};
use dotenv::dotenv;
use enum_retrofit::{Direction, logging};
use std::path::PathBuf;
use std::process;

mod cli;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    if let Err(e) = run_command(matches) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .help("Output format")
        .value_parser(["plain", "json"])
        .default_value("plain")
}

fn dry_run_arg() -> Arg {
    Arg::new("dry-run")
        .long("dry-run")
        .help("Compute changes but don't write any file")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("enum-retrofit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Retrofit enums with the BaseEnum labeling interface, or strip it again")
        .long_about(
            "Finds the code and description fields of each enum under a source root and adds \
             the BaseEnum import, interface and getCode()/getDesc() accessors. `revert` removes \
             them again by structural pattern.",
        )
        .arg_required_else_help(true)
        .subcommand(
            Command::new("apply")
                .about("Add the marker interface and accessors to every detectable enum")
                .arg(dry_run_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("revert")
                .about("Remove the marker import, interface and accessor blocks")
                .long_about(
                    "Removes the marker import and interface, plus every `@Override public String \
                     getCode()/getDesc()` whose body is a single return statement. Hand-written \
                     accessors of that exact shape are removed too.",
                )
                .arg(dry_run_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("detect")
                .about("Report the detected code and description fields without writing")
                .arg(format_arg()),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .help("Source root to walk")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .help("File extension to process")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file (defaults to ./retrofit.toml when present)")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .help("Process files in parallel")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}

fn run_command(matches: clap::ArgMatches) -> anyhow::Result<()> {
    let config = cli::load_config(&matches)?;
    logging::init_tracing(&config.logging, config.runtime.verbose);

    match matches.subcommand() {
        Some(("apply", sub_matches)) => {
            cli::commands::run::handle_run(sub_matches, config, Direction::Apply)?
        }
        Some(("revert", sub_matches)) => {
            cli::commands::run::handle_run(sub_matches, config, Direction::Revert)?
        }
        Some(("detect", sub_matches)) => cli::commands::detect::handle_detect(sub_matches, config)?,
        _ => {
            unreachable!("Command parsing should ensure we never reach this");
        }
    }

    Ok(())
}
