// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("podfeed")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate podcast RSS feeds from a TOML manifest")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Render the feed described by a manifest")
                .arg(Arg::new("manifest").required(true).value_name("MANIFEST").help("Path to the manifest file"))
                .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Write the feed here instead of the manifest's output path")),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a manifest and list every problem")
                .arg(Arg::new("manifest").required(true).value_name("MANIFEST").help("Path to the manifest file")),
        )
        .subcommand(
            Command::new("init")
                .about("Write a template manifest")
                .arg(Arg::new("path").value_name("PATH").help("Where to create the manifest").default_value(commands::DEFAULT_MANIFEST)),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let default_filter = if matches.get_flag("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match matches.subcommand() {
        Some(("build", sub_matches)) => commands::build(sub_matches).context("Failed to build feed"),
        Some(("validate", sub_matches)) => commands::validate(sub_matches),
        Some(("init", sub_matches)) => commands::init(sub_matches).context("Failed to create manifest"),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
