//! Plugin listing CLI commands

use crate::cli::utils;
use crate::plugin::PluginMetadata;
use anyhow::{anyhow, Result};

/// Create the plugins command
pub fn command() -> clap::Command {
    clap::Command::new("plugins")
        .about("Inspect input plugins")
        .subcommand_negates_reqs(true)
        .subcommand(
            clap::Command::new("list")
                .about("List available input formats")
                .arg(
                    clap::Arg::new("detailed")
                        .short('d')
                        .long("detailed")
                        .help("Show detailed information")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(utils::config_arg()),
        )
        .subcommand(
            clap::Command::new("info")
                .about("Show input plugin information")
                .arg(clap::arg!(<NAME> "Plugin name, e.g. CsvInput"))
                .arg(utils::config_arg()),
        )
}

/// Run plugin command
pub async fn run(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => run_list(sub_matches, sub_matches.get_flag("detailed")),
        Some(("info", sub_matches)) => {
            let name = sub_matches
                .get_one::<String>("NAME")
                .ok_or_else(|| anyhow!("Missing plugin name"))?;
            run_info(sub_matches, name)
        }
        _ => {
            let _ = command().print_help();
            Ok(())
        }
    }
}

fn run_list(matches: &clap::ArgMatches, detailed: bool) -> Result<()> {
    let app = utils::create_app(utils::load_config(matches)?)?;
    let plugins = app.plugin_info();

    if plugins.is_empty() {
        println!("No input plugins registered.");
        return Ok(());
    }

    println!("Available input formats:");
    println!();

    for plugin in &plugins {
        if detailed {
            print_metadata(plugin, "  ");
            println!();
        } else {
            println!("  {}", plugin.name);
        }
    }

    Ok(())
}

fn run_info(matches: &clap::ArgMatches, name: &str) -> Result<()> {
    let app = utils::create_app(utils::load_config(matches)?)?;
    let plugin = app.registry().metadata(name)?;

    println!("Plugin Information:");
    print_metadata(&plugin, "  ");

    Ok(())
}

fn print_metadata(plugin: &PluginMetadata, indent: &str) {
    println!("{indent}Name: {}", plugin.name);
    println!("{indent}Version: {}", plugin.version);
    println!("{indent}Description: {}", plugin.description);
    println!("{indent}Extensions: {}", plugin.extensions.join(", "));
}
