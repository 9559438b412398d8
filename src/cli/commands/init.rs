//! Init command implementation

use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(".helm.yaml"),
        )
        .arg(
            clap::Arg::new("example")
                .short('e')
                .long("example")
                .help("Create example configuration")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing output path"))?;
    let example = matches.get_flag("example");

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "{} already exists; use --force to overwrite it",
            output_path.display()
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);

    let config = if example {
        create_example_config()
    } else {
        Config::default()
    };

    config.save_to_file(&output_path)?;

    info!("Configuration file created: {:?}", output_path);

    if example {
        println!("Example configuration created with CSV options and render variables.");
        println!("Edit the file to customize your plugins and settings.");
    } else {
        println!("Default configuration file created.");
        println!("Add plugin options and render settings to get started.");
    }

    Ok(())
}

pub(crate) fn create_example_config() -> Config {
    let mut config = Config::default();

    config.plugins.enabled = Some(vec!["CsvInput".to_string(), "JsonInput".to_string()]);
    config.plugins.options.insert(
        "CsvInput".to_string(),
        serde_yaml::to_value(crate::plugin::csv_input::CsvOptions {
            trim: true,
            ..Default::default()
        })
        .unwrap_or_default(),
    );

    config.render.default_format = Some("CsvInput".to_string());
    config.render.template_dirs = vec![PathBuf::from("./templates")];
    config
        .render
        .variables
        .insert("title".to_string(), "Inventory report".to_string());

    config
}
