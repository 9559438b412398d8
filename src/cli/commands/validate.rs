//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration file")
        .arg(utils::config_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;
    // Building the app also builds every configured reader's registry entry
    let app = utils::create_app(config)?;

    // Resolve once so invalid plugin options surface here rather than at render time
    for name in app.registry().list_available() {
        app.registry().resolve(name)?;
    }

    let config = app.config();
    println!("Configuration is valid!");
    println!("Version: {}", config.version);
    println!(
        "Input plugins: {}",
        app.registry().list_available().collect::<Vec<_>>().join(", ")
    );
    if let Some(format) = &config.render.default_format {
        println!("Default format: {}", format);
    }
    println!("Template directories: {}", config.render.template_dirs.len());
    for dir in &config.render.template_dirs {
        println!("  - {}", dir.display());
    }

    Ok(())
}
