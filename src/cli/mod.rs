//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("helm")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A template as a service utility: render reports from CSV and JSON inputs")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::info::command())
            .subcommand(commands::plugins::command())
            .subcommand(commands::records::command())
            .subcommand(commands::render::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            Some(("plugins", sub_matches)) => commands::plugins::run(sub_matches).await,
            Some(("records", sub_matches)) => commands::records::run(sub_matches).await,
            Some(("render", sub_matches)) => commands::render::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::Result;
    use std::path::PathBuf;
    use tracing::debug;

    /// The `--config` argument shared by commands that load configuration
    pub fn config_arg() -> clap::Arg {
        clap::Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file path")
            .value_name("FILE")
    }

    /// Get configuration file path from arguments or the default locations
    pub fn get_config_path(matches: &clap::ArgMatches) -> Option<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Some(PathBuf::from(config_path));
        }

        let mut default_paths = vec![
            PathBuf::from(".helm.yaml"),
            PathBuf::from(".helm.yml"),
            PathBuf::from("helm.yaml"),
            PathBuf::from("helm.yml"),
        ];
        if let Ok(config_dir) = crate::utils::get_config_dir() {
            default_paths.push(config_dir.join("config.yaml"));
        }

        default_paths.into_iter().find(|path| path.exists())
    }

    /// Load configuration from file, or the defaults when no file exists
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        match get_config_path(matches) {
            Some(config_path) => {
                debug!("Loading configuration from {:?}", config_path);
                crate::Config::from_file(&config_path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(crate::Config::default())
            }
        }
    }

    /// Create Helm instance
    pub fn create_app(config: crate::Config) -> Result<crate::Helm> {
        Ok(crate::Helm::new(config)?)
    }
}
