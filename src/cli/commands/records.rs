//! Records command implementation

use crate::cli::utils;
use crate::plugin::InputSource;
use anyhow::{anyhow, Context, Result};
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("records")
        .about("Print the records an input plugin reads, as JSON")
        .arg(
            clap::Arg::new("format")
                .short('f')
                .long("format")
                .help("Input format (defaults to render.default_format)")
                .value_name("FORMAT"),
        )
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("Input file, or '-' for stdin")
                .value_name("FILE")
                .required(true),
        )
        .arg(utils::config_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let app = utils::create_app(utils::load_config(matches)?)?;

    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("Missing input"))?;
    let format = app.select_format(matches.get_one::<String>("format").map(String::as_str))?;

    let records = app
        .load_records(format, InputSource::from_arg(input))
        .with_context(|| format!("Failed to read {} as {}", input, format))?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
