//! Render command implementation

use crate::cli::utils;
use crate::plugin::InputSource;
use crate::utils as helm_utils;
use crate::RenderRequest;
use anyhow::{anyhow, Context, Result};
use clap::{ArgMatches, Command};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub fn command() -> Command {
    Command::new("render")
        .about("Render a template over the records of an input file")
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
        .arg(
            clap::Arg::new("template")
                .short('t')
                .long("template")
                .help("Template file")
                .value_name("FILE")
                .required(true),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (defaults to stdout)")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("var")
                .long("var")
                .help("Template variable, KEY=VALUE (repeatable)")
                .value_name("KEY=VALUE")
                .action(clap::ArgAction::Append),
        )
        .arg(utils::config_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let start_time = Instant::now();
    let app = utils::create_app(utils::load_config(matches)?)?;

    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("Missing input"))?;
    let template_path = matches
        .get_one::<String>("template")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing template"))?;

    let template = tokio::fs::read_to_string(&template_path)
        .await
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let variables = parse_variables(matches.get_many::<String>("var").into_iter().flatten())?;

    let request = RenderRequest {
        format: matches.get_one::<String>("format").cloned(),
        input: InputSource::from_arg(input),
        template_name: template_name(&template_path),
        template,
        variables,
    };

    let output = app.render(&request)?;

    match matches.get_one::<String>("output").map(PathBuf::from) {
        Some(output_path) => {
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                helm_utils::ensure_directory(parent)?;
            }
            tokio::fs::write(&output_path, &output.content)
                .await
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            println!(
                "Rendered {} records from {} to {}",
                output.record_count,
                output.format,
                output_path.display()
            );
        }
        None => print!("{}", output.content),
    }

    info!(
        "Render completed in {}",
        helm_utils::format_duration(start_time.elapsed())
    );

    Ok(())
}

fn parse_variables<'a>(args: impl Iterator<Item = &'a String>) -> Result<IndexMap<String, String>> {
    args.map(|arg| helm_utils::parse_key_value(arg)).collect()
}

/// The file name decides autoescaping, so keep it rather than the full path
fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template".to_string())
}
