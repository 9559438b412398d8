//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("Helm - a template as a service utility");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));

    if detailed {
        let builtins: Vec<&str> = crate::plugin::builtin_names().collect();

        println!("\nDetailed Information:");
        println!("  - Built-in input plugins: {}", builtins.join(", "));
        println!("  - CSV options: delimiter, quote, trim, comment");
        println!("  - JSON options: pointer");
        println!("  - Tera templates with shared template directories");
        println!(
            "  - Template context: records, record_count, fields, format, source, rendered_at, vars"
        );
        println!("  - Reads from files or stdin ('-')");
    }

    Ok(())
}
