//! `quoteform` command-line entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quoteform::cli::{CliArgs, Command, ConvertArgs};
use quoteform::config::Config;
use quoteform::{converter, topic};

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` if set, otherwise a level derived from the verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mode = args.mode();
    let config = Config::load()?.with_overrides(args.input, args.output);

    converter::convert_with(&config.input_path, &config.output_path, mode).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;
    Ok(())
}

fn run_inspect(file: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let path = match file {
        Some(path) => path,
        None => Config::load()?.output_path,
    };

    let doc = topic::load_topic(&path)
        .with_context(|| format!("Failed to read topic file {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} ({}) {}", doc.topic.name, doc.topic.id, doc.topic.color);
    if let Some(description) = &doc.topic.description {
        println!("{description}");
    }
    for nugget in &doc.nuggets {
        println!("  [{}] {}: {}", nugget.id, nugget.topic, nugget.description);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    match args.command {
        Some(Command::Convert(convert)) => run_convert(convert),
        Some(Command::Inspect { file, json }) => run_inspect(file, json),
        None => run_convert(args.convert),
    }
}
