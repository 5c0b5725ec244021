//! Command-line interface for gmi
//! This binary parses a gemtext document and renders it in one of the registered formats.
//!
//! Usage:
//!   gmi [`<path>`] [--format `<format>`] [--output `<file>`] [--config `<file>`]
//!   gmi --list-formats
//!
//! Without a path (or with `-`) the document is read from stdin. Logging goes to stderr and
//! is controlled with `RUST_LOG` (default `gmi=warn`).

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use gmi::gemtext::config::Loader;
use gmi::gemtext::formats::{DocumentView, FormatRegistry};
use gmi::gemtext::parsing::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn cli() -> Command {
    Command::new("gmi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse text/gemini documents and render them as html, debug dumps, json, ...")
        .arg(
            Arg::new("path")
                .help("Path to the gemtext file (reads stdin when absent or '-')")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default taken from the configuration, normally 'html')"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the output to this file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gmi=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run(cli().get_matches()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(matches: ArgMatches) -> Result<()> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let config = loader.build().context("failed to load configuration")?;
    let registry = FormatRegistry::with_defaults(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.default_format.clone());
    if !registry.has(&format) {
        bail!(
            "unknown format '{}' (available formats: {})",
            format,
            registry.list_formats().join(", ")
        );
    }

    let mut parser = Parser::new();
    match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => {
            debug!("reading document from stdin");
            parser
                .parse(io::stdin().lock())
                .context("failed to parse stdin")?;
        }
        Some(path) => {
            debug!(path, "reading document");
            let file = File::open(path).with_context(|| format!("could not open file: {}", path))?;
            parser
                .parse(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path))?;
        }
    }
    info!(lines = parser.lines().len(), format = %format, "parsed document");

    let view = DocumentView::from_parser(&mut parser);
    let rendered = registry.serialize(&view, &format)?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("could not create file: {}", path))?;
            file.write_all(rendered.as_bytes())
                .with_context(|| format!("could not write to {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("could not write to stdout")?;
            stdout.flush().context("could not write to stdout")?;
        }
    }

    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
