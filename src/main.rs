// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stdio driver.
//!
//! Reads one JSON operation per line from stdin, applies it to an in-memory model and writes one
//! JSON response per line to stdout. Logs go to stderr.

use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use ecore_diagram_server::action::{handle_action, operation_schema};
use ecore_diagram_server::config::ServerConfig;
use ecore_diagram_server::model::{library_package, EcoreModelState};
use ecore_diagram_server::ops::OperationHandlerRegistry;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <path>] [--demo] [--verbose]\n  {program} --schema\n\nReads JSON operations (one per line) from stdin and writes JSON responses to stdout.\n--demo starts from a built-in library model instead of an empty package.\n--schema prints the JSON schema of accepted operations and exits."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config: Option<PathBuf>,
    demo: bool,
    verbose: bool,
    schema: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config = Some(PathBuf::from(path));
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--verbose" | "-v" => options.verbose = true,
            "--schema" => options.schema = true,
            _ => return Err(()),
        }
    }

    if options.schema && (options.demo || options.config.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    if options.schema {
        println!("{}", serde_json::to_string_pretty(&operation_schema())?);
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let mut state = if options.demo {
        EcoreModelState::from_package(library_package())?
    } else {
        EcoreModelState::empty("model", "http://example.org/model")
    };
    let registry = OperationHandlerRegistry::with_default_handlers(&config);
    tracing::info!(
        demo = options.demo,
        ns_uri = state.package().ns_uri(),
        elements = state.index().len(),
        "ready for operations on stdin"
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_action(&registry, &mut state, &line);
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    state.verify_index()?;
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "ecore-diagram-server".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing(options.verbose);
    if let Err(err) = run(options) {
        eprintln!("ecore-diagram-server: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_config_and_demo() {
        let options = parse(&["--config", "server.toml", "--demo"]).expect("options");
        assert_eq!(
            options,
            CliOptions {
                config: Some(PathBuf::from("server.toml")),
                demo: true,
                verbose: false,
                schema: false,
            }
        );
    }

    #[test]
    fn rejects_missing_config_path_and_unknown_flags() {
        assert_eq!(parse(&["--config"]), Err(()));
        assert_eq!(parse(&["--mcp"]), Err(()));
        assert_eq!(parse(&["--demo", "--demo"]), Err(()));
    }

    #[test]
    fn schema_cannot_be_combined_with_model_options() {
        assert!(parse(&["--schema"]).is_ok());
        assert_eq!(parse(&["--schema", "--demo"]), Err(()));
    }
}
