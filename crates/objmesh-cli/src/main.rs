// ObjMesh - Wavefront Model Loading
// Copyright (C) 2025 ObjMesh Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.


use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use objmesh_config::{Config, ConfigLoader};
use objmesh_observability::{init_tracing_with_config, LogConfig, LogError, LogFormat};
use std::io;
use std::path::PathBuf;

mod commands;
mod output;
mod progress;

use commands::{ConfigCmd, InspectCmd, MaterialsCmd};

#[derive(Parser)]
#[command(name = "objmesh")]
#[command(version, about = "Load Wavefront OBJ models and report the meshes a renderer would get")]
#[command(propagate_version = true)]
#[command(author = "ObjMesh Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Log format (pretty, json, compact); overrides the configuration
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<String>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load OBJ models and report their meshes
    Inspect(InspectCmd),

    /// Parse an MTL library and list its materials
    Materials(MaterialsCmd),

    /// Print the effective configuration
    Config(ConfigCmd),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color.as_str() {
        "never" => console::set_colors_enabled(false),
        "always" => console::set_colors_enabled(true),
        "auto" => {}
        _ => {
            output::error(&format!("Invalid color option: {}", cli.color));
            std::process::exit(1);
        }
    }

    let result = run(&cli);

    if let Err(e) = result {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = ConfigLoader::new()
        .resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;

    init_logging(cli, &config)?;

    match &cli.command {
        Commands::Inspect(cmd) => cmd.execute(&config, cli.quiet),
        Commands::Materials(cmd) => cmd.execute(&config, cli.quiet),
        Commands::Config(cmd) => cmd.execute(&config),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "objmesh", &mut io::stdout());
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Flags win over the configuration file: `--quiet` keeps only errors,
/// `--verbose` raises to debug.
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        config.observability.log_level.as_str()
    };
    let format: LogFormat = cli
        .log_format
        .as_deref()
        .unwrap_or(&config.observability.log_format)
        .parse()
        .context("Invalid log format")?;

    let log_config = LogConfig::new()
        .with_format(format)
        .with_level(level)
        .with_color(console::colors_enabled_stderr());
    install_logging(log_config)
}

/// Install the subscriber; one installed earlier in the process is kept
fn install_logging(log_config: LogConfig) -> Result<()> {
    match init_tracing_with_config(log_config) {
        Ok(()) | Err(LogError::AlreadyInitialized(_)) => Ok(()),
        Err(e) => Err(e).context("Failed to initialize logging"),
    }
}

fn print_version() {
    println!("objmesh {}", env!("CARGO_PKG_VERSION"));
    println!("rust-version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("license: {}", env!("CARGO_PKG_LICENSE"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_logging_reports_bad_filter() {
        let err = install_logging(LogConfig::new().with_level("objmesh_loader=verbose")).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid log filter"));
    }

    #[test]
    fn test_install_logging_tolerates_existing_subscriber() {
        install_logging(LogConfig::new().with_level("warn")).unwrap();
        install_logging(LogConfig::new().with_level("debug")).unwrap();
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
