// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tcvpc_cli::commands;
use tcvpc_cli::format::{Formatter, OutputFormat};
use tcvpc_config::{ClientProfile, load_config};
use tcvpc_error::ErrorCategory;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tcvpc", version, about = "Tencent Cloud VPC error code toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    /// Path to a TOML client profile.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: json | json-pretty | text | table | compact.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one error code.
    Lookup {
        /// Wire string, e.g. `InvalidVpcId.NotFound`.
        code: String,
    },

    /// List error codes.
    List {
        /// Only codes in this category (e.g. `limit-exceeded`).
        #[arg(long)]
        category: Option<ErrorCategory>,

        /// Only codes with this base (the part before the `.`).
        #[arg(long)]
        base: Option<String>,
    },

    /// Count error codes per category.
    Categories,

    /// Classify an API response body.
    Parse {
        /// Read the body from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,

        /// HTTP status the body came with.
        #[arg(long)]
        status: Option<u16>,
    },

    /// Inspect the client profile.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Load and validate the profile.
    Check,
    /// Print the effective profile as TOML.
    Show,
    /// Print the profile JSON schema.
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format);

    match run(cli, &formatter) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", formatter.format_error(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool, profile: &ClientProfile) {
    let filter = if debug || profile.is_debug() {
        EnvFilter::new("tcvpc=debug")
    } else {
        EnvFilter::new(format!("tcvpc={}", profile.log_level()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, formatter: &Formatter) -> Result<ExitCode> {
    let config_path = cli.config.as_deref();

    // `config check` reports load failures as diagnostics instead of bailing.
    let profile = match &cli.command {
        Commands::Config {
            action: ConfigAction::Check,
        } => load_config(config_path).unwrap_or_default(),
        _ => load_config(config_path).context("load client profile")?,
    };
    init_logging(cli.debug, &profile);
    tracing::debug!(target: "tcvpc.cli", config = ?config_path, language = profile.language(), "profile loaded");

    match cli.command {
        Commands::Lookup { code } => {
            let info = commands::lookup_code(&code)?;
            println!("{}", formatter.format_code(&info));
        }
        Commands::List { category, base } => {
            let infos = commands::list_codes(category, base.as_deref());
            tracing::debug!(target: "tcvpc.cli", matched = infos.len(), "listing codes");
            if !infos.is_empty() {
                println!("{}", formatter.format_codes(&infos));
            }
        }
        Commands::Categories => {
            println!("{}", formatter.format_categories(&commands::category_counts()));
        }
        Commands::Parse { file, status } => {
            let body = commands::read_body(file.as_deref())?;
            let report = commands::parse_response(&body, status);
            println!("{}", formatter.format_report(&report));
        }
        Commands::Config { action } => match action {
            ConfigAction::Check => {
                let diagnostics = commands::config_check(config_path)?;
                if diagnostics.is_empty() {
                    println!("ok");
                }
                for d in &diagnostics {
                    println!("{d}");
                }
                if diagnostics.iter().any(|d| d.starts_with("error:")) {
                    return Ok(ExitCode::FAILURE);
                }
            }
            ConfigAction::Show => print!("{}", commands::config_show(&profile)?),
            ConfigAction::Schema => println!("{}", commands::schema_json()?),
        },
    }

    Ok(ExitCode::SUCCESS)
}
