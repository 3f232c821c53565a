// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! printquote CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use printquote::cli::{Reporter, Runner};
use printquote::config::Settings;
use printquote::geometry::analyze;
use printquote::io;
use printquote::pricing::RateOverrides;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "printquote")]
#[command(about = "Estimate 3D-printing cost from STL meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to ./printquote.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote one or more STL files or directories of STL files
    Quote {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Rate overrides as a JSON object, e.g. '{"markupPercent": 10}'
        #[arg(short, long)]
        rates: Option<String>,

        /// Print quotes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show format, volume, surface area and bounds of an STL file
    Inspect {
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective rate configuration
    Rates {
        /// Rate overrides as a JSON object
        #[arg(short, long)]
        rates: Option<String>,

        /// Print rates as JSON
        #[arg(long, conflicts_with = "toml")]
        json: bool,

        /// Print rates as TOML, ready to paste into a settings file
        #[arg(long)]
        toml: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;

    match &cli.command {
        Commands::Quote {
            inputs,
            rates,
            json,
        } => quote_command(inputs, rates.as_deref(), *json, &settings, cli.verbose),
        Commands::Inspect { input, json } => inspect_command(input, *json),
        Commands::Rates { rates, json, toml } => {
            rates_command(rates.as_deref(), *json, *toml, &settings)
        }
        Commands::Version => {
            println!("printquote v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(Settings::from_file(path)?
            .with_env_overrides(|key| std::env::var(key).ok())),
        None => Settings::load(),
    }
}

/// Settings overrides with command-line overrides stacked on top
fn effective_overrides(settings: &Settings, raw: Option<&str>) -> RateOverrides {
    settings.rates.layer(&RateOverrides::parse_optional(raw))
}

fn quote_command(
    inputs: &[PathBuf],
    raw_rates: Option<&str>,
    json: bool,
    settings: &Settings,
    verbose: bool,
) -> Result<()> {
    let files = Runner::discover(inputs)?;
    if files.is_empty() {
        Reporter::report_error("No STL files found");
        std::process::exit(1);
    }

    let runner = Runner::new(effective_overrides(settings, raw_rates), settings.max_file_bytes);

    let progress = if verbose && files.len() > 1 && !json {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let outcomes = runner.quote_all(&files, |_| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    });

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let mut quotes = Vec::new();
    let mut failed = 0;

    for outcome in outcomes {
        match outcome.result {
            Ok(quote) => {
                if !json {
                    Reporter::report_quote(&quote, outcome.duration);
                }
                quotes.push(quote);
            }
            Err(e) => {
                failed += 1;
                Reporter::report_error(&format!("{:#}", e));
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&quotes)?);
    } else if files.len() > 1 {
        let grand_total = quotes.iter().map(|q| q.total()).sum();
        Reporter::report_summary(quotes.len(), failed, grand_total);
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn inspect_command(input: &Path, json: bool) -> Result<()> {
    let (format, mesh) = io::import_stl_file(input)?;
    let stats = analyze(&mesh);

    if json {
        let report = serde_json::json!({
            "file": input.display().to_string(),
            "format": format,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Reporter::report_stats(&input.display().to_string(), format, &stats);
        if stats.triangle_count == 0 {
            println!("{}", "Mesh has no triangles; volume is zero.".yellow());
        }
    }

    Ok(())
}

fn rates_command(
    raw_rates: Option<&str>,
    json: bool,
    as_toml: bool,
    settings: &Settings,
) -> Result<()> {
    let rates = effective_overrides(settings, raw_rates).resolve();

    if json {
        println!("{}", serde_json::to_string_pretty(&rates)?);
    } else if as_toml {
        println!("[rates]");
        print!("{}", toml::to_string_pretty(&rates).context("Failed to serialize rates")?);
    } else {
        Reporter::report_rates(&rates);
    }

    Ok(())
}
