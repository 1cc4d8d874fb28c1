//! Folio - a locale-aware markdown publishing pipeline.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod embed;
mod logger;
mod page;
mod render;
mod sanitize;
mod toc;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Routes { pretty } => cli::routes::run_routes(&config, *pretty),
    }
}
