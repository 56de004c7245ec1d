//! Imgurl - alternate URL representations for local image files.

#![allow(dead_code)]

mod cli;
mod config;
mod error;
mod logger;
mod server;
mod urls;
mod utils;
mod viewer;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;

    match &cli.command {
        Commands::Urls { args } => cli::urls::print_urls(args, &config),
        Commands::View { args } => cli::view::write_view(args, &config),
        Commands::Serve { args } => cli::serve::run_serve(args, &config),
        Commands::Demo { args } => cli::demo::run_demo(args, &config),
    }
}
