//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Imgurl image URL generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: imgurl.toml)
    #[arg(short = 'C', long, default_value = "imgurl.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the URL representations of an image
    #[command(visible_alias = "u")]
    Urls {
        #[command(flatten)]
        args: UrlsArgs,
    },

    /// Write an HTML viewer page embedding all URL forms
    #[command(visible_alias = "v")]
    View {
        #[command(flatten)]
        args: ViewArgs,
    },

    /// Serve a directory over local HTTP until Ctrl+C
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        args: ServeArgs,
    },

    /// Run the self-contained demo (embedded SVG, viewer, local server)
    Demo {
        #[command(flatten)]
        args: DemoArgs,
    },
}

/// Urls command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct UrlsArgs {
    /// Image file to describe
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub image: PathBuf,

    /// Base URL for the web form (overrides config)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Web root for computing the served path (default: file name only)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub webroot: Option<PathBuf>,

    /// Print the full data URL instead of a truncated preview
    #[arg(short, long)]
    pub full: bool,
}

/// View command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ViewArgs {
    /// Image file to embed
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub image: PathBuf,

    /// Output HTML file (overrides config)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Base URL for the web form (overrides config)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Open the generated page in the system browser
    #[arg(long)]
    pub open: bool,
}

/// Serve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Directory to serve
    #[arg(default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
    #[arg(short, long)]
    pub interface: Option<IpAddr>,

    /// Port number to listen on (0 picks a free port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Demo command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DemoArgs {
    /// Directory to place the demo files in
    #[arg(long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Port number to listen on (0 picks a free port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Skip opening the browser
    #[arg(long)]
    pub no_open: bool,
}
