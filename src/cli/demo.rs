//! `demo` subcommand: end-to-end walkthrough with an embedded SVG.
//!
//! Writes the demo image, starts the local server over its directory,
//! generates the viewer page, opens it in the browser, and runs until
//! Ctrl+C.

use crate::cli::DemoArgs;
use crate::cli::serve::wait_for_ctrl_c;
use crate::config::Config;
use crate::log;
use crate::server::StaticServer;
use crate::{urls, viewer};
use anyhow::{Context, Result};
use std::fs;

/// Demo image, embedded at compile time (text-based SVG, no drawing
/// library involved).
const DEMO_SVG: &str = include_str!("demo_image.svg");

const DEMO_IMAGE: &str = "demo_image.svg";
const DEMO_VIEWER: &str = "demo_viewer.html";

pub fn run_demo(args: &DemoArgs, config: &Config) -> Result<()> {
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("failed to create {}", args.dir.display()))?;

    let image_path = args.dir.join(DEMO_IMAGE);
    fs::write(&image_path, DEMO_SVG)
        .with_context(|| format!("failed to write {}", image_path.display()))?;
    log!("demo"; "created {}", image_path.display());

    let mut server = StaticServer::new(&args.dir);
    let port = args.port.unwrap_or(config.serve.port);
    let base_url = server.start(config.serve.interface, port)?;

    let url_set = urls::generate_all(&image_path, &base_url)?;
    let viewer_path = viewer::write_viewer(&image_path, &url_set, &args.dir.join(DEMO_VIEWER))?;
    log!("demo"; "wrote {}", viewer_path.display());

    let viewer_url = format!("{base_url}/{DEMO_VIEWER}");
    log!("demo"; "viewer at {viewer_url}");
    if !args.no_open
        && let Err(e) = open::that(&viewer_url)
    {
        log!("error"; "failed to open browser: {e}");
    }

    log!("demo"; "press Ctrl+C to stop");
    wait_for_ctrl_c()?;

    server.stop();
    Ok(())
}
