//! `view` subcommand: write the HTML viewer page.

use crate::cli::ViewArgs;
use crate::config::Config;
use crate::log;
use crate::utils::mime;
use crate::{urls, viewer};
use anyhow::{Context, Result};

pub fn write_view(args: &ViewArgs, config: &Config) -> Result<()> {
    let base_url = args.base_url.as_deref().unwrap_or(&config.urls.base_url);
    let output = args.output.as_deref().unwrap_or(&config.viewer.output);

    if !mime::is_image(mime::from_path(&args.image)) {
        log!("viewer"; "warning: {} has no recognized image extension, embedding anyway",
            args.image.display());
    }

    let url_set = urls::generate_all(&args.image, base_url)?;
    let written = viewer::write_viewer(&args.image, &url_set, output)?;
    log!("viewer"; "wrote {}", written.display());

    if args.open {
        open::that(&written)
            .with_context(|| format!("failed to open {}", written.display()))?;
    }
    Ok(())
}
