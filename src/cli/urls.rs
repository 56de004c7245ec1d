//! `urls` subcommand: print the URL representations of an image.

use crate::cli::UrlsArgs;
use crate::config::Config;
use crate::log;
use crate::urls;
use crate::viewer::display_prefix;
use anyhow::Result;

pub fn print_urls(args: &UrlsArgs, config: &Config) -> Result<()> {
    let base_url = args.base_url.as_deref().unwrap_or(&config.urls.base_url);

    // Formatters are called individually so the optional webroot reaches
    // the web form; a missing file still fails here via the data URL.
    let file_url = urls::file_url(&args.image);
    let data_url = urls::data_url(&args.image)?;
    let web_url = urls::web_url(&args.image, base_url, args.webroot.as_deref())?;

    log!("urls"; "file: {file_url}");
    log!("urls"; "web:  {web_url}");
    if args.full {
        log!("urls"; "data: {data_url}");
    } else {
        log!("urls"; "data: {}", display_prefix(&data_url));
    }
    Ok(())
}
