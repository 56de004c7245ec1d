//! `serve` subcommand: serve a directory until Ctrl+C.

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::log;
use crate::server::StaticServer;
use anyhow::{Result, bail};
use crossbeam::channel;

pub fn run_serve(args: &ServeArgs, config: &Config) -> Result<()> {
    if !args.directory.is_dir() {
        bail!("not a directory: {}", args.directory.display());
    }

    let interface = args.interface.unwrap_or(config.serve.interface);
    let port = args.port.unwrap_or(config.serve.port);

    let mut server = StaticServer::new(&args.directory);
    server.start(interface, port)?;

    log!("serve"; "press Ctrl+C to stop");
    wait_for_ctrl_c()?;

    server.stop();
    Ok(())
}

/// Block the calling thread until Ctrl+C is received.
pub(crate) fn wait_for_ctrl_c() -> Result<()> {
    let (tx, rx) = channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = tx.try_send(());
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))?;

    rx.recv().ok();
    Ok(())
}
