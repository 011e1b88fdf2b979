use std::io;

use anyhow::Context;
use clap::Parser;
use fanin_select::{run, run_blocking, Args, Backend};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;

    // stdout carries drained values only, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    match args.backend {
        Backend::Async => {
            let mut out = io::stdout().lock();
            run(&args, &mut out).await?;
        }
        // The blocking select loop parks its thread, keep it off the runtime.
        Backend::Blocking => {
            let args = args.clone();
            tokio::task::spawn_blocking(move || {
                let mut out = io::stdout().lock();
                run_blocking(&args, &mut out)
            })
            .await
            .context("blocking drain task failed")??;
        }
    }

    Ok(())
}
