#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use tokio::io::AsyncWriteExt;

mod cli;
mod config;
mod event;
#[cfg(test)]
mod fixtures;
mod github;
mod server;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse();

    // Load settings once; both the validator and the fetcher read this value.
    let config = config::Config::from_env()?;

    match cli.command {
        cli::Commands::Serve(args) => {
            server::serve(config, args).await?;
        }
        cli::Commands::Fetch(args) => {
            let body = github::ContentClient::new(config).fetch(&args.path).await?;
            tokio::io::stdout().write_all(&body).await?;
        }
    }
    Ok(())
}
