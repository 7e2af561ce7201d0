use anyhow::Result;
use futures::FutureExt;
use futures::{channel::mpsc::channel, TryFutureExt};
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::event::Event;
use crate::github::ContentClient;

mod listener;
mod runner;

pub(crate) async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    let (sender, receiver) = channel::<Event>(32);
    let client = ContentClient::new(config.clone());

    let service = listener::listen(sender, config, args.users_file);
    let tcp_listener = TcpListener::bind(&args.addr).await?;
    tracing::info!("Listening on {}", args.addr);

    let mut set: JoinSet<Result<()>> = JoinSet::new();
    set.spawn(axum::serve(tcp_listener, service).into_future().err_into());
    set.spawn(runner::runner(client, receiver).map(Result::Ok));
    while let Some(res) = set.join_next().await {
        let _ = res?;
    }
    Ok(())
}
