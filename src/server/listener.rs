use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Router};
use futures::{channel::mpsc::Sender, SinkExt};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::event::{Event, PushEvent};

#[derive(Debug, Clone)]
struct AppState {
    sender: Sender<Event>,
    config: Config,
    users_file: String,
}

async fn handle(
    State(mut state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, (StatusCode, String)> {
    let event = PushEvent::decode(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let relevant = event
        .validate(&state.users_file, &state.config)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    if !relevant {
        return Ok("skipped");
    }
    state
        .sender
        .send(Event::Sync {
            path: state.users_file.clone(),
        })
        .await
        .map(|()| "enqueued")
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error: Failed to send event".to_owned(),
            )
        })
}

pub(crate) fn listen(sender: Sender<Event>, config: Config, users_file: String) -> Router {
    let state = AppState {
        sender,
        config,
        users_file,
    };

    Router::new()
        .route("/", post(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests;
