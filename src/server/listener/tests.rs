use axum::{body::Body, extract::Request, http::StatusCode, routing::post, Router};
use futures::{
    channel::mpsc::{channel, Receiver},
    StreamExt,
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::util::ServiceExt;

use crate::config::Config;
use crate::event::Event;
use crate::fixtures::PUSH;

use super::{handle, AppState};

const USERS_FILE: &str = "splunk-users-test.yml";

fn app() -> (Router, Receiver<Event>) {
    let (sender, receiver) = channel(1);
    let state = AppState {
        sender,
        config: Config {
            token: String::from("hunter2").into(),
            repo: "heroku/access-requests".to_owned(),
            branch: "test-branch".to_owned(),
            api_url: "https://api.github.com".to_owned(),
        },
        users_file: USERS_FILE.to_owned(),
    };
    let router = Router::new().route("/", post(handle)).with_state(state);
    (router, receiver)
}

fn make_webhook_request(body: impl Into<Body>) -> Request {
    Request::builder().method("POST").body(body.into()).unwrap()
}

async fn body_string(body: Body) -> String {
    String::from_utf8_lossy(&body.collect().await.unwrap().to_bytes()).into_owned()
}

#[tokio::test]
async fn should_error_on_malformed_payload() {
    let (app, mut recv) = app();
    let request = make_webhook_request("not json");
    let res = app.oneshot(request).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{res:?}");
    assert!(body_string(res.into_body())
        .await
        .starts_with("malformed webhook payload"));
    assert!(recv.next().await.is_none());
}

#[tokio::test]
async fn should_error_on_wrong_branch() {
    let (app, mut recv) = app();
    let payload = json!({
        "ref": "refs/heads/develop",
        "repository": { "full_name": "heroku/access-requests" },
        "head_commit": { "modified": [USERS_FILE] },
    });
    let request = make_webhook_request(payload.to_string());
    let res = app.oneshot(request).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{res:?}");
    assert_eq!(
        &body_string(res.into_body()).await,
        "webhook ref does not target expected branch test-branch"
    );
    assert!(recv.next().await.is_none());
}

#[tokio::test]
async fn should_error_on_wrong_repository() {
    let (app, mut recv) = app();
    let payload = json!({
        "ref": "refs/head/test-branch",
        "repository": { "full_name": "heroku/not-access-requests" },
        "head_commit": { "modified": [USERS_FILE] },
    });
    let request = make_webhook_request(payload.to_string());
    let res = app.oneshot(request).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{res:?}");
    assert_eq!(
        &body_string(res.into_body()).await,
        "webhook from unexpected repository: heroku/not-access-requests"
    );
    assert!(recv.next().await.is_none());
}

#[tokio::test]
async fn should_skip_on_unwatched_files() {
    let (app, mut recv) = app();
    let payload = json!({
        "ref": "refs/head/test-branch",
        "repository": { "full_name": "heroku/access-requests" },
        "head_commit": { "modified": ["README.md"] },
    });
    let request = make_webhook_request(payload.to_string());
    let res = app.oneshot(request).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK, "{res:?}");
    assert_eq!(body_string(res.into_body()).await, "skipped");
    assert!(recv.next().await.is_none());
}

#[tokio::test]
async fn should_enqueue_valid_push_event() {
    let (app, mut recv) = app();
    let request = make_webhook_request(PUSH);
    let res = app.oneshot(request).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK, "{res:?}");
    assert_eq!(body_string(res.into_body()).await, "enqueued");
    assert_eq!(
        recv.next().await,
        Some(Event::Sync {
            path: USERS_FILE.to_owned()
        })
    );
}
