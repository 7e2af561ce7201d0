mod github;

pub(crate) use github::{DecodeError, PushEvent, ValidationError};

/// Work item handed from the webhook listener to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// Fetch `path` from the configured repository and branch.
    Sync { path: String },
}
