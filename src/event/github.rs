use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// A stripped down model of the push event payload GitHub posts to webhooks.
/// Only the fields the validator inspects are kept; unknown fields are
/// ignored and absent ones default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PushEvent {
    /// The git ref the push targeted, e.g. `refs/heads/master`.
    #[serde(default, rename = "ref")]
    pub(crate) git_ref: String,
    #[serde(default)]
    pub(crate) head_commit: HeadCommit,
    #[serde(default)]
    pub(crate) repository: Repository,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct HeadCommit {
    /// Paths of the files this push modified.
    #[serde(default)]
    pub(crate) modified: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Repository {
    /// `owner/name` identifier of the repository the event came from.
    #[serde(default)]
    pub(crate) full_name: String,
}

#[derive(Debug, Error)]
#[error("malformed webhook payload: {0}")]
pub(crate) struct DecodeError(#[from] serde_json::Error);

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("webhook ref does not target expected branch {expected}")]
    BranchMismatch { expected: String },
    #[error("webhook from unexpected repository: {actual}")]
    RepositoryMismatch { actual: String },
}

impl PushEvent {
    pub(crate) fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Check that the push targeted the configured branch and repository,
    /// then whether it modified `users_file`. `Ok(false)` means the event is
    /// fine but doesn't touch the watched file; mismatches are errors.
    pub(crate) fn validate(
        &self,
        users_file: &str,
        config: &Config,
    ) -> Result<bool, ValidationError> {
        // Suffix match: a ref like `refs/heads/not-master` also passes for
        // branch `master`.
        if !self.git_ref.ends_with(&config.branch) {
            return Err(ValidationError::BranchMismatch {
                expected: config.branch.clone(),
            });
        }
        if self.repository.full_name != config.repo {
            return Err(ValidationError::RepositoryMismatch {
                actual: self.repository.full_name.clone(),
            });
        }
        Ok(self.head_commit.modified.iter().any(|m| m == users_file))
    }
}
