use std::env;

use secrecy::SecretString;
use thiserror::Error;

pub(crate) const TOKEN_VAR: &str = "GITHUB_TOKEN";
const REPO_VAR: &str = "GITHUB_REPO";
const BRANCH_VAR: &str = "GITHUB_BRANCH";
const API_URL_VAR: &str = "GITHUB_API_URL";

const DEFAULT_REPO: &str = "heroku/access-requests";
const DEFAULT_BRANCH: &str = "master";
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Name of the systemd credential consulted when `GITHUB_TOKEN` is unset
/// (see <https://systemd.io/CREDENTIALS/>).
#[cfg(target_os = "linux")]
const TOKEN_CREDENTIAL: &str = "github_token";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Process-wide GitHub settings, loaded once at startup and read-only
/// afterwards. Cloned into each component that needs it.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// API token. Redacted from `Debug` output, never logged.
    pub(crate) token: SecretString,
    /// Repository in `owner/name` form.
    pub(crate) repo: String,
    pub(crate) branch: String,
    pub(crate) api_url: String,
}

impl Config {
    /// Read settings from the environment. The token is required, everything
    /// else falls back to a default. Whether a missing token is fatal is the
    /// caller's decision.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token: token_from_env()?,
            repo: var_or_default(REPO_VAR, DEFAULT_REPO)?,
            branch: var_or_default(BRANCH_VAR, DEFAULT_BRANCH)?,
            api_url: var_or_default(API_URL_VAR, DEFAULT_API_URL)?,
        })
    }
}

fn token_from_env() -> Result<SecretString, ConfigError> {
    match env::var(TOKEN_VAR) {
        Ok(token) => Ok(token.into()),
        Err(env::VarError::NotPresent) => token_credential().ok_or(ConfigError::MissingToken),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(TOKEN_VAR)),
    }
}

fn var_or_default(name: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_owned()),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

#[cfg(target_os = "linux")]
fn token_credential() -> Option<SecretString> {
    use libsystemd::credentials::CredentialsLoader;
    use std::io::{BufReader, Read};

    let loader = CredentialsLoader::open().ok()?;
    let file = loader.get(TOKEN_CREDENTIAL).ok()?;
    let mut buffer = String::new();
    BufReader::new(file).read_to_string(&mut buffer).ok()?;
    Some(buffer.into())
}

#[cfg(not(target_os = "linux"))]
fn token_credential() -> Option<SecretString> {
    None
}
