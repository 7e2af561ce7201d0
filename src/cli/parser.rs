use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start webhook server
    Serve(ServeArgs),
    /// Fetch a file from the configured repository and branch
    Fetch(FetchArgs),
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    /// IP and port to listen on
    #[arg(default_value = "0.0.0.0:3000")]
    pub(crate) addr: String,
    /// File in the repository whose modification triggers a fetch
    #[arg(long, env = "GITHUB_USERS_FILE", default_value = "splunk-users.yml")]
    pub(crate) users_file: String,
}

#[derive(Args)]
pub(crate) struct FetchArgs {
    /// Path of the file to fetch, relative to the repository root
    pub(crate) path: String,
}
