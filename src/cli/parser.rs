use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use secrecy::SecretString;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path to a YAML file defining the repositories to monitor workflows in
    pub(crate) config_path: PathBuf,
    /// Path to write a JSON report to
    #[arg(long)]
    pub(crate) report_path: Option<PathBuf>,
    /// Enable progress output
    #[arg(long)]
    pub(crate) verbose: bool,
    /// Personal access token for the GitHub API
    #[arg(long, env, hide_env_values = true)]
    github_token: SecretString,
}

impl Cli {
    pub(crate) fn github_client(&self) -> Result<octocrab::Octocrab> {
        super::octocrab_utils::token_to_octocrab(&self.github_token)
    }
}
