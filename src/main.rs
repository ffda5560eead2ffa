#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
#[cfg(test)]
mod fixtures;
mod github;
mod octocrab_utils;
mod report;
mod repos;
mod runs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_tracing(cli.verbose);

    // Set global octocrab instance using the token from the environment
    octocrab::initialise(cli.github_client()?);

    let rules = config::load(&cli.config_path)?;
    let github_api = octocrab::instance();

    let username = repos::authenticated_login(&github_api).await?;
    tracing::debug!("Authenticated as {username}");

    let candidates = repos::expand(&github_api, &username, rules).await?;

    let mut report = report::Report::default();
    for candidate in &candidates {
        tracing::debug!(
            "Getting workflow runs for {}",
            candidate.repository.full_name
        );
        tracing::debug!("permissions: {:?}", candidate.permission);
        let urls = runs::awaiting(&github_api, candidate).await?;
        report.add(candidate, urls);
    }

    if report.awaiting_count() > 0 {
        tracing::debug!("Workflow runs awaiting approval were found");
    }

    if let Some(report_path) = &cli.report_path {
        tracing::debug!("Writing report to {}", report_path.display());
        report.write(report_path)?;
    }
    Ok(())
}
