use std::pin::pin;

use anyhow::Result;
use futures::TryStreamExt;
use octocrab::{Octocrab, Page};
use serde::Serialize;

use crate::github::WorkflowRun;
use crate::repos::RepositoryCandidate;

#[derive(Serialize)]
struct RunFilter<'a> {
    event: &'a str,
    status: &'a str,
    per_page: u8,
}

/// List the pull-request workflow runs awaiting approval in a repository, in
/// API order, announcing each one as it is found.
pub(crate) async fn awaiting(
    github_api: &Octocrab,
    candidate: &RepositoryCandidate,
) -> Result<Vec<String>> {
    let page: Page<WorkflowRun> = github_api
        .get(
            format!(
                "/repos/{}/actions/runs",
                candidate.repository.full_name
            ),
            Some(&RunFilter {
                event: "pull_request",
                status: "action_required",
                per_page: 100,
            }),
        )
        .await?;

    let mut runs = pin!(page.into_stream(github_api));
    let mut urls = Vec::new();
    while let Some(run) = runs.try_next().await? {
        tracing::info!("Run {} needs approval", run.html_url);
        urls.push(run.html_url);
    }
    Ok(urls)
}
