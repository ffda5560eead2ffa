use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::github::Permission;
use crate::repos::RepositoryCandidate;

/// The document written to `--report-path`.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Report {
    repositories: Vec<RepositoryReport>,
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct RepositoryReport {
    name: String,
    permissions: Option<Permission>,
    runs: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    awaiting_count: usize,
}

impl Report {
    /// Record the runs found for a repository. Repositories without any
    /// awaiting run are left out of the document.
    pub(crate) fn add(&mut self, candidate: &RepositoryCandidate, runs: Vec<String>) {
        if runs.is_empty() {
            return;
        }
        self.summary.awaiting_count += runs.len();
        self.repositories.push(RepositoryReport {
            name: candidate.repository.full_name.clone(),
            permissions: candidate.permission,
            runs,
        });
    }

    pub(crate) fn awaiting_count(&self) -> usize {
        self.summary.awaiting_count
    }

    pub(crate) fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
