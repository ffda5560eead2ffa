use anyhow::Result;
use http::StatusCode;
use octocrab::{Octocrab, Page};
use serde::Serialize;

use crate::config::{ConfigRule, RuleAction, Scope};
use crate::github::{Account, AccountKind, CollaboratorPermission, Permission, Repository};
use crate::octocrab_utils::PageExt;

/// A repository matched by a configuration rule, together with the caller's
/// permission level on it and the rule that produced it.
#[derive(Debug, Clone)]
pub(crate) struct RepositoryCandidate {
    pub repository: Repository,
    /// `None` means the level could not be determined
    pub permission: Option<Permission>,
    pub rule: ConfigRule,
}

impl RepositoryCandidate {
    /// Whether the repository should be monitored: always for `scope: all`
    /// rules, otherwise only if it is not archived and the caller could
    /// approve a run in it.
    fn in_scope(&self) -> bool {
        if self.rule.scope == Some(Scope::All) {
            return true;
        }
        !self.repository.archived
            && matches!(
                self.permission,
                Some(Permission::Write | Permission::Admin)
            )
    }

    fn matches(&self, rule: &ConfigRule) -> bool {
        rule.owner == self.repository.owner.login
            && rule
                .repo
                .as_ref()
                .is_none_or(|name| *name == self.repository.name)
    }
}

pub(crate) async fn authenticated_login(github_api: &Octocrab) -> Result<String> {
    let user: Account = github_api.get("/user", None::<&()>).await?;
    Ok(user.login)
}

/// Expand the configuration rules into the concrete list of repositories to
/// scan, in configuration order.
///
/// An ignore rule only removes candidates added by earlier rules.
pub(crate) async fn expand(
    github_api: &Octocrab,
    username: &str,
    rules: Vec<ConfigRule>,
) -> Result<Vec<RepositoryCandidate>> {
    tracing::debug!("Generating list of repositories");
    let mut candidates: Vec<RepositoryCandidate> = Vec::new();
    for rule in rules {
        if rule.action == Some(RuleAction::Ignore) {
            candidates.retain(|candidate| !candidate.matches(&rule));
            continue;
        }

        if let Some(name) = rule.repo.clone() {
            let repository: Repository = github_api
                .get(format!("/repos/{}/{name}", rule.owner), None::<&()>)
                .await?;
            push_if_in_scope(github_api, username, repository, rule, &mut candidates).await?;
        } else {
            for repository in owned_repositories(github_api, &rule.owner).await? {
                push_if_in_scope(
                    github_api,
                    username,
                    repository,
                    rule.clone(),
                    &mut candidates,
                )
                .await?;
            }
        }
    }
    Ok(candidates)
}

async fn push_if_in_scope(
    github_api: &Octocrab,
    username: &str,
    repository: Repository,
    rule: ConfigRule,
    candidates: &mut Vec<RepositoryCandidate>,
) -> Result<()> {
    let permission = permission_level(github_api, &repository, username).await?;
    let candidate = RepositoryCandidate {
        repository,
        permission,
        rule,
    };
    if candidate.in_scope() {
        candidates.push(candidate);
    }
    Ok(())
}

#[derive(Serialize)]
struct PageQuery {
    per_page: u8,
}

/// List every repository owned by the given account. Organizations and users
/// are listed through different routes.
async fn owned_repositories(github_api: &Octocrab, owner: &str) -> Result<Vec<Repository>> {
    let account: Account = github_api
        .get(format!("/users/{owner}"), None::<&()>)
        .await?;
    let route = match account.kind {
        AccountKind::Organization => format!("/orgs/{owner}/repos"),
        _ => format!("/users/{owner}/repos"),
    };
    let page: Page<Repository> = github_api
        .get(route, Some(&PageQuery { per_page: 100 }))
        .await?;
    Ok(page.collect_all(github_api).await?)
}

/// Look up the caller's permission level on a repository.
///
/// A forbidden or not-found response means the collaborator list is not
/// visible to the caller; that yields an unknown level instead of an error.
async fn permission_level(
    github_api: &Octocrab,
    repository: &Repository,
    username: &str,
) -> Result<Option<Permission>> {
    let route = format!(
        "/repos/{}/collaborators/{username}/permission",
        repository.full_name
    );
    match github_api
        .get::<CollaboratorPermission, _, _>(route, None::<&()>)
        .await
    {
        Ok(level) => Ok(Some(level.permission)),
        Err(octocrab::Error::GitHub { source, .. })
            if matches!(
                source.status_code,
                StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
            ) =>
        {
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}
