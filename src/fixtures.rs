//! Shared builders for tests that talk to a mock GitHub API.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

use crate::config::{ConfigRule, RuleAction};
use crate::github::{Account, AccountKind, Permission, Repository};
use crate::repos::RepositoryCandidate;

// Sets up a handler on the mock server which will return a 500 with the given
// message. This will be mapped internally into a GitHub json error, making it
// much easier to identify the cause of these test failures.
//
// This handler should always come after your real expectations as it will
// match any GET request.
pub(crate) async fn setup_error_handler(mock_server: &MockServer, message: &str) {
    Mock::given(method("GET"))
        .and(path_regex(".*"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!( {
            "documentation_url": "",
            "errors": None::<Vec<serde_json::Value>>,
            "message": message,
        })))
        .mount(mock_server)
        .await;
}

pub(crate) fn test_client(mock_server: &MockServer) -> octocrab::Octocrab {
    octocrab::Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .build()
        .unwrap()
}

pub(crate) fn account_json(login: &str, kind: &str) -> Value {
    json!({"login": login, "type": kind})
}

pub(crate) fn repo_json(owner: &str, name: &str, archived: bool) -> Value {
    json!({
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": account_json(owner, "User"),
        "archived": archived,
    })
}

pub(crate) fn permission_json(level: &str) -> Value {
    json!({"permission": level, "user": account_json("octocat", "User")})
}

pub(crate) fn runs_json(urls: &[&str]) -> Value {
    json!({
        "total_count": urls.len(),
        "workflow_runs": urls
            .iter()
            .enumerate()
            .map(|(i, url)| json!({"id": i + 1, "html_url": url}))
            .collect::<Vec<_>>(),
    })
}

pub(crate) fn rule(owner: &str, repo: Option<&str>) -> ConfigRule {
    ConfigRule {
        owner: owner.to_owned(),
        repo: repo.map(str::to_owned),
        scope: None,
        action: None,
    }
}

pub(crate) fn ignore_rule(owner: &str, repo: Option<&str>) -> ConfigRule {
    ConfigRule {
        action: Some(RuleAction::Ignore),
        ..rule(owner, repo)
    }
}

pub(crate) fn candidate(
    owner: &str,
    name: &str,
    permission: Option<Permission>,
) -> RepositoryCandidate {
    RepositoryCandidate {
        repository: Repository {
            name: name.to_owned(),
            full_name: format!("{owner}/{name}"),
            owner: Account {
                login: owner.to_owned(),
                kind: AccountKind::User,
            },
            archived: false,
        },
        permission,
        rule: rule(owner, Some(name)),
    }
}
