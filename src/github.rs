//! Stripped down versions of the GitHub REST payloads the scanner reads,
//! limited to the fields it consumes.

use serde::{Deserialize, Serialize};

/// A user or organization account.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct Account {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub(crate) enum AccountKind {
    User,
    Organization,
    Bot,
}

/// A stripped down version of [`octocrab::models::Repository`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: Account,
    pub archived: bool,
}

/// The caller's access tier on a repository.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Permission {
    None,
    Read,
    Write,
    Admin,
}

/// Response of the collaborator permission level endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CollaboratorPermission {
    pub permission: Permission,
}

/// One entry of a workflow run listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WorkflowRun {
    pub html_url: String,
}
