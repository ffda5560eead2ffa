use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One entry of the configuration list. Rules are processed in order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct ConfigRule {
    /// Account owning the repositories to monitor
    pub owner: String,
    /// Single repository to monitor; all of the owner's repositories if absent
    pub repo: Option<String>,
    /// `all` bypasses permission filtering for repositories added by this rule
    pub scope: Option<Scope>,
    /// `ignore` removes matching repositories collected by earlier rules
    pub action: Option<RuleAction>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Scope {
    All,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RuleAction {
    Ignore,
}

pub(crate) fn load(path: &Path) -> Result<Vec<ConfigRule>> {
    let mut file = BufReader::new(
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
    );
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(serde_yaml::from_str(&contents)?)
}
