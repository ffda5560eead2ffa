use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};

pub(super) fn token_to_octocrab(github_token: &SecretString) -> Result<octocrab::Octocrab> {
    Ok(octocrab::Octocrab::builder()
        .personal_token(github_token.expose_secret().to_owned())
        .build()?)
}
