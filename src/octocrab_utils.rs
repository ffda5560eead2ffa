use futures::TryStreamExt;
use octocrab::Page;
use serde::de::DeserializeOwned;

pub(crate) trait PageExt<I>
where
    I: DeserializeOwned + 'static,
{
    /// Drain a paginated response into a `Vec`, following every `Link` header.
    async fn collect_all(self, github_api: &octocrab::Octocrab) -> octocrab::Result<Vec<I>>;
}

impl<I> PageExt<I> for Page<I>
where
    I: DeserializeOwned + 'static,
{
    async fn collect_all(self, github_api: &octocrab::Octocrab) -> octocrab::Result<Vec<I>> {
        self.into_stream(github_api).try_collect().await
    }
}
