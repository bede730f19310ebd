use anyhow::Error;

use crate::git::GitInfo;

/// The parts of a GitHub pull request this tool reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub head_ref: String,
    pub url: String,
}

/// Payload for opening a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    /// `namespace:branch`
    pub head: String,
    pub base: String,
    pub maintainer_can_modify: bool,
}

/// Partial update; `None` fields keep their current value on GitHub
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestEdit {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Intent to open a PR from `git_info.branch` into `merge_into`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitTransaction {
    pub git_info: GitInfo,
    pub merge_into: String,
}

impl GitTransaction {
    pub fn new(git_info: GitInfo, merge_into: impl Into<String>) -> Self {
        Self {
            git_info,
            merge_into: merge_into.into(),
        }
    }

    pub fn head(&self) -> String {
        format!("{}:{}", self.git_info.namespace, self.git_info.branch)
    }
}

/// Pull request endpoints of a code-hosting API, scoped per call to one repository
#[allow(async_fn_in_trait)]
pub trait PullRequestApi {
    /// Every open pull request of `namespace/repo`
    async fn list_open(&self, namespace: &str, repo: &str) -> Result<Vec<PullRequest>, Error>;

    async fn create(
        &self,
        namespace: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<PullRequest, Error>;

    async fn edit(
        &self,
        namespace: &str,
        repo: &str,
        number: u64,
        edit: &PullRequestEdit,
    ) -> Result<PullRequest, Error>;
}
