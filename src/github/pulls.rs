use crate::error::{GitPrError, Result};
use crate::git::{GitInfo, GitRepo};
use crate::github::pull_request::{
    GitTransaction, NewPullRequest, PullRequest, PullRequestApi, PullRequestEdit,
};
use crate::tui::pr_display;

/// Pull request operations for the current repository
pub struct PrClient<A> {
    api: A,
    repo: GitRepo,
}

impl<A: PullRequestApi> PrClient<A> {
    pub fn new(api: A, repo: GitRepo) -> Self {
        Self { api, repo }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Find the open pull request whose head branch is the current branch.
    pub async fn get_pr(&self, git_info: &GitInfo) -> Result<PullRequest> {
        let pulls = self
            .api
            .list_open(&git_info.namespace, &git_info.repo)
            .await
            .map_err(GitPrError::PrListFailure)?;

        pulls
            .into_iter()
            .find(|pr| pr.head_ref == git_info.branch)
            .ok_or(GitPrError::PrNotFound)
    }

    /// Open a pull request for `transaction`.
    ///
    /// An empty `title` is generated from the branch name and an empty
    /// `message` falls back to the repository's PR template.
    pub async fn create_pr(
        &self,
        transaction: &GitTransaction,
        title: &str,
        message: &str,
    ) -> Result<PullRequest> {
        let title = if title.is_empty() {
            transaction.git_info.generate_title()
        } else {
            title.to_string()
        };
        let body = if message.is_empty() {
            self.repo.template_message()
        } else {
            message.to_string()
        };

        let pull = NewPullRequest {
            title,
            body,
            head: transaction.head(),
            base: transaction.merge_into.clone(),
            maintainer_can_modify: true,
        };

        self.api
            .create(
                &transaction.git_info.namespace,
                &transaction.git_info.repo,
                &pull,
            )
            .await
            .map_err(GitPrError::Api)
    }

    /// Replace the title and/or body of `pr`; empty overrides are left alone.
    pub async fn update_pr(
        &self,
        git_info: &GitInfo,
        pr: &PullRequest,
        title: &str,
        message: &str,
    ) -> Result<PullRequest> {
        let edit = PullRequestEdit {
            title: (!title.is_empty()).then(|| title.to_string()),
            body: (!message.is_empty()).then(|| message.to_string()),
        };

        self.api
            .edit(&git_info.namespace, &git_info.repo, pr.number, &edit)
            .await
            .map_err(GitPrError::Api)
    }

    /// Review details for `pr`. Not supported yet, only prints a notice.
    pub fn review_status(&self, pr: &PullRequest) {
        log::debug!("review status requested for #{}", pr.number);
        pr_display::display_review_status_unavailable();
    }
}
