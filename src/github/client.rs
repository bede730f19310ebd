use anyhow::{Context, Error};
use log::debug;
use octocrab::Octocrab;
use octocrab::models::pulls::PullRequest as OctocrabPullRequest;

use crate::github::pull_request::{NewPullRequest, PullRequest, PullRequestApi, PullRequestEdit};

const PUBLIC_GITHUB_HOST: &str = "github.com";

/// REST endpoint for a git host: the public API for github.com, `/api/v3` otherwise
pub fn api_base_uri(host: &str) -> Option<String> {
    if host == PUBLIC_GITHUB_HOST {
        None
    } else {
        Some(format!("https://{host}/api/v3"))
    }
}

/// GitHub pull request API backed by octocrab
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new(token: &str, host: &str) -> Result<Self, Error> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(base_uri) = api_base_uri(host) {
            debug!("using GitHub API at {base_uri}");
            builder = builder
                .base_uri(base_uri.as_str())
                .context(format!("Invalid GitHub API address for host '{host}'"))?;
        }

        let octocrab = builder.build().context("Failed to create GitHub client")?;

        Ok(Self { octocrab })
    }
}

impl From<OctocrabPullRequest> for PullRequest {
    fn from(pr: OctocrabPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            head_ref: pr.head.ref_field,
            url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
        }
    }
}

impl PullRequestApi for GitHubClient {
    async fn list_open(&self, namespace: &str, repo: &str) -> Result<Vec<PullRequest>, Error> {
        debug!("listing open pull requests of {namespace}/{repo}");

        let first_page = self
            .octocrab
            .pulls(namespace, repo)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(100)
            .send()
            .await
            .context("Failed to fetch pull requests")?;

        let pulls = self
            .octocrab
            .all_pages(first_page)
            .await
            .context("Failed to fetch remaining pull request pages")?;

        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }

    async fn create(
        &self,
        namespace: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<PullRequest, Error> {
        debug!(
            "creating pull request {} -> {} in {namespace}/{repo}",
            pull.head, pull.base
        );

        let pr = self
            .octocrab
            .pulls(namespace, repo)
            .create(&pull.title, &pull.head, &pull.base)
            .body(&pull.body)
            .maintainer_can_modify(pull.maintainer_can_modify)
            .send()
            .await?;

        Ok(pr.into())
    }

    async fn edit(
        &self,
        namespace: &str,
        repo: &str,
        number: u64,
        edit: &PullRequestEdit,
    ) -> Result<PullRequest, Error> {
        debug!("editing pull request #{number} in {namespace}/{repo}");

        let pulls = self.octocrab.pulls(namespace, repo);
        let mut update = pulls.update(number);
        if let Some(title) = &edit.title {
            update = update.title(title);
        }
        if let Some(body) = &edit.body {
            update = update.body(body);
        }

        let pr = update.send().await?;

        Ok(pr.into())
    }
}
