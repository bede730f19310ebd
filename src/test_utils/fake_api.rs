use std::cell::RefCell;

use anyhow::Error;

use crate::github::pull_request::{NewPullRequest, PullRequest, PullRequestApi, PullRequestEdit};

/// A call received by [`FakeApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List {
        namespace: String,
        repo: String,
    },
    Create {
        namespace: String,
        repo: String,
        pull: NewPullRequest,
    },
    Edit {
        namespace: String,
        repo: String,
        number: u64,
        edit: PullRequestEdit,
    },
}

/// In-memory pull request API that records every call
#[derive(Default)]
pub struct FakeApi {
    open_prs: Vec<PullRequest>,
    fail_list: bool,
    fail_writes: bool,
    calls: RefCell<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn with_open_prs(open_prs: Vec<PullRequest>) -> Self {
        Self {
            open_prs,
            ..Self::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// An open PR numbered `number` for `head_ref`
    pub fn pr(number: u64, head_ref: &str) -> PullRequest {
        PullRequest {
            number,
            title: format!("PR {number}"),
            body: format!("Body of {number}"),
            head_ref: head_ref.to_string(),
            url: format!("https://github.com/acme/widgets/pull/{number}"),
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl PullRequestApi for FakeApi {
    async fn list_open(&self, namespace: &str, repo: &str) -> Result<Vec<PullRequest>, Error> {
        self.record(ApiCall::List {
            namespace: namespace.to_string(),
            repo: repo.to_string(),
        });

        if self.fail_list {
            return Err(anyhow::anyhow!("GitHub is unreachable"));
        }
        Ok(self.open_prs.clone())
    }

    async fn create(
        &self,
        namespace: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<PullRequest, Error> {
        self.record(ApiCall::Create {
            namespace: namespace.to_string(),
            repo: repo.to_string(),
            pull: pull.clone(),
        });

        if self.fail_writes {
            return Err(anyhow::anyhow!("Validation Failed"));
        }

        let number = 100;
        let branch = pull.head.split_once(':').map_or("", |(_, branch)| branch);
        Ok(PullRequest {
            number,
            title: pull.title.clone(),
            body: pull.body.clone(),
            head_ref: branch.to_string(),
            url: format!("https://github.com/{namespace}/{repo}/pull/{number}"),
        })
    }

    async fn edit(
        &self,
        namespace: &str,
        repo: &str,
        number: u64,
        edit: &PullRequestEdit,
    ) -> Result<PullRequest, Error> {
        self.record(ApiCall::Edit {
            namespace: namespace.to_string(),
            repo: repo.to_string(),
            number,
            edit: edit.clone(),
        });

        if self.fail_writes {
            return Err(anyhow::anyhow!("Validation Failed"));
        }

        let mut pr = self
            .open_prs
            .iter()
            .find(|pr| pr.number == number)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Not Found"))?;
        if let Some(title) = &edit.title {
            pr.title = title.clone();
        }
        if let Some(body) = &edit.body {
            pr.body = body.clone();
        }
        Ok(pr)
    }
}
