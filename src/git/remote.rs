use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GitPrError, Result};

static REMOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"git@(?P<host>[a-zA-Z0-9._\-]+[.][a-z]+):(?P<namespace>[a-zA-Z0-9\-]+)/(?P<repo>.*)[.]git",
    )
    .unwrap()
});

/// The pieces of an SSH-style remote: `git@<host>:<namespace>/<repo>.git`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub host: String,
    pub namespace: String,
    pub repo: String,
}

impl RemoteUrl {
    /// Parse the raw output of `git remote get-url origin`.
    ///
    /// Only the first match is used when the text holds more than one URL.
    pub fn parse(output: &str) -> Result<Self> {
        let caps = REMOTE_PATTERN
            .captures(output)
            .ok_or(GitPrError::UnparsableRemote)?;

        Ok(Self {
            host: caps["host"].to_string(),
            namespace: caps["namespace"].to_string(),
            repo: caps["repo"].to_string(),
        })
    }
}
