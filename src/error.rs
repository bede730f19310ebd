use std::path::PathBuf;

use thiserror::Error;

/// Every way a `git-pr` run can fail.
///
/// Only [`GitPrError::PrNotFound`] is recovered from (it routes to PR
/// creation); everything else terminates the run.
#[derive(Error, Debug)]
pub enum GitPrError {
    #[error("fatal: Not a git repository (or any of the parent directories): .git")]
    NotAGitRepo,

    #[error("fatal: you have uncommitted/unstashed changes. deal with them and try again")]
    UncommittedChanges,

    #[error("fatal: No remote named 'origin'.")]
    NoOriginRemote,

    #[error("fatal: couldn't read 'git remote get-url origin' output")]
    UnparsableRemote,

    #[error("couldn't find config file: {}", .0.display())]
    MissingConfigFile(PathBuf),

    #[error("couldn't decode config file: {0}")]
    ConfigDecode(#[from] serde_json::Error),

    #[error("missing githubToken in config")]
    MissingToken,

    #[error("failed to set up GitHub client: {0}")]
    ClientSetup(#[source] anyhow::Error),

    #[error("prs not loading")]
    PrListFailure(#[source] anyhow::Error),

    #[error("pr not found")]
    PrNotFound,

    #[error(transparent)]
    Api(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GitPrError>;
