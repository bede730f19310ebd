use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Error};
use log::debug;

use crate::error::{GitPrError, Result};
use crate::git::remote::RemoteUrl;
use crate::git::title;

const PULL_REQUEST_TEMPLATE: &str = ".github/PULL_REQUEST_TEMPLATE.md";

/// Resolved identity of the current repository and branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub host: String,
    pub namespace: String,
    pub repo: String,
    pub branch: String,
}

impl GitInfo {
    /// Default PR title derived from the branch name
    pub fn generate_title(&self) -> String {
        title::generate_title(&self.branch)
    }
}

/// A working directory inspected through the `git` command line
#[derive(Debug, Clone)]
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Use the repository containing `path`. Nothing is checked until a query runs.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Run `git <args>` in the repository and return its trimmed stdout
    fn git(&self, args: &[&str]) -> std::result::Result<String, Error> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .context(format!("Failed to run git {}", args.join(" ")))?;

        debug!("git {} exited with {}", args.join(" "), output.status);

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Current branch name (`git rev-parse --abbrev-ref HEAD`)
    pub fn current_branch(&self) -> Result<String> {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"]).map_err(|e| {
            debug!("{e:#}");
            GitPrError::NotAGitRepo
        })
    }

    /// Fails unless `git status --porcelain` reports a clean tree
    pub fn ensure_clean(&self) -> Result<()> {
        let status = self.git(&["status", "--porcelain"]).map_err(|e| {
            debug!("{e:#}");
            GitPrError::NotAGitRepo
        })?;

        if status.is_empty() {
            Ok(())
        } else {
            Err(GitPrError::UncommittedChanges)
        }
    }

    /// Raw `git remote get-url origin` output
    pub fn origin_url(&self) -> Result<String> {
        self.git(&["remote", "get-url", "origin"]).map_err(|e| {
            debug!("{e:#}");
            GitPrError::NoOriginRemote
        })
    }

    /// Branch, clean tree and origin remote, checked in that order
    pub fn git_info(&self) -> Result<GitInfo> {
        let branch = self.current_branch()?;
        self.ensure_clean()?;
        let remote = RemoteUrl::parse(&self.origin_url()?)?;

        Ok(GitInfo {
            host: remote.host,
            namespace: remote.namespace,
            repo: remote.repo,
            branch,
        })
    }

    fn read_template_message(&self) -> std::result::Result<String, Error> {
        let root = self.git(&["rev-parse", "--show-toplevel"])?;
        let template_path = Path::new(&root).join(PULL_REQUEST_TEMPLATE);
        let contents = std::fs::read_to_string(&template_path).context(format!(
            "Failed to read PR template at {}",
            template_path.display()
        ))?;

        Ok(contents.trim().to_string())
    }

    /// Contents of the repository's PR template, or empty when there is none
    pub fn template_message(&self) -> String {
        self.read_template_message().unwrap_or_else(|e| {
            debug!("no PR template: {e:#}");
            String::new()
        })
    }
}
