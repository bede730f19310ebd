use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{GitPrError, Result};

/// Home-relative location of the config file unless `--config` says otherwise
pub const DEFAULT_CONFIG_PATH: &str = ".config/git-pr";

/// Per-repository override of the branch PRs merge into
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoConfig {
    /// `namespace:repo`
    pub name: String,
    pub merge_into: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub github_token: String,
    pub repos: Vec<RepoConfig>,
}

impl Config {
    /// Load the config at `path`, relative to the user's home directory.
    pub fn read(path: &str) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| GitPrError::MissingConfigFile(path.into()))?;
        Self::read_from_home(&home, path)
    }

    /// Load the config at `path`, relative to `home`.
    pub fn read_from_home(home: &Path, path: &str) -> Result<Self> {
        let expanded = home.join(path);
        debug!("reading config from {}", expanded.display());

        let file = File::open(&expanded).map_err(|e| {
            debug!("cannot open {}: {e}", expanded.display());
            GitPrError::MissingConfigFile(expanded.clone())
        })?;
        let config: Config = serde_json::from_reader(BufReader::new(file))?;

        if config.github_token.is_empty() {
            return Err(GitPrError::MissingToken);
        }

        Ok(config)
    }

    /// Configured merge target for `namespace/repo`, or `fallback`.
    ///
    /// The first entry with a matching name and a non-empty target wins.
    pub fn repo_merge_into(&self, namespace: &str, repo: &str, fallback: &str) -> String {
        let qualifier = format!("{namespace}:{repo}");

        self.repos
            .iter()
            .find(|entry| entry.name == qualifier && !entry.merge_into.is_empty())
            .map_or_else(|| fallback.to_string(), |entry| entry.merge_into.clone())
    }
}
