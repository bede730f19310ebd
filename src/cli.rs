use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

/// Merge target used when neither the command line nor the config names one
pub const DEFAULT_BRANCH_INTO: &str = "master";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "git-pr")]
#[command(about = "Create or update the pull request for the current branch")]
pub struct CommandArgs {
    /// $HOME-relative path to config file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: String,

    /// Branch to merge into
    #[arg(short = 'b', long = "branchInto", default_value = DEFAULT_BRANCH_INTO)]
    pub branch_name: String,

    /// Override title generation with this
    #[arg(short = 't', long = "title", default_value = "")]
    pub title: String,

    /// Message body for the PR
    #[arg(short = 'm', long = "message", default_value = "")]
    pub message: String,

    /// Output details of PR (if already exists)
    #[arg(short = 'd', long = "details")]
    pub is_detailed: bool,
}

impl CommandArgs {
    /// True when a title or message override was supplied
    pub fn has_overrides(&self) -> bool {
        !self.title.is_empty() || !self.message.is_empty()
    }
}
