use log::debug;

use crate::cli::{CommandArgs, DEFAULT_BRANCH_INTO};
use crate::config::Config;
use crate::error::{GitPrError, Result};
use crate::git::{GitInfo, GitRepo};
use crate::github::client::GitHubClient;
use crate::github::pull_request::{GitTransaction, PullRequestApi};
use crate::github::pulls::PrClient;
use crate::tui::pr_display::{self, PrOutcome};

/// Create, update or report the pull request for the current branch
pub async fn handle_pr(args: &CommandArgs) -> Result<()> {
    let repo = GitRepo::open(".");
    let git_info = repo.git_info()?;
    let config = Config::read(&args.config_path)?;

    let api =
        GitHubClient::new(&config.github_token, &git_info.host).map_err(GitPrError::ClientSetup)?;
    let client = PrClient::new(api, repo);

    let outcome = sync_pr(args, &git_info, &config, &client).await?;
    pr_display::display_outcome(&outcome);

    Ok(())
}

/// Merge target: the `--branchInto` value, or the configured one while it is still the default.
///
/// Passing the default explicitly cannot be told apart from not passing it.
pub fn resolve_target_branch(args: &CommandArgs, config: &Config, git_info: &GitInfo) -> String {
    if args.branch_name == DEFAULT_BRANCH_INTO {
        let target =
            config.repo_merge_into(&git_info.namespace, &git_info.repo, DEFAULT_BRANCH_INTO);
        debug!(
            "merge target for {}:{} from config: {target}",
            git_info.namespace, git_info.repo
        );
        target
    } else {
        args.branch_name.clone()
    }
}

pub async fn sync_pr<A: PullRequestApi>(
    args: &CommandArgs,
    git_info: &GitInfo,
    config: &Config,
    client: &PrClient<A>,
) -> Result<PrOutcome> {
    let merge_into = resolve_target_branch(args, config, git_info);

    let existing = match client.get_pr(git_info).await {
        Ok(pr) => pr,
        Err(GitPrError::PrNotFound) => {
            debug!("no open PR for {}, creating one", git_info.branch);
            let transaction = GitTransaction::new(git_info.clone(), merge_into);
            let pr = client
                .create_pr(&transaction, &args.title, &args.message)
                .await?;
            return Ok(PrOutcome::Created(pr));
        }
        Err(e) => return Err(e),
    };

    if args.has_overrides() {
        let pr = client
            .update_pr(git_info, &existing, &args.title, &args.message)
            .await?;
        Ok(PrOutcome::Updated(pr))
    } else if args.is_detailed {
        client.review_status(&existing);
        Ok(PrOutcome::Reviewed(existing))
    } else {
        Ok(PrOutcome::Existing(existing))
    }
}
