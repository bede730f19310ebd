use console::style;

use crate::error::GitPrError;
use crate::github::pull_request::PullRequest;

/// What a run did with the current branch's pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrOutcome {
    Created(PullRequest),
    Updated(PullRequest),
    /// A PR already existed and nothing was changed
    Existing(PullRequest),
    /// Review status was requested for an existing PR
    Reviewed(PullRequest),
}

impl PrOutcome {
    pub fn pull_request(&self) -> &PullRequest {
        match self {
            Self::Created(pr) | Self::Updated(pr) | Self::Existing(pr) | Self::Reviewed(pr) => pr,
        }
    }
}

/// Print where the pull request lives
pub fn display_outcome(outcome: &PrOutcome) {
    let (marker, label) = match outcome {
        PrOutcome::Created(_) => (style("✓").green().bold(), "created pr here:"),
        PrOutcome::Updated(_) => (style("✓").green().bold(), "updated pr is here:"),
        PrOutcome::Existing(_) => (style("●").cyan().bold(), "pr already exists here:"),
        // The review notice was already printed
        PrOutcome::Reviewed(_) => return,
    };

    println!(
        "{} {} {}",
        marker,
        label,
        style(&outcome.pull_request().url).cyan()
    );
}

pub fn display_review_status_unavailable() {
    println!(
        "{} {}",
        style("⚠").yellow().bold(),
        style("Sorry, not yet implemented").yellow()
    );
}

/// Full text of a fatal error, including the cause chain of API errors
pub fn error_message(error: &GitPrError) -> String {
    format!("{error:#}")
}

/// Print a fatal error on stdout
pub fn display_error(error: &GitPrError) {
    println!("{} {}", style("✗").red().bold(), style(error_message(error)).red());
}
