use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?i:feature|fix)/(?i:plto)-)?(?P<number>[0-9]+)?-?(?P<raw_title>.*)").unwrap()
});

/// A PR title derived from a branch named like `feature/PLTO-123-add_thing`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchTitle {
    /// The branch followed the naming convention (ticket number optional)
    Conventional {
        ticket: Option<String>,
        summary: String,
    },
    /// Nothing matched, the branch name is used as is
    Verbatim(String),
}

impl BranchTitle {
    pub fn from_branch(branch: &str) -> Self {
        // Every part of the pattern is optional, so this never fires today
        let Some(caps) = TITLE_PATTERN.captures(branch) else {
            return Self::Verbatim(branch.to_string());
        };

        let ticket = caps.name("number").map(|m| m.as_str().to_string());
        let raw_title = caps.name("raw_title").map_or("", |m| m.as_str());

        Self::Conventional {
            ticket,
            summary: capitalize_first(&raw_title.replace(['_', '-'], " ")),
        }
    }
}

impl fmt::Display for BranchTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conventional {
                ticket: Some(number),
                summary,
            } => write!(f, "[PLTO-{number}] {summary}"),
            Self::Conventional {
                ticket: None,
                summary,
            } => f.write_str(summary),
            Self::Verbatim(branch) => f.write_str(branch),
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Characters whose uppercase form is more than one character (`ß`, `ﬁ`) are kept as is.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            let first = match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => first,
            };
            std::iter::once(first).chain(chars).collect()
        }
        None => String::new(),
    }
}

/// Generate the default PR title for a branch
pub fn generate_title(branch: &str) -> String {
    BranchTitle::from_branch(branch).to_string()
}
