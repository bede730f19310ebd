//! Local git state
//!
//! - `remote`: parse the `origin` remote URL
//! - `title`: derive a PR title from a branch name
//! - `repository`: query the working tree through the `git` command line

pub mod remote;
pub mod repository;
pub mod title;

pub use repository::{GitInfo, GitRepo};
