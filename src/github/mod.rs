//! GitHub pull request access
//!
//! - `pull_request`: PR model, create intent and the API seam
//! - `client`: octocrab-backed implementation of the API seam
//! - `pulls`: lookup, create, update and review-status operations

pub mod client;
pub mod pull_request;
pub mod pulls;
