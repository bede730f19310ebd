#[cfg(test)]
pub mod fixture_repo;

#[cfg(test)]
pub mod fake_api;

#[cfg(test)]
pub use fixture_repo::create_fixture_repo;

#[cfg(test)]
pub use fake_api::{ApiCall, FakeApi};
