//! Repokeeper - provisions new GitHub repositories from webhooks
//!
//! When GitHub reports that a repository was created, the service applies a
//! branch protection rule to `main` and files an initial issue, using JSON
//! templates read from disk.

pub mod config;
pub mod github;
pub mod handlers;
pub mod provision;
pub mod server;
