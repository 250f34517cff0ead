pub mod api;
pub mod payload;
pub mod webhook;

pub use api::{ApiError, GitHubClient};
pub use payload::{PayloadUnavailable, load_payload};
pub use webhook::{RepositoryEvent, is_valid_full_name, parse_repository_event};
