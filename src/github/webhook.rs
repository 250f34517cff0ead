use serde::Deserialize;

/// Action GitHub sends when a repository has just been created
pub const ACTION_CREATED: &str = "created";

/// Repository event payload
///
/// Only the fields needed to provision a new repository are kept; everything
/// else GitHub sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryEvent {
    pub action: String,
    pub repository: Option<Repository>,
}

impl RepositoryEvent {
    pub fn is_created(&self) -> bool {
        self.action == ACTION_CREATED
    }

    /// Repository name in `owner/name` form, empty if GitHub did not send one
    pub fn full_name(&self) -> &str {
        self.repository
            .as_ref()
            .and_then(|repo| repo.full_name.as_deref())
            .unwrap_or_default()
    }
}

/// Repository information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    pub full_name: Option<String>,
}

/// Check that `full_name` is exactly `owner/name`
///
/// The name ends up in an API path, so dot segments, extra slashes, query and
/// fragment characters are refused rather than resolved by the URL parser.
pub fn is_valid_full_name(full_name: &str) -> bool {
    fn valid_segment(segment: &str) -> bool {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }

    match full_name.split_once('/') {
        Some((owner, name)) => valid_segment(owner) && valid_segment(name),
        None => false,
    }
}

/// Parse a repository event from a raw webhook body
pub fn parse_repository_event(payload: &[u8]) -> Result<RepositoryEvent, serde_json::Error> {
    serde_json::from_slice(payload)
}
