use std::path::Path;

use derive_more::Display;
use reqwest::{Method, StatusCode};

use crate::config::Config;
use crate::github::api::{ACCEPT_BRANCH_PROTECTION, ACCEPT_V3};
use crate::github::{ApiError, GitHubClient, load_payload};
use crate::server::AppState;

/// Branch that receives the protection rule
pub const PROTECTED_BRANCH: &str = "main";

/// Follow-up actions applied to a freshly created repository, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ProvisionAction {
    /// Apply the branch protection template to `main`
    #[display("branch protection")]
    ProtectBranch,
    /// File the initial issue
    #[display("initial issue")]
    OpenIssue,
}

impl ProvisionAction {
    pub const ALL: [ProvisionAction; 2] =
        [ProvisionAction::ProtectBranch, ProvisionAction::OpenIssue];

    pub fn method(self) -> Method {
        match self {
            ProvisionAction::ProtectBranch => Method::PUT,
            ProvisionAction::OpenIssue => Method::POST,
        }
    }

    /// API path for this action on `full_name` (`owner/name`)
    pub fn path(self, full_name: &str) -> String {
        match self {
            ProvisionAction::ProtectBranch => format!(
                "/repos/{}/branches/{}/protection",
                full_name, PROTECTED_BRANCH
            ),
            ProvisionAction::OpenIssue => format!("/repos/{}/issues", full_name),
        }
    }

    pub fn accept(self) -> &'static str {
        match self {
            ProvisionAction::ProtectBranch => ACCEPT_BRANCH_PROTECTION,
            ProvisionAction::OpenIssue => ACCEPT_V3,
        }
    }

    /// Status GitHub answers with when the action took effect
    pub fn expected_status(self) -> StatusCode {
        match self {
            ProvisionAction::ProtectBranch => StatusCode::OK,
            ProvisionAction::OpenIssue => StatusCode::CREATED,
        }
    }

    pub fn payload_path(self, config: &Config) -> &Path {
        match self {
            ProvisionAction::ProtectBranch => &config.branch_protection_payload,
            ProvisionAction::OpenIssue => &config.issue_payload,
        }
    }
}

/// Perform a single action: load its template and send it to GitHub
pub async fn run_action(
    github: &GitHubClient,
    config: &Config,
    action: ProvisionAction,
    full_name: &str,
) -> Result<StatusCode, ApiError> {
    let body = load_payload(action.payload_path(config)).await?;
    let url = github.endpoint(&action.path(full_name));

    github
        .send(action.method(), &url, &config.token, action.accept(), body)
        .await
}

/// Apply every provisioning action to a new repository
///
/// Actions run one after the other. A failed action is logged and does not
/// stop the next one; nothing is reported back to the caller.
pub async fn provision_repository(state: &AppState, full_name: &str) {
    for action in ProvisionAction::ALL {
        match run_action(&state.github, &state.config, action, full_name).await {
            Ok(status) if status == action.expected_status() => match action {
                ProvisionAction::ProtectBranch => tracing::info!(
                    repo = full_name,
                    branch = PROTECTED_BRANCH,
                    "Branch protection rule created"
                ),
                ProvisionAction::OpenIssue => {
                    tracing::info!(repo = full_name, "New issue created")
                }
            },
            Ok(status) => {
                tracing::warn!(
                    repo = full_name,
                    action = %action,
                    status = status.as_u16(),
                    "GitHub rejected request"
                );
            }
            Err(e) => {
                tracing::error!(
                    repo = full_name,
                    action = %action,
                    error = %e,
                    "Failed to send request to GitHub"
                );
            }
        }
    }
}
