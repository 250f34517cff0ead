use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::github::payload::PayloadUnavailable;

/// Media type required by the branch protection endpoint
pub const ACCEPT_BRANCH_PROTECTION: &str = "application/vnd.github.luke-cage-preview+json";

/// Media type for the v3 REST API
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

const CLIENT_USER_AGENT: &str = "repokeeper";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    PayloadUnavailable(#[from] PayloadUnavailable),

    #[error("unable to create request for {url}: {reason}")]
    RequestConstruction { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// GitHub REST API client authenticating with a personal access token
#[derive(Clone)]
pub struct GitHubClient {
    http_client: reqwest::Client,
    api_base: Url,
}

impl GitHubClient {
    pub fn new(http_client: reqwest::Client, api_base: Url) -> Self {
        Self {
            http_client,
            api_base,
        }
    }

    /// Build an absolute API URL from a path such as `/repos/org/repo/issues`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.as_str().trim_end_matches('/'), path)
    }

    /// Send a single request and return the status GitHub answered with
    ///
    /// The response body is discarded and nothing is retried; interpreting the
    /// status is left to the caller. No timeout is applied.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        token: &str,
        accept: &str,
        body: Bytes,
    ) -> Result<StatusCode, ApiError> {
        let parsed = Url::parse(url).map_err(|e| ApiError::RequestConstruction {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .http_client
            .request(method, parsed)
            .header(AUTHORIZATION, format!("token {}", token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, accept)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .body(body)
            .send()
            .await
            .map_err(|source| {
                if source.is_builder() {
                    ApiError::RequestConstruction {
                        url: url.to_string(),
                        reason: source.to_string(),
                    }
                } else {
                    ApiError::Transport {
                        url: url.to_string(),
                        source,
                    }
                }
            })?;

        Ok(response.status())
    }
}
