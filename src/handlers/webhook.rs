use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::github::{is_valid_full_name, parse_repository_event};
use crate::handlers::status_error;
use crate::provision::provision_repository;
use crate::server::AppState;

/// Reasons a webhook delivery is turned away before anything is sent to GitHub
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("webhook body is not a repository event")]
    MalformedBody,

    #[error("repository event is not a creation")]
    NotCreationEvent,

    #[error("repository event has no usable repository name")]
    MissingRepository,
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::MalformedBody => StatusCode::BAD_REQUEST,
            Rejection::NotCreationEvent => StatusCode::NOT_ACCEPTABLE,
            Rejection::MissingRepository => StatusCode::NO_CONTENT,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        status_error(self.status())
    }
}

/// Handle requests on the webhook endpoint
///
/// `GET` is a liveness probe. `POST` carries a repository event; once it is
/// accepted the delivery is answered with 200 whatever GitHub later says about
/// the provisioning requests.
pub async fn handle_webhook(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    match method {
        Method::GET => "ok".into_response(),
        Method::POST => match receive_event(&state, &body).await {
            Ok(()) => StatusCode::OK.into_response(),
            Err(rejection) => rejection.into_response(),
        },
        _ => status_error(StatusCode::METHOD_NOT_ALLOWED),
    }
}

async fn receive_event(state: &AppState, body: &[u8]) -> Result<(), Rejection> {
    let event = parse_repository_event(body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse webhook payload");
        Rejection::MalformedBody
    })?;

    if !event.is_created() {
        tracing::debug!(action = %event.action, "Ignoring repository action");
        return Err(Rejection::NotCreationEvent);
    }

    let repo = event.full_name();
    if repo.is_empty() {
        tracing::warn!("Repository created event without repository name");
        return Err(Rejection::MissingRepository);
    }

    if !is_valid_full_name(repo) {
        tracing::warn!(repo, "Refusing malformed repository name");
        return Err(Rejection::MissingRepository);
    }

    tracing::info!(repo, "Provisioning new repository");
    provision_repository(state, repo).await;

    Ok(())
}
