//! Handler error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

/// Failure modes a page handler can surface
#[derive(Debug)]
pub enum PageError {
    /// The requested key or dimension has no data; carries the page message
    NotFound(String),
    /// Snapshot fetch or another internal step failed
    Internal(anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(message) => {
                let message = natmon_templates::escape_html(&message);
                let body = natmon_templates::NOT_FOUND.render(&[("message", message.as_str())]);
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
            PageError::Internal(err) => {
                error!(error = %err, "page handler failed");
                let body = natmon_templates::NOT_FOUND
                    .render(&[("message", "Something went wrong. Please try again later.")]);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        PageError::Internal(err)
    }
}
