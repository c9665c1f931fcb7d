use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::content::client::ContentFetchError;
use crate::mail::mailer::MailError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    ContentFetch(#[from] ContentFetchError),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    MailDelivery(#[from] MailError),

    #[error("Could not serialize page props: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ContentFetch(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MailDelivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
