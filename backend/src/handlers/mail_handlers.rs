use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::json;
use stone_eng_frontend::contact::ContactForm;

use crate::error::AppError;
use crate::mail::templates::{auto_reply, owner_notification};
use crate::AppState;

/// Relays the contact form. The body is parsed regardless of Content-Type.
pub async fn send_mail(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let form: ContactForm = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid contact form: {}", e)))?;
    tracing::info!("Contact form received");

    state
        .mailer
        .send(owner_notification(&form, &state.mail_owner))
        .await?;

    match auto_reply(&form) {
        Some(reply) => state.mailer.send(reply).await?,
        None => tracing::warn!("Contact form has no email address, skipping auto-reply"),
    }

    Ok(Json(json!({"message": "Mail sent"})))
}
