//! Contact form route handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::{ContactMessage, NewContactMessage};
use crate::state::AppState;

/// Acknowledgement returned to the sender.
pub const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";

/// Response for an accepted contact message.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: &'static str,
    pub contact: ContactMessage,
}

/// Submit a contact message.
///
/// POST /contact
#[instrument(skip(state, payload))]
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let Json(body) = payload?;
    let draft = body.validate()?;
    let contact = state.contacts().submit(draft)?;

    add_breadcrumb("contact", "Submitted contact message", None);
    match contact.reply_address() {
        Some(address) => tracing::info!(
            contact_id = %contact.id,
            email_domain = address.domain(),
            "Contact message received"
        ),
        None => tracing::info!(
            contact_id = %contact.id,
            "Contact message received without a usable reply address"
        ),
    }

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: THANK_YOU,
            contact,
        }),
    ))
}
