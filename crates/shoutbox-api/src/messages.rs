use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Form, Json};
use tracing::debug;

use shoutbox_types::api::{Message, SendMessageForm, SessionClaims};

use crate::auth::AppState;

/// Fixed size of the recent-messages view.
pub const RECENT_MESSAGE_LIMIT: u32 = 10;

/// Accept a message for the board. Persistence is best-effort: the caller
/// gets 204 whether or not the store kept the entry.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Form(form): Form<SendMessageForm>,
) -> StatusCode {
    let text = form.message.unwrap_or_default();
    let timestamp = form.timestamp.unwrap_or_default();

    debug!(user = %claims.sub, "accepted message submission");
    state.store.insert(&text, &timestamp).await;

    StatusCode::NO_CONTENT
}

pub async fn recent_messages(
    State(state): State<AppState>,
    Extension(_claims): Extension<SessionClaims>,
) -> Json<Vec<Message>> {
    let rows = state.store.fetch_recent(RECENT_MESSAGE_LIMIT).await;

    let messages = rows
        .into_iter()
        .map(|row| Message {
            text: row.text,
            timestamp: row.timestamp,
        })
        .collect();

    Json(messages)
}
