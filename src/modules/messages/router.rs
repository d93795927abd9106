use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{create_message, get_messages, mark_message_read};

/// Public contact form route.
pub fn init_contact_router() -> Router<AppState> {
    Router::new().route("/", post(create_message))
}

/// Admin-only inbox routes; the caller attaches the role gate.
pub fn init_messages_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_messages))
        .route("/{id}/read", patch(mark_message_read))
}
