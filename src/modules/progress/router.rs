use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_progress, update_progress};

/// Student progress routes; the caller attaches the student gate.
pub fn init_progress_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_progress))
        .route("/{lesson_id}", post(update_progress))
}
