use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::ask_assistant;

pub fn init_assistant_router() -> Router<AppState> {
    Router::new().route("/", post(ask_assistant))
}
