use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{create_course, delete_course, get_courses, update_course};

/// Public read route.
pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/", get(get_courses))
}

/// Admin-only write routes; the caller attaches the role gate.
pub fn init_courses_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/{id}", put(update_course).delete(delete_course))
}
