use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    create_lesson, delete_lesson, get_lesson_by_slug, get_lessons, get_lessons_for_staff,
    update_lesson,
};

/// Public catalog routes.
pub fn init_lessons_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lessons))
        .route("/{slug}", get(get_lesson_by_slug))
}

/// Staff-only management routes; the caller attaches the role gate.
pub fn init_lessons_management_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lessons_for_staff).post(create_lesson))
        .route("/{id}", put(update_lesson).delete(delete_lesson))
}
