use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{create_blog, delete_blog, get_blogs, update_blog};

/// Public read route.
pub fn init_blogs_router() -> Router<AppState> {
    Router::new().route("/", get(get_blogs))
}

/// Admin-only write routes; the caller attaches the role gate.
pub fn init_blogs_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_blog))
        .route("/{id}", put(update_blog).delete(delete_blog))
}
