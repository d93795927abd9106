use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::users::controller::{create_user, delete_user, get_stats, get_users};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
        .route("/stats", get(get_stats))
}
