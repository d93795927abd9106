use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::{require_admin, require_staff, require_student};
use crate::modules::assistant::router::init_assistant_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::blogs::router::{init_blogs_admin_router, init_blogs_router};
use crate::modules::categories::router::init_categories_router;
use crate::modules::courses::router::{init_courses_admin_router, init_courses_router};
use crate::modules::lessons::router::{init_lessons_management_router, init_lessons_router};
use crate::modules::messages::router::{init_contact_router, init_messages_admin_router};
use crate::modules::progress::router::init_progress_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use crate::utils::uploads::MAX_UPLOAD_BYTES;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest_service("/uploads", ServeDir::new(&state.upload_config.dir))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/categories", init_categories_router())
                .nest("/lessons", init_lessons_router())
                .nest(
                    "/lessons-management",
                    init_lessons_management_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_staff)),
                )
                .nest("/blogs", init_blogs_router())
                .nest("/specialized-courses", init_courses_router())
                .nest("/contact", init_contact_router())
                .nest("/ai-assistant", init_assistant_router())
                .nest(
                    "/student/progress",
                    init_progress_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_student,
                    )),
                )
                .nest(
                    "/admin",
                    Router::new()
                        .merge(init_users_router())
                        .nest("/messages", init_messages_admin_router())
                        .nest("/blogs", init_blogs_admin_router())
                        .nest("/specialized-courses", init_courses_admin_router())
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                ),
        )
        .with_state(state.clone())
        // headroom over the upload cap so multipart overhead still parses
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
