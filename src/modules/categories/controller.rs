use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::modules::categories::model::Category;
use crate::modules::categories::service::CategoryService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = CategoryService::get_categories(&state.db).await?;
    Ok(Json(categories))
}
