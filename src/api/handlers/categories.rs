use crate::AppState;
use crate::api::error::{AppError, DbResultExt};
use crate::models::CategoryResponse;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories by name", body = Vec<CategoryResponse>),
        (status = 500, description = "Storage failure")
    ),
    tag = "dishes"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state
        .catalog_service
        .categories()
        .await
        .context("Erro ao buscar categorias")?;

    Ok(Json(categories))
}
