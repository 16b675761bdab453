use crate::AppState;
use crate::api::error::{AppError, DbResultExt};
use crate::models::PublicBeverage;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/api/beverages/public",
    responses(
        (status = 200, description = "Active beverages in menu order", body = Vec<PublicBeverage>),
        (status = 500, description = "Storage failure")
    ),
    tag = "public"
)]
pub async fn list_public_beverages(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicBeverage>>, AppError> {
    let beverages = state
        .catalog_service
        .public_beverages()
        .await
        .context("Erro ao buscar bebidas")?;

    Ok(Json(beverages))
}
