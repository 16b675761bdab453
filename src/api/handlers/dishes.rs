use crate::AppState;
use crate::api::error::{AppError, DbResultExt, MSG_DISH_ID_REQUIRED, MSG_DISH_NOT_FOUND};
use crate::models::{CreatedResponse, DishPayload, DishWithCategory, PublicDish, SuccessResponse};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

const MSG_FETCH_FAILED: &str = "Erro ao buscar prato";
const MSG_UPDATE_FAILED: &str = "Erro ao atualizar prato";
const MSG_DELETE_FAILED: &str = "Erro ao excluir prato";
const MSG_LIST_FAILED: &str = "Erro ao buscar pratos";
const MSG_CREATE_FAILED: &str = "Erro ao criar prato";

/// Normalizes the `{id}` path segment.
///
/// A blank segment is a client error. Anything that is not an integer can
/// never match a row, so it yields `None` rather than an error.
pub fn parse_dish_id(raw: &str) -> Result<Option<i32>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest(MSG_DISH_ID_REQUIRED.to_string()));
    }
    Ok(raw.parse().ok())
}

#[utoipa::path(
    get,
    path = "/api/dishes/{id}",
    params(("id" = String, Path, description = "Dish ID")),
    responses(
        (status = 200, description = "Dish with its category name", body = DishWithCategory),
        (status = 400, description = "Missing dish id"),
        (status = 404, description = "Dish not found or deleted"),
        (status = 500, description = "Storage failure")
    ),
    tag = "dishes"
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DishWithCategory>, AppError> {
    let id = parse_dish_id(&raw_id)?;
    info!("🔎 Fetching dish with ID: {}", raw_id);

    let Some(id) = id else {
        return Err(AppError::NotFound(MSG_DISH_NOT_FOUND.to_string()));
    };

    state
        .dish_service
        .find_visible(id)
        .await
        .context(MSG_FETCH_FAILED)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(MSG_DISH_NOT_FOUND.to_string()))
}

#[utoipa::path(
    put,
    path = "/api/dishes/{id}",
    params(("id" = String, Path, description = "Dish ID")),
    request_body = DishPayload,
    responses(
        (status = 200, description = "Dish overwritten", body = SuccessResponse),
        (status = 400, description = "Missing dish id"),
        (status = 500, description = "Storage failure or unreadable body")
    ),
    tag = "dishes"
)]
pub async fn update_dish(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<DishPayload>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = parse_dish_id(&raw_id)?;

    // The body is not validated: a value the column cannot hold fails the
    // same way a storage error does.
    let Json(payload) =
        payload.map_err(|e| AppError::internal(MSG_UPDATE_FAILED, e.body_text()))?;

    if let Some(id) = id {
        state
            .dish_service
            .update(id, &payload)
            .await
            .context(MSG_UPDATE_FAILED)?;
    }

    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/dishes/{id}",
    params(("id" = String, Path, description = "Dish ID")),
    responses(
        (status = 200, description = "Dish marked as deleted (also for unknown ids)", body = SuccessResponse),
        (status = 400, description = "Missing dish id"),
        (status = 500, description = "Storage failure")
    ),
    tag = "dishes"
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = parse_dish_id(&raw_id)?;

    if let Some(id) = id {
        state
            .dish_service
            .soft_delete(id)
            .await
            .context(MSG_DELETE_FAILED)?;
    }

    Ok(Json(SuccessResponse::ok()))
}

/// `/api/dishes/` with an empty id segment.
pub async fn missing_dish_id() -> AppError {
    AppError::BadRequest(MSG_DISH_ID_REQUIRED.to_string())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[utoipa::path(
    get,
    path = "/api/dishes/public",
    responses(
        (status = 200, description = "Active dishes in menu order", body = Vec<PublicDish>),
        (status = 500, description = "Storage failure")
    ),
    tag = "public"
)]
pub async fn list_public_dishes(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicDish>>, AppError> {
    let dishes = state
        .dish_service
        .list_public()
        .await
        .context(MSG_LIST_FAILED)?;

    Ok(Json(dishes))
}

#[utoipa::path(
    get,
    path = "/api/dishes",
    responses(
        (status = 200, description = "Active and paused dishes", body = Vec<DishWithCategory>),
        (status = 500, description = "Storage failure")
    ),
    tag = "dishes"
)]
pub async fn list_dishes(
    State(state): State<AppState>,
) -> Result<Json<Vec<DishWithCategory>>, AppError> {
    let dishes = state
        .dish_service
        .list_admin()
        .await
        .context(MSG_LIST_FAILED)?;

    Ok(Json(dishes))
}

#[utoipa::path(
    post,
    path = "/api/dishes",
    request_body = DishPayload,
    responses(
        (status = 201, description = "Dish created", body = CreatedResponse),
        (status = 400, description = "Invalid body"),
        (status = 500, description = "Storage failure")
    ),
    tag = "dishes"
)]
pub async fn create_dish(
    State(state): State<AppState>,
    payload: Result<Json<DishPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let dish = state
        .dish_service
        .create(&payload)
        .await
        .context(MSG_CREATE_FAILED)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            id: dish.id,
        }),
    ))
}
