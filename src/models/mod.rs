//! Wire types shared by the HTTP handlers and the API client.

use crate::entities::status::ItemStatus;
use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A dish row joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct DishWithCategory {
    pub id: i32,
    pub name: String,
    pub mini_presentation: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub price: f64,
    pub status: ItemStatus,
    pub display_order: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub category_name: Option<String>,
}

/// Dish card as served to anonymous visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct PublicDish {
    pub id: i32,
    pub name: String,
    pub mini_presentation: Option<String>,
    pub image_url: Option<String>,
    pub price: f64,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct PublicBeverage {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

/// Body of `PUT /api/dishes/{id}` and `POST /api/dishes`.
///
/// PUT writes every field as given, absent ones included; only creation
/// runs the validation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct DishPayload {
    #[validate(required(message = "Nome do prato é obrigatório"), length(min = 1))]
    pub name: Option<String>,
    pub mini_presentation: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<ItemStatus>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i32,
}
