use crate::entities::{categories, dishes, prelude::*};
use crate::models::{DishPayload, DishWithCategory, PublicDish};
use chrono::Utc;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, sea_query::Expr,
};
use tracing::{debug, info};

/// Dish persistence. Every method issues a single SQL statement.
pub struct DishService {
    db: DatabaseConnection,
}

impl DishService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a dish that is not soft-deleted, joined with its category name.
    pub async fn find_visible(&self, id: i32) -> Result<Option<DishWithCategory>, DbErr> {
        debug!("🔎 Looking up dish {}", id);

        let dish = Dishes::find()
            .column_as(categories::Column::Name, "category_name")
            .join(JoinType::LeftJoin, dishes::Relation::Categories.def())
            .filter(dishes::Column::Id.eq(id))
            .filter(dishes::Column::Status.ne(ItemStatus::Deleted))
            .into_model::<DishWithCategory>()
            .one(&self.db)
            .await?;

        debug!("🔎 Dish {} found: {}", id, dish.is_some());
        Ok(dish)
    }

    /// Non-deleted dishes (active and paused) for the admin listing.
    pub async fn list_admin(&self) -> Result<Vec<DishWithCategory>, DbErr> {
        Dishes::find()
            .column_as(categories::Column::Name, "category_name")
            .join(JoinType::LeftJoin, dishes::Relation::Categories.def())
            .filter(dishes::Column::Status.ne(ItemStatus::Deleted))
            .order_by_asc(dishes::Column::DisplayOrder)
            .order_by_asc(dishes::Column::Id)
            .into_model::<DishWithCategory>()
            .all(&self.db)
            .await
    }

    /// Active dishes only, in menu order.
    pub async fn list_public(&self) -> Result<Vec<PublicDish>, DbErr> {
        Dishes::find()
            .select_only()
            .column(dishes::Column::Id)
            .column(dishes::Column::Name)
            .column(dishes::Column::MiniPresentation)
            .column(dishes::Column::ImageUrl)
            .column(dishes::Column::Price)
            .column_as(categories::Column::Name, "category_name")
            .join(JoinType::LeftJoin, dishes::Relation::Categories.def())
            .filter(dishes::Column::Status.eq(ItemStatus::Active))
            .order_by_asc(dishes::Column::DisplayOrder)
            .order_by_asc(dishes::Column::Id)
            .into_model::<PublicDish>()
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: &DishPayload) -> Result<dishes::Model, DbErr> {
        let now = Utc::now();
        let dish = dishes::ActiveModel {
            name: Set(payload.name.clone().unwrap_or_default()),
            mini_presentation: Set(payload.mini_presentation.clone()),
            full_description: Set(payload.full_description.clone()),
            image_url: Set(payload.image_url.clone()),
            category_id: Set(payload.category_id),
            price: Set(payload.price.unwrap_or(0.0)),
            status: Set(payload.status.unwrap_or_default()),
            display_order: Set(payload.display_order.unwrap_or(0)),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("🍽️  Created dish {} ({})", dish.id, dish.name);
        Ok(dish)
    }

    /// Overwrites every mutable column and stamps `updated_at`.
    ///
    /// Absent fields are written as NULL. There is no existence or version
    /// check: the last writer wins and an unknown id updates nothing.
    pub async fn update(&self, id: i32, payload: &DishPayload) -> Result<u64, DbErr> {
        let result = Dishes::update_many()
            .col_expr(dishes::Column::Name, Expr::value(payload.name.clone()))
            .col_expr(
                dishes::Column::MiniPresentation,
                Expr::value(payload.mini_presentation.clone()),
            )
            .col_expr(
                dishes::Column::FullDescription,
                Expr::value(payload.full_description.clone()),
            )
            .col_expr(dishes::Column::ImageUrl, Expr::value(payload.image_url.clone()))
            .col_expr(dishes::Column::CategoryId, Expr::value(payload.category_id))
            .col_expr(dishes::Column::Price, Expr::value(payload.price))
            .col_expr(
                dishes::Column::Status,
                Expr::value(payload.status.map(|s| s.to_value())),
            )
            .col_expr(dishes::Column::DisplayOrder, Expr::value(payload.display_order))
            .col_expr(dishes::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(dishes::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        info!("✏️  Updated dish {} (rows: {})", id, result.rows_affected);
        Ok(result.rows_affected)
    }

    /// Marks the dish as deleted. Unknown ids are not an error.
    pub async fn soft_delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = Dishes::update_many()
            .col_expr(
                dishes::Column::Status,
                Expr::value(ItemStatus::Deleted.to_value()),
            )
            .filter(dishes::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        info!("🗑️  Soft-deleted dish {} (rows: {})", id, result.rows_affected);
        Ok(result.rows_affected)
    }
}
