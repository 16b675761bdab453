use crate::entities::{beverages, categories, prelude::*};
use crate::models::{CategoryResponse, PublicBeverage};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Read-only lookups for the entities that sit around dishes.
pub struct CatalogService {
    db: DatabaseConnection,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active beverages in menu order.
    pub async fn public_beverages(&self) -> Result<Vec<PublicBeverage>, DbErr> {
        Beverages::find()
            .select_only()
            .column(beverages::Column::Id)
            .column(beverages::Column::Name)
            .column(beverages::Column::ImageUrl)
            .filter(beverages::Column::Status.eq(ItemStatus::Active))
            .order_by_asc(beverages::Column::DisplayOrder)
            .order_by_asc(beverages::Column::Id)
            .into_model::<PublicBeverage>()
            .all(&self.db)
            .await
    }

    pub async fn categories(&self) -> Result<Vec<CategoryResponse>, DbErr> {
        Categories::find()
            .order_by_asc(categories::Column::Name)
            .into_model::<CategoryResponse>()
            .all(&self.db)
            .await
    }
}
