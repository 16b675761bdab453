//! Typed access to the menu HTTP API, as used by the views.

pub mod error;
pub mod http;

pub use error::{ClientError, ClientResult};
pub use http::HttpMenuApi;

use crate::models::{DishPayload, DishWithCategory, PublicBeverage, PublicDish};
use async_trait::async_trait;
use std::future::Future;
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait MenuApi: Send + Sync {
    /// `GET /api/dishes/{id}`
    async fn get_dish(&self, id: &str) -> ClientResult<DishWithCategory>;

    /// `PUT /api/dishes/{id}`
    async fn update_dish(&self, id: &str, payload: &DishPayload) -> ClientResult<()>;

    /// `DELETE /api/dishes/{id}`
    async fn delete_dish(&self, id: &str) -> ClientResult<()>;

    /// `GET /api/dishes/public`
    async fn public_dishes(&self) -> ClientResult<Vec<PublicDish>>;

    /// `GET /api/beverages/public`
    async fn public_beverages(&self) -> ClientResult<Vec<PublicBeverage>>;
}

/// Runs `fut` unless `token` fires first.
pub async fn cancellable<T, F>(token: &CancellationToken, fut: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ClientError::Cancelled),
        res = fut => res,
    }
}
