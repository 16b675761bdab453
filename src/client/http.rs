use super::{ClientError, ClientResult, MenuApi};
use crate::models::{DishPayload, DishWithCategory, PublicBeverage, PublicDish};
use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// `MenuApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMenuApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpMenuApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> ClientResult<Self> {
        // Url::join drops the last segment unless the base ends with '/'.
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn dish_endpoint(&self, id: &str) -> ClientResult<Url> {
        self.endpoint(&format!("api/dishes/{}", id))
    }
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("❌ Menu API answered {}: {}", status, body);
    Err(ClientError::Status(status))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl MenuApi for HttpMenuApi {
    async fn get_dish(&self, id: &str) -> ClientResult<DishWithCategory> {
        let url = self.dish_endpoint(id)?;
        debug!("GET {}", url);
        let response = ensure_success(self.client.get(url).send().await?).await?;
        decode(response).await
    }

    async fn update_dish(&self, id: &str, payload: &DishPayload) -> ClientResult<()> {
        let url = self.dish_endpoint(id)?;
        debug!("PUT {}", url);
        ensure_success(self.client.put(url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn delete_dish(&self, id: &str) -> ClientResult<()> {
        let url = self.dish_endpoint(id)?;
        debug!("DELETE {}", url);
        ensure_success(self.client.delete(url).send().await?).await?;
        Ok(())
    }

    async fn public_dishes(&self) -> ClientResult<Vec<PublicDish>> {
        let url = self.endpoint("api/dishes/public")?;
        let response = ensure_success(self.client.get(url).send().await?).await?;
        decode(response).await
    }

    async fn public_beverages(&self) -> ClientResult<Vec<PublicBeverage>> {
        let url = self.endpoint("api/beverages/public")?;
        let response = ensure_success(self.client.get(url).send().await?).await?;
        decode(response).await
    }
}
