use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

const DISH_PATH_PREFIX: &str = "/api/dishes/";

/// The `{id}` segment of a single-dish request, if the path is one.
pub fn dish_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(DISH_PATH_PREFIX)
        .filter(|id| !id.is_empty() && !id.contains('/') && *id != "public")
}

/// Logs one `request_completed` event per request under the `metrics`
/// target, keyed by route template so dish ids don't explode cardinality.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let dish_id = dish_id_from_path(req.uri().path()).map(str::to_owned);

    let response = next.run(req).await;

    info!(
        target: "metrics",
        method = %method,
        route = %route,
        dish_id = dish_id.as_deref().unwrap_or("-"),
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request_completed"
    );

    response
}
