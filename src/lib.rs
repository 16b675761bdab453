pub mod api;
pub mod client;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod views;

use crate::api::handlers::{beverages, categories, dishes, health};
use crate::api::middleware::request_id::REQUEST_ID_HEADER;
use crate::config::AppConfig;
use crate::services::{catalog_service::CatalogService, dish_service::DishService};
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Method, Request, header},
    middleware::from_fn,
    response::Response,
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::dishes::get_dish,
        api::handlers::dishes::update_dish,
        api::handlers::dishes::delete_dish,
        api::handlers::dishes::list_dishes,
        api::handlers::dishes::create_dish,
        api::handlers::dishes::list_public_dishes,
        api::handlers::beverages::list_public_beverages,
        api::handlers::categories::list_categories,
        api::handlers::health::health_check,
    ),
    components(
        schemas(
            models::DishWithCategory,
            models::PublicDish,
            models::PublicBeverage,
            models::CategoryResponse,
            models::DishPayload,
            models::SuccessResponse,
            models::CreatedResponse,
            entities::status::ItemStatus,
            api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "dishes", description = "Dish administration endpoints"),
        (name = "public", description = "Anonymous menu listings"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub dish_service: Arc<DishService>,
    pub catalog_service: Arc<CatalogService>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            dish_service: Arc::new(DishService::new(db.clone())),
            catalog_service: Arc::new(CatalogService::new(db.clone())),
            db,
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route(
            "/api/dishes",
            get(dishes::list_dishes)
                .post(dishes::create_dish)
                .fallback(dishes::method_not_allowed),
        )
        .route(
            "/api/dishes/",
            get(dishes::missing_dish_id)
                .put(dishes::missing_dish_id)
                .delete(dishes::missing_dish_id)
                .fallback(dishes::method_not_allowed),
        )
        .route(
            "/api/dishes/public",
            get(dishes::list_public_dishes).fallback(dishes::method_not_allowed),
        )
        .route(
            "/api/dishes/:id",
            get(dishes::get_dish)
                .put(dishes::update_dish)
                .delete(dishes::delete_dish)
                .fallback(dishes::method_not_allowed),
        )
        .route(
            "/api/beverages/public",
            get(beverages::list_public_beverages).fallback(dishes::method_not_allowed),
        )
        .route(
            "/api/categories",
            get(categories::list_categories).fallback(dishes::method_not_allowed),
        )
        .layer(from_fn(api::middleware::metrics::metrics_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("📥 {} {}", request.method(), request.uri());
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    info!(
                        "📤 Finished in {:?} with status {}",
                        latency,
                        response.status()
                    );
                }),
        )
        // Outside the trace layer so every span carries an id.
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(cors_layer(&state.config))
        .layer(axum::extract::DefaultBodyLimit::max(
            state.config.max_body_size,
        ))
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allows_any_origin() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
