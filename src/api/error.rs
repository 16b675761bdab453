use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

pub const MSG_DISH_ID_REQUIRED: &str = "ID do prato é obrigatório";
pub const MSG_DISH_NOT_FOUND: &str = "Prato não encontrado";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Método não permitido";

#[derive(Error, Debug)]
pub enum AppError {
    /// Storage failure. `context` is the only text the caller sees.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Non-storage failure while serving `context`; `detail` is only logged.
    #[error("{context}: {detail}")]
    Internal {
        context: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn internal(context: &'static str, detail: impl ToString) -> Self {
        AppError::Internal {
            context,
            detail: detail.to_string(),
        }
    }
}

/// Attaches the caller-facing message to a storage result.
pub trait DbResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, AppError>;
}

impl<T> DbResultExt<T> for Result<T, DbErr> {
    fn context(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Database { context, source })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database { context, source } => {
                tracing::error!("{}: {:?}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                MSG_METHOD_NOT_ALLOWED.to_string(),
            ),
            AppError::Internal { context, detail } => {
                tracing::error!("{}: {}", context, detail);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
