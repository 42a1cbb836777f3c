use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    /// A referenced record was absent when the dependent write was validated.
    #[error("{0} was not found")]
    DependencyNotFound(&'static str),

    #[error("Order {0} has no items")]
    EmptyOrder(String),

    #[error("Unauthorized {0}")]
    Unauthorized(String),

    #[error("Store operation timed out")]
    StoreTimeout,

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            AppError::DependencyNotFound(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Dependency not found")
            }
            AppError::EmptyOrder(_) => (StatusCode::CONFLICT, "Order has no items"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::StoreTimeout => (StatusCode::GATEWAY_TIMEOUT, "Store timeout"),
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = ApiResponse {
            message: message.to_string(),
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn message_names_the_kind_and_data_carries_the_detail() {
        let (status, body) = body_of(AppError::DependencyNotFound("Table")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Dependency not found");
        assert_eq!(body["data"]["error"], "Table was not found");
    }

    #[tokio::test]
    async fn empty_order_is_a_conflict() {
        let (status, body) = body_of(AppError::EmptyOrder("o-1".into())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Order has no items");
        assert_eq!(body["data"]["error"], "Order o-1 has no items");
    }
}
