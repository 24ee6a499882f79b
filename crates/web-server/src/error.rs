use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Record store error: {0}")]
    Store(#[source] BoxError),
}

impl AppError {
    /// Wraps whatever error the configured record store produced.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::Store(Box::new(err))
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Store(store_err) => {
                tracing::error!(error = %store_err, "Record store error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal record store error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
