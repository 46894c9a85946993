use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use ginger_core::domain::common::entities::app_errors::CoreError;
use serde_json::json;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Carries the upstream's raw text so clients can see what the model
    /// actually said.
    #[error("Upstream failure: {message}")]
    UpstreamFailure { message: String, raw: String },

    #[error("Internal server error")]
    InternalServerError,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::Validation(message) => ApiError::Validation(message),
            CoreError::UpstreamFailure { message, raw } => {
                ApiError::UpstreamFailure { message, raw }
            }
            CoreError::InternalServerError => ApiError::InternalServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message, raw) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "Not Found", message, None),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "Conflict", message, None),
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, "Bad Request", message, None)
            }
            ApiError::UpstreamFailure { message, raw } => (
                StatusCode::BAD_GATEWAY,
                "Bad Gateway",
                message,
                Some(raw),
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "internal server error".to_string(),
                None,
            ),
        };

        let mut body = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": status.as_u16(),
            "error": error,
            "message": message,
        });
        if let Some(raw) = raw
            && !raw.is_empty()
        {
            body["raw"] = json!(raw);
        }

        (status, Json(body)).into_response()
    }
}

/// Json extractor that also runs `validator` rules before the handler sees
/// the payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::Validation(validation_errors_to_string(&e)))?;

        Ok(ValidateJson(value))
    }
}

fn validation_errors_to_string(errors: &validator::ValidationErrors) -> String {
    let details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();

    details.join(", ")
}
