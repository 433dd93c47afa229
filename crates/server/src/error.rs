// crates/server/src/error.rs
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobly_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Error message: a single string, or every violation for schema failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorBody {
    pub message: ErrorMessage,
    pub status: u16,
}

/// Structured JSON error response: `{ "error": { "message", "status" } }`
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: ErrorMessage::One(message.into()),
                status: status.as_u16(),
            },
        }
    }

    pub fn with_messages(status: StatusCode, messages: Vec<String>) -> Self {
        Self {
            error: ErrorBody {
                message: ErrorMessage::Many(messages),
                status: status.as_u16(),
            },
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request failed schema validation; carries every violation in order.
    #[error("Schema violation: {}", .0.join("; "))]
    SchemaViolation(Vec<String>),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(StatusCode::BAD_REQUEST, msg.clone()),
                )
            }
            ApiError::SchemaViolation(errors) => {
                tracing::warn!(violations = ?errors, "Schema validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_messages(StatusCode::BAD_REQUEST, errors.clone()),
                )
            }
            ApiError::Unauthorized => {
                tracing::warn!("Unauthorized");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new(StatusCode::UNAUTHORIZED, "Unauthorized"),
                )
            }
            ApiError::Forbidden => {
                tracing::warn!("Forbidden: admin required");
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new(StatusCode::FORBIDDEN, "Admin privileges required"),
                )
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(message = %msg, "Not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(StatusCode::NOT_FOUND, msg.clone()),
                )
            }
            ApiError::Database(db_err) => match db_err {
                DbError::NotFound(msg) => {
                    tracing::warn!(message = %msg, "Not found");
                    (
                        StatusCode::NOT_FOUND,
                        ErrorResponse::new(StatusCode::NOT_FOUND, msg.clone()),
                    )
                }
                DbError::BadRequest(msg) => {
                    tracing::warn!(message = %msg, "Bad request");
                    (
                        StatusCode::BAD_REQUEST,
                        ErrorResponse::new(StatusCode::BAD_REQUEST, msg.clone()),
                    )
                }
                other => {
                    tracing::error!(error = %other, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error",
                        ),
                    )
                }
            },
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_not_found_returns_404() {
        let (status, body) =
            extract_response(ApiError::NotFound("No job: 3".to_string()).into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.status, 404);
        assert_eq!(body.error.message, ErrorMessage::One("No job: 3".to_string()));
    }

    #[tokio::test]
    async fn test_schema_violation_keeps_every_message() {
        let errors = vec![
            "\"title\" is a required property".to_string(),
            "\"companyHandle\" is a required property".to_string(),
        ];
        let (status, body) =
            extract_response(ApiError::SchemaViolation(errors.clone()).into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.status, 400);
        assert_eq!(body.error.message, ErrorMessage::Many(errors));
    }

    #[tokio::test]
    async fn test_bad_request_returns_400() {
        let (status, body) =
            extract_response(ApiError::BadRequest("No data".to_string()).into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.message, ErrorMessage::One("No data".to_string()));
    }

    #[tokio::test]
    async fn test_auth_errors() {
        let (status, body) = extract_response(ApiError::Unauthorized.into_response()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error.status, 401);

        let (status, body) = extract_response(ApiError::Forbidden.into_response()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error.status, 403);
    }

    #[tokio::test]
    async fn test_db_not_found_maps_to_404() {
        let err = ApiError::Database(DbError::NotFound("No job: 9".to_string()));
        let (status, body) = extract_response(err.into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.message, ErrorMessage::One("No job: 9".to_string()));
    }

    #[tokio::test]
    async fn test_db_bad_request_maps_to_400() {
        let err = ApiError::Database(DbError::BadRequest("No company: x".to_string()));
        let (status, _) = extract_response(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = ApiError::Internal("pool exploded".to_string());
        let (status, body) = extract_response(err.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        // Internal errors should NOT expose details to clients
        assert_eq!(
            body.error.message,
            ErrorMessage::One("Internal server error".to_string())
        );
    }

    #[tokio::test]
    async fn test_db_other_error_hides_details() {
        let err = ApiError::Database(DbError::NoDataDir);
        let (status, body) = extract_response(err.into_response()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.status, 500);
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_value(ErrorResponse::new(StatusCode::NOT_FOUND, "gone")).unwrap();
        assert_eq!(json, serde_json::json!({"error": {"message": "gone", "status": 404}}));

        let json = serde_json::to_value(ErrorResponse::with_messages(
            StatusCode::BAD_REQUEST,
            vec!["a".to_string(), "b".to_string()],
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": {"message": ["a", "b"], "status": 400}})
        );
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::NotFound("No job: 1".to_string()).to_string(),
            "Not found: No job: 1"
        );
        assert_eq!(
            ApiError::SchemaViolation(vec!["a".to_string(), "b".to_string()]).to_string(),
            "Schema violation: a; b"
        );
    }
}
