use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use giftlist_core::error::CoreError;
use giftlist_db::error::constraints;
use giftlist_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `giftlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `giftlist_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path segment that could not be parsed into the expected type.
    #[error("Unparseable path: {0}")]
    InvalidPath(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::InvalidShareLink => (
                    StatusCode::NOT_FOUND,
                    "INVALID_SHARE_LINK",
                    core.to_string(),
                ),
                CoreError::Gone(msg) => (StatusCode::GONE, "GONE", msg.clone()),
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidPath(detail) => {
                tracing::debug!(error = %detail, "Rejected unparseable path");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Resource not found".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}

/// Classify a storage error into an HTTP status, error code, and message.
///
/// - Unique constraint violations map to 400 with code `CONFLICT`, with a
///   friendly message for the constraints users can trip.
/// - Foreign key violations mean the parent row vanished mid-request: 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::UniqueViolation(constraint) => {
            let message = match constraint.as_str() {
                constraints::UQ_USERS_EMAIL => "Email is already registered".to_string(),
                constraints::UQ_PURCHASES_ITEM_USER => "Item already purchased by you".to_string(),
                other => format!("Duplicate value violates unique constraint: {other}"),
            };
            (StatusCode::BAD_REQUEST, "CONFLICT", message)
        }
        StoreError::ForeignKeyViolation(constraint) => {
            tracing::debug!(constraint = %constraint, "Parent row missing");
            (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            )
        }
        StoreError::Database(db_err) => {
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use uuid::Uuid;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn status_codes_follow_taxonomy() {
        let cases = [
            (AppError::Core(CoreError::Validation("x".into())), StatusCode::BAD_REQUEST),
            (AppError::Core(CoreError::Unauthorized("x".into())), StatusCode::UNAUTHORIZED),
            (AppError::Core(CoreError::Forbidden("x".into())), StatusCode::FORBIDDEN),
            (
                AppError::Core(CoreError::NotFound {
                    entity: "Wishlist",
                    id: Uuid::new_v4(),
                }),
                StatusCode::NOT_FOUND,
            ),
            (AppError::Core(CoreError::InvalidShareLink), StatusCode::NOT_FOUND),
            (AppError::Core(CoreError::Gone("x".into())), StatusCode::GONE),
            (AppError::Core(CoreError::Conflict("x".into())), StatusCode::BAD_REQUEST),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidPath("x".into()), StatusCode::NOT_FOUND),
        ];
        for (err, expected) in cases {
            let (status, _) = render(err).await;
            assert_eq!(status, expected);
        }
    }

    #[tokio::test]
    async fn database_errors_are_sanitized() {
        let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "An internal error occurred");
        assert_eq!(json["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn duplicate_purchase_is_bad_request_with_conflict_code() {
        let err = AppError::Store(StoreError::UniqueViolation(
            constraints::UQ_PURCHASES_ITEM_USER.into(),
        ));
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "CONFLICT");
        assert_eq!(json["error"], "Item already purchased by you");
    }

    #[tokio::test]
    async fn unparseable_path_hides_parser_detail() {
        let err = AppError::InvalidPath("Cannot parse `id` with value `x`".into());
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "Resource not found");
    }

    #[tokio::test]
    async fn missing_parent_row_is_not_found() {
        let err = AppError::Store(StoreError::ForeignKeyViolation(
            constraints::FK_PURCHASES_ITEM.into(),
        ));
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
    }
}
