//! API 错误与统一错误响应。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};
use trivia_api_types::ErrorResponse;
use trivia_core::domain::DomainError;

/// API 错误类型，每种错误对应固定的状态码与提示信息。
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 删除不存在的题目时返回 416。
    #[error("Requested range not satisfiable")]
    OutOfRange,

    #[error("Expecting application/json")]
    MissingBody,

    #[error("Unprocessable Entity")]
    InvalidEntity,

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::OutOfRange => StatusCode::RANGE_NOT_SATISFIABLE,
            ApiError::MissingBody => StatusCode::EXPECTATION_FAILED,
            ApiError::InvalidEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "request body is missing or not JSON");
        ApiError::MissingBody
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(error = %rejection, "path parameter rejected");
        ApiError::NotFound
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyField(_) => ApiError::InvalidEntity,
            // 难度不做校验，无法写入整数列时按存储失败处理。
            DomainError::InvalidDifficulty(_) => ApiError::Internal(err.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(err) = &self {
            error!(error = ?err, "request failed with internal error");
        }

        let body = Json(ErrorResponse::new(status.as_u16(), self.to_string()));
        (status, body).into_response()
    }
}

/// 未匹配路由的兜底处理。
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// 路由存在但方法不受支持时的兜底处理。
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use trivia_api_types::ErrorResponse;
    use trivia_core::domain::DomainError;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read error body");
        let body = serde_json::from_slice(&bytes).expect("error body should be JSON");
        (status, body)
    }

    #[tokio::test]
    async fn out_of_range_renders_uniform_envelope() {
        let (status, body) = render(ApiError::OutOfRange).await;

        assert_eq!(status, StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(
            body,
            ErrorResponse::new(416, "Requested range not satisfiable")
        );
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let (status, body) =
            render(ApiError::Internal(anyhow::anyhow!("connection refused"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
        assert!(!body.success);
    }

    #[test]
    fn domain_errors_map_to_status_codes() {
        assert_eq!(
            ApiError::from(DomainError::EmptyField("answer")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(DomainError::InvalidDifficulty("x".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn every_kind_has_a_fixed_status() {
        let cases = [
            (ApiError::NotFound, 404, "Not found"),
            (ApiError::MethodNotAllowed, 405, "Method not allowed"),
            (ApiError::MissingBody, 417, "Expecting application/json"),
            (ApiError::InvalidEntity, 422, "Unprocessable Entity"),
        ];

        for (err, code, message) in cases {
            assert_eq!(err.status().as_u16(), code);
            assert_eq!(err.to_string(), message);
        }
    }
}
